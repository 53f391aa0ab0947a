//! Builds a small styled sales report into the in-memory engine and prints
//! what the engine received.
//!
//! Run with: cargo run -p sheetwright --example styled_report

use sheetwright::prelude::*;

fn main() -> Result<()> {
    let workbook = Workbook::with_settings(
        MemoryEngine::new(),
        WorkbookSettings::new().with_sheet_names(SheetNamePolicy::AutoRename),
    );

    let header = Style::new()
        .bold(true)
        .font_color(Color::rgb(255, 255, 255))
        .fill_color(Color::rgb(0x30, 0x54, 0x96))
        .horizontal_alignment(HorizontalAlignment::Center);
    let money = Style::new().number_format("#,##0.00");
    let total = money.clone().bold(true).border_all(BorderLineStyle::Thin, "#000000");

    let regions = [("North", 120, 9.5), ("South", 80, 11.0), ("East", 45, 12.25)];

    let mut sheet = workbook.sheet("Sales")?;
    sheet
        .row()?
        .styled_cells(["Region", "Units", "Price", "Revenue"], &header)?;

    for (name, units, price) in regions {
        let mut row = sheet.row()?;
        let revenue = format!("B{0}*C{0}", row.index());
        row.cell(name)?
            .cell(units)?
            .styled(price, &money)?
            .styled(CellValue::formula(revenue), &money)?;
    }

    let last = sheet.next_row() - 1;
    sheet
        .row()?
        .cell("Total")?
        .skip(2)
        .styled(CellValue::formula(format!("SUM(D2:D{})", last)), &total)?;

    // A second "Sales" sheet gets renamed instead of failing
    let archive = workbook.sheet("Sales")?;
    println!("second sheet named '{}'", archive.name());

    let engine = workbook.engine();
    let stats = workbook.stats();
    println!(
        "{} cells written, {} styles registered, {} style assignments",
        sheet.cells_written(),
        engine.registration_count(),
        engine.assignment_count()
    );
    println!(
        "style cache: {} distinct, {} hits, {} misses",
        stats.distinct_styles, stats.hits, stats.misses
    );

    for handle in workbook.registry().handles() {
        if let Some(id) = handle.engine_style_id() {
            println!("{} -> {}: {:?}", handle.id(), id, engine.style(id));
        }
    }

    Ok(())
}
