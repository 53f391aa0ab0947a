//! Sheets filled from several threads share one style cache

use std::thread;

use pretty_assertions::assert_eq;
use sheetwright::prelude::*;

const THREADS: usize = 8;
const ROWS: u32 = 50;

fn palette() -> Vec<Style> {
    vec![
        Style::new().bold(true),
        Style::new().italic(true).font_color("#1F4E78"),
        Style::new().fill_color("#E2EFDA").number_format("#,##0"),
        Style::new().border_all(BorderLineStyle::Thin, "#000000"),
    ]
}

#[test]
fn test_parallel_sheets_register_each_style_once() {
    let workbook = Workbook::new(MemoryEngine::new());
    let styles = palette();

    let mut sheets: Vec<_> = (0..THREADS)
        .map(|i| workbook.sheet(&format!("Part {}", i)).unwrap())
        .collect();

    thread::scope(|s| {
        for sheet in sheets.iter_mut() {
            let styles = &styles;
            s.spawn(move || {
                for r in 0..ROWS {
                    let mut row = sheet.row().unwrap();
                    for (c, style) in styles.iter().enumerate() {
                        row.styled(r * 10 + c as u32, style).unwrap();
                    }
                }
            });
        }
    });

    let engine = workbook.engine();
    let per_sheet = ROWS as usize * styles.len();

    assert_eq!(engine.registration_count(), styles.len());
    assert_eq!(engine.assignment_count(), THREADS * per_sheet);
    assert_eq!(workbook.registry().len(), styles.len());

    let stats = workbook.stats();
    assert_eq!(stats.misses, styles.len() as u64);
    assert_eq!(stats.lookups(), (THREADS * per_sheet) as u64);

    // Same style, same engine id, whichever thread wrote the cell
    let first = engine.cell_style("Part 0", "B7").unwrap();
    for i in 1..THREADS {
        assert_eq!(engine.cell_style(&format!("Part {}", i), "B7"), Some(first));
        assert_eq!(engine.cell_count(&format!("Part {}", i)), per_sheet);
    }
}

#[test]
fn test_registry_shared_across_threads_returns_same_handle() {
    let workbook = Workbook::new(MemoryEngine::new());
    let style = Style::new().underline(Underline::Double).font_size(18.0);

    let handles: Vec<_> = thread::scope(|s| {
        let workers: Vec<_> = (0..16)
            .map(|_| s.spawn(|| workbook.registry().get_or_create(&style)))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for handle in &handles[1..] {
        assert!(std::sync::Arc::ptr_eq(&handles[0], handle));
    }
    assert_eq!(workbook.stats().distinct_styles, 1);
    assert_eq!(workbook.stats().misses, 1);
}
