//! Row builder

use sheetwright_core::{CellAddress, CellValue, Result, SpreadsheetEngine, Style};

use crate::sheet::Sheet;

/// Builder for one row, writing cells left to right
///
/// Every successful write moves the column cursor one step to the right, so a
/// row reads like the line it produces. A failed write leaves the cursor on
/// the same cell:
///
/// ```
/// use sheetwright::prelude::*;
///
/// let workbook = Workbook::new(MemoryEngine::new());
/// let mut sheet = workbook.sheet("Totals").unwrap();
/// let header = Style::new().bold(true);
///
/// sheet
///     .row()
///     .unwrap()
///     .styled("Item", &header)
///     .unwrap()
///     .skip(1)
///     .styled("Amount", &header)
///     .unwrap();
///
/// assert_eq!(workbook.engine().cell_value("Totals", "C1"), CellValue::text("Amount"));
/// assert_eq!(workbook.stats().distinct_styles, 1);
/// ```
#[derive(Debug)]
pub struct Row<'s, E> {
    sheet: &'s mut Sheet<E>,
    row: u32,
    /// Next column to write (1-based)
    next_column: u32,
    default_style: Option<Style>,
}

impl<'s, E: SpreadsheetEngine> Row<'s, E> {
    pub(crate) fn new(sheet: &'s mut Sheet<E>, row: u32) -> Self {
        Self {
            sheet,
            row,
            next_column: 1,
            default_style: None,
        }
    }

    /// Style used by [`cell`](Self::cell) and [`cells`](Self::cells)
    pub fn with_style(&mut self, style: Style) -> &mut Self {
        self.default_style = Some(style);
        self
    }

    /// Write a value using the row's default style, if any
    pub fn cell<V: Into<CellValue>>(&mut self, value: V) -> Result<&mut Self> {
        let style = self.default_style.take();
        let written = self.put(value.into(), style.as_ref());
        self.default_style = style;
        written?;
        Ok(self)
    }

    /// Write a value with an explicit style
    ///
    /// The style is registered with the engine before the value is stored. If
    /// the engine rejects it, the cell is left as it was and the cursor stays
    /// on it, so the write can be retried with another style.
    pub fn styled<V: Into<CellValue>>(&mut self, value: V, style: &Style) -> Result<&mut Self> {
        self.put(value.into(), Some(style))?;
        Ok(self)
    }

    /// Write several values using the row's default style
    pub fn cells<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for value in values {
            self.cell(value)?;
        }
        Ok(self)
    }

    /// Write several values sharing one style
    pub fn styled_cells<I, V>(&mut self, values: I, style: &Style) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for value in values {
            self.styled(value, style)?;
        }
        Ok(self)
    }

    /// Leave `n` cells empty
    pub fn skip(&mut self, n: u32) -> &mut Self {
        self.next_column = self.next_column.saturating_add(n);
        self
    }

    /// Row number (1-based)
    pub fn index(&self) -> u32 {
        self.row
    }

    /// Address the next cell will be written to
    pub fn next_address(&self) -> Result<CellAddress> {
        CellAddress::new(self.row, self.next_column)
    }

    fn put(&mut self, value: CellValue, style: Option<&Style>) -> Result<()> {
        let address = self.next_address()?;
        self.sheet.write(address, value, style)?;
        // next_address() bounded the column by MAX_COLS, so this cannot overflow
        self.next_column += 1;
        Ok(())
    }
}
