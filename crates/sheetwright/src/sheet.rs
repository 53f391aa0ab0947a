//! Sheet builder

use std::sync::Arc;

use sheetwright_core::{
    CellAddress, CellValue, EngineStyleId, Error, Result, SpreadsheetEngine, Style,
    StyleApplier, StyleRegistry, MAX_ROWS,
};

use crate::row::Row;

/// Builder for one sheet
///
/// Rows are appended through a cursor that starts at row 1. A `Sheet` is
/// `Send`, so different sheets of the same workbook can be filled on
/// different threads.
#[derive(Debug)]
pub struct Sheet<E> {
    name: String,
    engine: Arc<E>,
    registry: Arc<StyleRegistry>,
    /// Next row handed out by `row()` (1-based)
    next_row: u32,
    cells_written: u64,
}

impl<E: SpreadsheetEngine> Sheet<E> {
    pub(crate) fn new(name: String, engine: Arc<E>, registry: Arc<StyleRegistry>) -> Self {
        Self {
            name,
            engine,
            registry,
            next_row: 1,
            cells_written: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start the next row
    pub fn row(&mut self) -> Result<Row<'_, E>> {
        let row = self.next_row;
        self.row_at(row)
    }

    /// Start the row at `row` (1-based); later `row()` calls continue after it
    pub fn row_at(&mut self, row: u32) -> Result<Row<'_, E>> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row {} outside 1..={}",
                row, MAX_ROWS
            )));
        }
        self.next_row = row + 1;
        Ok(Row::new(self, row))
    }

    /// Leave `n` empty rows before the next `row()`
    pub fn skip_rows(&mut self, n: u32) -> &mut Self {
        self.next_row = self.next_row.saturating_add(n);
        self
    }

    /// Row the next `row()` call will start
    pub fn next_row(&self) -> u32 {
        self.next_row
    }

    /// Write a single cell by A1 address, optionally styled
    ///
    /// If the engine rejects the style, the cell is left untouched.
    pub fn cell_at<V: Into<CellValue>>(
        &mut self,
        address: &str,
        value: V,
        style: Option<&Style>,
    ) -> Result<Option<EngineStyleId>> {
        let address = CellAddress::parse(address)?;
        self.write(address, value.into(), style)
    }

    /// Number of cells written successfully through this builder
    pub fn cells_written(&self) -> u64 {
        self.cells_written
    }

    /// The shared style registry
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Push one cell to the engine
    ///
    /// The style is registered before the cell is touched, so a rejected
    /// style leaves the cell as it was. Styles with no formatting are not
    /// registered.
    pub(crate) fn write(
        &mut self,
        address: CellAddress,
        value: CellValue,
        style: Option<&Style>,
    ) -> Result<Option<EngineStyleId>> {
        let address = address.to_a1_string();
        let applier = StyleApplier::new(&*self.engine);

        let handle = style
            .filter(|s| !s.is_default())
            .map(|s| self.registry.get_or_create(s));
        if let Some(handle) = &handle {
            applier.engine_style_id(handle)?;
        }

        if !value.is_empty() {
            applier.write_value(&self.name, &address, &value)?;
        }

        let style_id = match &handle {
            Some(handle) => Some(applier.apply(handle, &self.name, &address)?),
            None => None,
        };

        self.cells_written += 1;
        Ok(style_id)
    }
}
