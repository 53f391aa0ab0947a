//! In-memory reference engine

use super::{EngineError, EngineStyleId, NativeStyle, SessionId, SpreadsheetEngine};
use crate::cell::{parse_cell_address, CellValue};
use crate::style::Color;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Largest font size accepted, in points
const MAX_FONT_SIZE: f64 = 409.0;

/// What the engine holds for one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedCell {
    /// Stored value
    pub value: CellValue,
    /// Attached style
    pub style: Option<EngineStyleId>,
}

#[derive(Debug)]
struct SheetData {
    name: String,
    /// Keyed by (row, column), both 1-based
    cells: BTreeMap<(u32, u32), RecordedCell>,
}

#[derive(Debug, Default)]
struct State {
    sheets: Vec<SheetData>,
    styles: Vec<NativeStyle>,
}

impl State {
    fn sheet_mut(&mut self, name: &str) -> Result<&mut SheetData, EngineError> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| EngineError::UnknownSheet(name.to_string()))
    }
}

/// Engine that keeps the whole workbook in memory
///
/// Validates styles the way a file-format engine would and counts every
/// style registration and assignment, which makes it suitable for tests and
/// dry runs. Each registration gets a fresh id; deduplication is the
/// caller's job.
#[derive(Debug)]
pub struct MemoryEngine {
    session: SessionId,
    state: Mutex<State>,
    unsupported_borders: HashSet<&'static str>,
    registrations: AtomicUsize,
    assignments: AtomicUsize,
}

impl MemoryEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self {
            session: SessionId::unique(),
            state: Mutex::default(),
            unsupported_borders: HashSet::new(),
            registrations: AtomicUsize::new(0),
            assignments: AtomicUsize::new(0),
        }
    }

    /// Refuse styles using the given border line style name (e.g., "slantDashDot")
    pub fn without_border_style(mut self, name: &'static str) -> Self {
        self.unsupported_borders.insert(name);
        self
    }

    /// Number of `register_style` calls that succeeded
    pub fn registration_count(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    /// Number of `assign_style` calls that succeeded
    pub fn assignment_count(&self) -> usize {
        self.assignments.load(Ordering::SeqCst)
    }

    /// Sheet names in creation order
    pub fn sheet_names(&self) -> Vec<String> {
        self.state().sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// A registered style by id
    pub fn style(&self, id: EngineStyleId) -> Option<NativeStyle> {
        self.state().styles.get(id.0 as usize).cloned()
    }

    /// Number of registered styles
    pub fn style_count(&self) -> usize {
        self.state().styles.len()
    }

    /// What is stored at `address` on `sheet`
    pub fn cell(&self, sheet: &str, address: &str) -> Option<RecordedCell> {
        let key = parse_cell_address(address).ok()?;
        self.state()
            .sheets
            .iter()
            .find(|s| s.name == sheet)?
            .cells
            .get(&key)
            .cloned()
    }

    /// Style attached to `address` on `sheet`
    pub fn cell_style(&self, sheet: &str, address: &str) -> Option<EngineStyleId> {
        self.cell(sheet, address)?.style
    }

    /// Value stored at `address` on `sheet` (empty when unset)
    pub fn cell_value(&self, sheet: &str, address: &str) -> CellValue {
        self.cell(sheet, address).map(|c| c.value).unwrap_or_default()
    }

    /// Number of cells holding a value or a style on `sheet`
    pub fn cell_count(&self, sheet: &str) -> usize {
        self.state()
            .sheets
            .iter()
            .find(|s| s.name == sheet)
            .map_or(0, |s| s.cells.len())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn validate(&self, style: &NativeStyle) -> Result<(), EngineError> {
        if let Some(size) = style.font_size {
            if !size.is_finite() || !(1.0..=MAX_FONT_SIZE).contains(&size) {
                return Err(EngineError::InvalidFontSize(size));
            }
        }

        let colors = [style.font_color.as_deref(), style.fill_color.as_deref()]
            .into_iter()
            .chain(style.borders().map(|(_, b)| b.color.as_deref()))
            .flatten();
        for color in colors {
            if Color::from_hex(color).is_none() {
                return Err(EngineError::InvalidColor(color.to_string()));
            }
        }

        for (_, border) in style.borders() {
            if self.unsupported_borders.contains(border.style) {
                return Err(EngineError::UnsupportedBorderStyle(border.style.to_string()));
            }
        }

        if let Some(format) = &style.number_format {
            if format.trim().is_empty() {
                return Err(EngineError::InvalidNumberFormat(format.clone()));
            }
        }

        Ok(())
    }
}

fn cell_key(address: &str) -> Result<(u32, u32), EngineError> {
    parse_cell_address(address).map_err(|e| EngineError::Rejected(e.to_string()))
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadsheetEngine for MemoryEngine {
    fn session_id(&self) -> SessionId {
        self.session
    }

    fn add_sheet(&self, name: &str) -> Result<(), EngineError> {
        let mut state = self.state();
        if state.sheets.iter().any(|s| s.name == name) {
            return Err(EngineError::DuplicateSheet(name.to_string()));
        }
        state.sheets.push(SheetData {
            name: name.to_string(),
            cells: BTreeMap::new(),
        });
        Ok(())
    }

    fn register_style(&self, style: &NativeStyle) -> Result<EngineStyleId, EngineError> {
        self.validate(style)?;

        let mut state = self.state();
        let id = EngineStyleId(state.styles.len() as u32);
        state.styles.push(style.clone());
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    fn assign_style(
        &self,
        sheet: &str,
        address: &str,
        style: EngineStyleId,
    ) -> Result<(), EngineError> {
        let key = cell_key(address)?;
        let mut state = self.state();
        if style.0 as usize >= state.styles.len() {
            return Err(EngineError::UnknownStyle(style));
        }
        state.sheet_mut(sheet)?.cells.entry(key).or_default().style = Some(style);
        self.assignments.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write_value(
        &self,
        sheet: &str,
        address: &str,
        value: &CellValue,
    ) -> Result<(), EngineError> {
        let key = cell_key(address)?;
        self.state()
            .sheet_mut(sheet)?
            .cells
            .entry(key)
            .or_default()
            .value = value.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NativeBorder;

    fn engine_with_sheet() -> MemoryEngine {
        let engine = MemoryEngine::new();
        engine.add_sheet("Sheet1").unwrap();
        engine
    }

    #[test]
    fn test_register_and_assign() {
        let engine = engine_with_sheet();
        let style = NativeStyle {
            bold: true,
            font_size: Some(12.0),
            ..Default::default()
        };

        let id = engine.register_style(&style).unwrap();
        engine.assign_style("Sheet1", "B2", id).unwrap();
        engine
            .write_value("Sheet1", "B2", &CellValue::Integer(5))
            .unwrap();

        assert_eq!(engine.style(id), Some(style));
        assert_eq!(engine.cell_style("Sheet1", "B2"), Some(id));
        assert_eq!(engine.cell_value("Sheet1", "B2"), CellValue::Integer(5));
        assert_eq!(engine.registration_count(), 1);
        assert_eq!(engine.assignment_count(), 1);
        assert_eq!(engine.cell_count("Sheet1"), 1);
    }

    #[test]
    fn test_rejects_bad_styles() {
        let engine = MemoryEngine::new().without_border_style("slantDashDot");

        let bad_color = NativeStyle {
            font_color: Some("crimson".into()),
            ..Default::default()
        };
        assert_eq!(
            engine.register_style(&bad_color),
            Err(EngineError::InvalidColor("crimson".into()))
        );

        let bad_size = NativeStyle {
            font_size: Some(-3.0),
            ..Default::default()
        };
        assert_eq!(
            engine.register_style(&bad_size),
            Err(EngineError::InvalidFontSize(-3.0))
        );

        let bad_border = NativeStyle {
            border_left: Some(NativeBorder {
                style: "slantDashDot",
                color: None,
            }),
            ..Default::default()
        };
        assert!(matches!(
            engine.register_style(&bad_border),
            Err(EngineError::UnsupportedBorderStyle(_))
        ));

        let bad_format = NativeStyle {
            number_format: Some("  ".into()),
            ..Default::default()
        };
        assert!(engine.register_style(&bad_format).is_err());

        assert_eq!(engine.registration_count(), 0);
        assert_eq!(engine.style_count(), 0);
    }

    #[test]
    fn test_unknown_sheet_and_style() {
        let engine = engine_with_sheet();
        let id = engine.register_style(&NativeStyle::default()).unwrap();

        assert_eq!(
            engine.assign_style("Missing", "A1", id),
            Err(EngineError::UnknownSheet("Missing".into()))
        );
        assert_eq!(
            engine.assign_style("Sheet1", "A1", EngineStyleId(7)),
            Err(EngineError::UnknownStyle(EngineStyleId(7)))
        );
        assert_eq!(engine.assignment_count(), 0);
    }

    #[test]
    fn test_each_engine_is_its_own_session() {
        let a = MemoryEngine::new();
        let b = MemoryEngine::default();
        assert_ne!(a.session_id(), b.session_id());
        assert_eq!(a.session_id(), (&a).session_id());
    }

    #[test]
    fn test_duplicate_sheet() {
        let engine = engine_with_sheet();
        assert_eq!(
            engine.add_sheet("Sheet1"),
            Err(EngineError::DuplicateSheet("Sheet1".into()))
        );
        assert_eq!(engine.sheet_names(), vec!["Sheet1".to_string()]);
    }
}
