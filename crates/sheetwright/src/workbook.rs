//! Workbook builder - the root of the builder chain

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sheetwright_core::{
    Error, MemoryEngine, RegistryStats, Result, SpreadsheetEngine, StyleRegistry,
    MAX_SHEET_NAME_LEN,
};

use crate::settings::{SheetNamePolicy, WorkbookSettings};
use crate::sheet::Sheet;

/// Characters a sheet name may not contain
const INVALID_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook being built into an engine
///
/// The workbook owns the session's [`StyleRegistry`]; every sheet it hands out
/// shares that registry and the engine, so sheets may be filled on separate
/// threads.
#[derive(Debug)]
pub struct Workbook<E = MemoryEngine> {
    engine: Arc<E>,
    registry: Arc<StyleRegistry>,
    settings: WorkbookSettings,
    sheet_names: Mutex<Vec<String>>,
}

impl<E: SpreadsheetEngine> Workbook<E> {
    /// Start a workbook on `engine` with default settings
    pub fn new(engine: E) -> Self {
        Self::with_settings(engine, WorkbookSettings::default())
    }

    /// Start a workbook on `engine` with the given settings
    pub fn with_settings(engine: E, settings: WorkbookSettings) -> Self {
        Self {
            engine: Arc::new(engine),
            registry: Arc::new(StyleRegistry::with_capacity(settings.style_capacity)),
            settings,
            sheet_names: Mutex::new(Vec::new()),
        }
    }

    /// Add a sheet and return its builder
    ///
    /// # Example
    /// ```
    /// use sheetwright::prelude::*;
    ///
    /// let workbook = Workbook::new(MemoryEngine::new());
    /// let mut sheet = workbook.sheet("Data").unwrap();
    /// sheet.row().unwrap().cell("Hello").unwrap().cell(42).unwrap();
    ///
    /// assert!(workbook.sheet("data").is_err()); // names are case-insensitive
    /// ```
    pub fn sheet(&self, name: &str) -> Result<Sheet<E>> {
        validate_sheet_name(name)?;

        let mut names = self.names();
        let name = if is_taken(&names, name) {
            match self.settings.sheet_names {
                SheetNamePolicy::Reject => return Err(Error::DuplicateSheetName(name.into())),
                SheetNamePolicy::AutoRename => {
                    let renamed = unique_sheet_name(&names, name);
                    log::warn!("sheet name '{}' already used, renamed to '{}'", name, renamed);
                    renamed
                }
            }
        } else {
            name.to_string()
        };

        // Under the names lock so engine order matches ours
        self.engine.add_sheet(&name)?;
        names.push(name.clone());
        log::debug!("added sheet '{}'", name);

        Ok(Sheet::new(
            name,
            Arc::clone(&self.engine),
            Arc::clone(&self.registry),
        ))
    }

    /// Names of all sheets added so far, in order
    pub fn sheet_names(&self) -> Vec<String> {
        self.names().clone()
    }

    /// The session's style registry
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Style cache counters
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    /// The engine this workbook writes into
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    fn names(&self) -> MutexGuard<'_, Vec<String>> {
        self.sheet_names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validate a sheet name
fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    Ok(())
}

/// Sheet names compare case-insensitively
fn is_taken(names: &[String], name: &str) -> bool {
    let lower = name.to_lowercase();
    names.iter().any(|n| n.to_lowercase() == lower)
}

/// First free "name (n)", shortening `name` to stay within the length limit
fn unique_sheet_name(names: &[String], name: &str) -> String {
    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
        let candidate: String = name.chars().take(keep).chain(suffix.chars()).collect();
        if !is_taken(names, &candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sheet_name_validation() {
        assert!(validate_sheet_name("Sheet1").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name("[x]").is_err());
        assert!(validate_sheet_name(&"x".repeat(31)).is_ok());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
    }

    #[test]
    fn test_duplicate_rejected_by_default() {
        let workbook = Workbook::new(MemoryEngine::new());
        workbook.sheet("Report").unwrap();

        let err = workbook.sheet("REPORT").unwrap_err();
        assert!(matches!(err, Error::DuplicateSheetName(ref n) if n == "REPORT"));
        assert_eq!(workbook.sheet_names(), vec!["Report".to_string()]);
        assert_eq!(workbook.engine().sheet_names(), vec!["Report".to_string()]);
    }

    #[test]
    fn test_duplicate_auto_renamed() {
        let settings = WorkbookSettings::new().with_sheet_names(SheetNamePolicy::AutoRename);
        let workbook = Workbook::with_settings(MemoryEngine::new(), settings);

        assert_eq!(workbook.sheet("Data").unwrap().name(), "Data");
        assert_eq!(workbook.sheet("Data").unwrap().name(), "Data (2)");
        assert_eq!(workbook.sheet("data").unwrap().name(), "data (3)");
        assert_eq!(workbook.engine().sheet_names().len(), 3);
    }

    #[test]
    fn test_auto_rename_respects_length_limit() {
        let long = "L".repeat(MAX_SHEET_NAME_LEN);
        let renamed = unique_sheet_name(&[long.clone()], &long);
        assert_eq!(renamed.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(renamed.ends_with(" (2)"));
    }

    #[test]
    fn test_settings_presize_registry() {
        let settings = WorkbookSettings::new().with_style_capacity(4);
        let workbook = Workbook::with_settings(MemoryEngine::new(), settings);
        assert_eq!(workbook.settings().style_capacity, 4);
        assert!(workbook.registry().is_empty());
    }
}
