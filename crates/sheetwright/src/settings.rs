//! Workbook build settings

/// How [`Workbook::sheet`](crate::Workbook::sheet) treats a name already in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetNamePolicy {
    /// Fail with `Error::DuplicateSheetName`
    #[default]
    Reject,
    /// Append " (2)", " (3)", ... until the name is free
    AutoRename,
}

/// Settings for one workbook-build session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkbookSettings {
    /// Duplicate sheet name handling
    pub sheet_names: SheetNamePolicy,
    /// Expected number of distinct styles, used to presize the style registry
    pub style_capacity: usize,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            sheet_names: SheetNamePolicy::Reject,
            style_capacity: 64,
        }
    }
}

impl WorkbookSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate sheet name policy
    pub fn with_sheet_names(mut self, policy: SheetNamePolicy) -> Self {
        self.sheet_names = policy;
        self
    }

    /// Set the expected number of distinct styles
    pub fn with_style_capacity(mut self, capacity: usize) -> Self {
        self.style_capacity = capacity;
        self
    }
}
