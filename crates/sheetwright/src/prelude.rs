//! Prelude module - common imports for sheetwright users
//!
//! ```rust
//! use sheetwright::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    // Cell types
    CellAddress,
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    // Engines
    MemoryEngine,
    PatternType,
    Protection,
    Result,
    // Builders
    Row,
    Sheet,
    SheetNamePolicy,
    SpreadsheetEngine,
    Style,
    StyleRegistry,
    Underline,
    VerticalAlignment,
    Workbook,
    WorkbookSettings,
};
