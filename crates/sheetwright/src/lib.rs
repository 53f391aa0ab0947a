//! # sheetwright
//!
//! A fluent builder for filling spreadsheets cell by cell.
//!
//! Cells are written through a `Workbook -> Sheet -> Row` chain. Every style
//! passed to the chain goes through one shared [`StyleRegistry`], so a style
//! used on a million cells is created once and registered with the engine
//! once.
//!
//! ## Features
//!
//! - Fluent row builders with per-row default styles
//! - Deduplicating, thread-safe style cache
//! - Pluggable [`SpreadsheetEngine`] backend (an in-memory one is included)
//! - Optional `serde` support for styles, values and settings
//!
//! ## Example
//!
//! ```rust
//! use sheetwright::prelude::*;
//!
//! let workbook = Workbook::new(MemoryEngine::new());
//! let mut sheet = workbook.sheet("Sales").unwrap();
//!
//! let header = Style::new().bold(true).fill_color("#DDEBF7");
//! sheet
//!     .row()
//!     .unwrap()
//!     .styled_cells(["Region", "Units", "Revenue"], &header)
//!     .unwrap();
//!
//! sheet
//!     .row()
//!     .unwrap()
//!     .cell("North")
//!     .unwrap()
//!     .cell(120)
//!     .unwrap()
//!     .cell(CellValue::formula("B2*9.5"))
//!     .unwrap();
//!
//! // Three header cells, one style registration
//! assert_eq!(workbook.engine().registration_count(), 1);
//! assert_eq!(workbook.engine().assignment_count(), 3);
//! ```

pub mod prelude;
pub mod row;
pub mod settings;
pub mod sheet;
pub mod workbook;

pub use row::Row;
pub use settings::{SheetNamePolicy, WorkbookSettings};
pub use sheet::Sheet;
pub use workbook::Workbook;

// Re-export core types
pub use sheetwright_core::{
    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    // Cell types
    CellAddress,
    CellValue,
    Color,
    // Engine boundary
    EngineError,
    EngineStyleId,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    MemoryEngine,
    NativeStyle,
    PatternType,
    Protection,
    RegistryStats,
    Result,
    SessionId,
    SpreadsheetEngine,
    Style,
    StyleApplier,
    StyleHandle,
    StyleId,
    StyleRegistry,
    Underline,
    VerticalAlignment,

    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
