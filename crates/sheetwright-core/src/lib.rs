//! # sheetwright-core
//!
//! Core building blocks for the sheetwright spreadsheet builder.
//!
//! This crate provides:
//! - [`CellAddress`] and the A1 address functions - column letters, row numbers
//! - [`CellValue`] - The closed set of values a cell can hold
//! - [`Style`] - Cell formatting descriptor (font, fill, border, alignment, ...)
//! - [`StyleRegistry`] - Flyweight cache handing out one shared [`StyleHandle`]
//!   per distinct style
//! - [`StyleApplier`] - Pushes styled cells into a [`SpreadsheetEngine`],
//!   registering each distinct style with the engine exactly once
//!
//! ## Example
//!
//! ```rust
//! use sheetwright_core::{MemoryEngine, SpreadsheetEngine, Style, StyleApplier, StyleRegistry};
//!
//! let engine = MemoryEngine::new();
//! engine.add_sheet("Sheet1").unwrap();
//!
//! let registry = StyleRegistry::new();
//! let applier = StyleApplier::new(&engine);
//!
//! let header = Style::new().bold(true).font_size(12.0);
//! let a1 = registry.get_or_create(&header);
//! let b1 = registry.get_or_create(&header.clone());
//! assert!(std::sync::Arc::ptr_eq(&a1, &b1));
//!
//! let id_a1 = applier.apply(&a1, "Sheet1", "A1").unwrap();
//! let id_b1 = applier.apply(&b1, "Sheet1", "B1").unwrap();
//! assert_eq!(id_a1, id_b1);
//! assert_eq!(engine.registration_count(), 1);
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod style;

// Re-exports for convenience
pub use cell::{
    cell_address, column_to_letters, letters_to_column, parse_cell_address, CellAddress,
    CellValue,
};
pub use engine::{
    EngineError, EngineStyleId, MemoryEngine, NativeBorder, NativeStyle, RecordedCell,
    SessionId, SpreadsheetEngine,
};
pub use error::{Error, Result};

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, ContentHasher, FillStyle,
    FontStyle, HorizontalAlignment, PatternType, Protection, RegistryStats, Style, StyleApplier,
    StyleHandle, StyleHash, StyleId, StyleRegistry, Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
