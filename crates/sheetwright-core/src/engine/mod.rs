//! Boundary to the spreadsheet engine
//!
//! The engine owns the actual document: it registers styles, attaches them to
//! cells and stores values. sheetwright only talks to it through
//! [`SpreadsheetEngine`], feeding it [`NativeStyle`]s translated from
//! [`Style`](crate::Style) descriptors.

mod memory;

pub use memory::{MemoryEngine, RecordedCell};

use crate::cell::CellValue;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Identity of one engine session
///
/// Engine style ids are only meaningful inside the session that issued them.
/// A [`StyleRegistry`](crate::StyleRegistry) binds itself to the first session
/// it registers a style with and refuses every other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate an id not used by any other session in this process
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SessionId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session {}", self.0)
    }
}

/// Engine-assigned identifier of a registered style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineStyleId(pub u32);

impl fmt::Display for EngineStyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xf{}", self.0)
    }
}

/// Errors reported by an engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A color string the engine cannot parse
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Font size outside the supported range
    #[error("invalid font size: {0}")]
    InvalidFontSize(f64),

    /// Empty or otherwise unusable number format
    #[error("invalid number format: {0:?}")]
    InvalidNumberFormat(String),

    /// Border line style the engine does not support
    #[error("unsupported border style: {0}")]
    UnsupportedBorderStyle(String),

    /// Style id the engine never handed out
    #[error("unknown style id: {0}")]
    UnknownStyle(EngineStyleId),

    /// Sheet the engine does not know
    #[error("unknown sheet: {0}")]
    UnknownSheet(String),

    /// Sheet name already in use
    #[error("duplicate sheet: {0}")]
    DuplicateSheet(String),

    /// Any other refusal
    #[error("{0}")]
    Rejected(String),
}

/// One border side in engine terms, with its effective color resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeBorder {
    /// Line style name (e.g., "thin", "mediumDashed")
    pub style: &'static str,
    /// Effective color, if any
    pub color: Option<String>,
}

/// Flat style record handed to [`SpreadsheetEngine::register_style`]
///
/// Only fields populated in the source descriptor are set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NativeStyle {
    /// Font family name
    pub font_name: Option<String>,
    /// Font size in points
    pub font_size: Option<f64>,
    /// Bold weight
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline name, omitted for no underline
    pub underline: Option<&'static str>,
    /// Font color as written in the descriptor
    pub font_color: Option<String>,
    /// Fill pattern name, omitted for no fill
    pub fill_pattern: Option<&'static str>,
    /// Fill foreground color
    pub fill_color: Option<String>,
    /// Top border
    pub border_top: Option<NativeBorder>,
    /// Bottom border
    pub border_bottom: Option<NativeBorder>,
    /// Left border
    pub border_left: Option<NativeBorder>,
    /// Right border
    pub border_right: Option<NativeBorder>,
    /// Horizontal alignment name (e.g., "center")
    pub horizontal: Option<&'static str>,
    /// Vertical alignment name (e.g., "top")
    pub vertical: Option<&'static str>,
    /// Wrap text within the cell
    pub wrap_text: bool,
    /// Number format code
    pub number_format: Option<String>,
    /// Cell locked when the sheet is protected
    pub locked: Option<bool>,
    /// Formula hidden when the sheet is protected
    pub hidden: Option<bool>,
}

impl NativeStyle {
    /// All border sides that are set, labelled by side
    pub fn borders(&self) -> impl Iterator<Item = (&'static str, &NativeBorder)> {
        [
            ("top", &self.border_top),
            ("bottom", &self.border_bottom),
            ("left", &self.border_left),
            ("right", &self.border_right),
        ]
        .into_iter()
        .filter_map(|(side, border)| border.as_ref().map(|b| (side, b)))
    }
}

/// A spreadsheet engine session
///
/// Implementations synchronise internally; every method takes `&self` so one
/// engine can serve sheets built on several threads. Calls may block.
pub trait SpreadsheetEngine: Send + Sync {
    /// Session the engine's style ids belong to
    ///
    /// Must stay the same for the engine's whole lifetime.
    fn session_id(&self) -> SessionId;

    /// Create a sheet
    fn add_sheet(&self, name: &str) -> Result<(), EngineError>;

    /// Register a style and return the engine's id for it
    fn register_style(&self, style: &NativeStyle) -> Result<EngineStyleId, EngineError>;

    /// Attach a registered style to a cell
    fn assign_style(
        &self,
        sheet: &str,
        address: &str,
        style: EngineStyleId,
    ) -> Result<(), EngineError>;

    /// Store a cell value
    fn write_value(&self, sheet: &str, address: &str, value: &CellValue)
        -> Result<(), EngineError>;
}

impl<E: SpreadsheetEngine + ?Sized> SpreadsheetEngine for &E {
    fn session_id(&self) -> SessionId {
        (**self).session_id()
    }

    fn add_sheet(&self, name: &str) -> Result<(), EngineError> {
        (**self).add_sheet(name)
    }

    fn register_style(&self, style: &NativeStyle) -> Result<EngineStyleId, EngineError> {
        (**self).register_style(style)
    }

    fn assign_style(
        &self,
        sheet: &str,
        address: &str,
        style: EngineStyleId,
    ) -> Result<(), EngineError> {
        (**self).assign_style(sheet, address, style)
    }

    fn write_value(
        &self,
        sheet: &str,
        address: &str,
        value: &CellValue,
    ) -> Result<(), EngineError> {
        (**self).write_value(sheet, address, value)
    }
}
