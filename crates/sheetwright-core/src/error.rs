//! Error types for sheetwright-core

use crate::engine::{EngineError, SessionId};
use crate::style::StyleId;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwright-core
///
/// The style registry never fails; only address resolution and the engine
/// boundary produce errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-range cell address
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// The engine refused a translated style
    #[error("Engine rejected style {style}: {source}")]
    EngineRejectedStyle {
        style: StyleId,
        #[source]
        source: EngineError,
    },

    /// A style from a registry bound to one engine session was applied to another
    #[error("Style {style} is registered with {bound}, but the engine is {engine}")]
    ForeignSession {
        style: StyleId,
        bound: SessionId,
        engine: SessionId,
    },

    /// The engine refused to attach a registered style to a cell
    #[error("Failed to assign style to cell {address}: {source}")]
    CellAssignment {
        address: String,
        #[source]
        source: EngineError,
    },

    /// The engine refused a cell value
    #[error("Failed to write value to cell {address}: {source}")]
    ValueWrite {
        address: String,
        #[source]
        source: EngineError,
    },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Any other engine failure
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl Error {
    /// Create an invalid address error with a message
    pub fn invalid_address<S: Into<String>>(msg: S) -> Self {
        Error::InvalidAddress(msg.into())
    }
}
