//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "AB12") and the A1 conversion functions
//! - [`CellValue`] - The value written into a cell

mod address;
mod value;

pub use address::{
    cell_address, column_to_letters, letters_to_column, parse_cell_address, CellAddress,
};
pub use value::CellValue;
