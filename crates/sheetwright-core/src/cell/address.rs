//! A1-style cell addressing
//!
//! Columns use bijective base-26 letters (A=1 ... Z=26, AA=27, no zero digit).
//! Rows and columns are 1-based throughout this module.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use sheetwright_core::column_to_letters;
///
/// assert_eq!(column_to_letters(28).unwrap(), "AB");
/// assert!(column_to_letters(0).is_err());
/// ```
pub fn column_to_letters(column: u32) -> Result<String> {
    if column == 0 {
        return Err(Error::invalid_address("column index must be >= 1"));
    }
    if column > MAX_COLS {
        return Err(Error::InvalidAddress(format!(
            "column {} exceeds maximum of {}",
            column, MAX_COLS
        )));
    }

    let mut letters = Vec::with_capacity(3);
    let mut n = column;
    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }
    letters.reverse();

    // Only ASCII letters were pushed
    Ok(letters.into_iter().map(char::from).collect())
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
///
/// Only upper-case `A-Z` is accepted so that every index has exactly one spelling.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::invalid_address("empty column letters"));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        column = column * 26 + (c as u32 - 'A' as u32 + 1);

        // Checked per digit so long inputs cannot overflow
        if column > MAX_COLS {
            return Err(Error::InvalidAddress(format!(
                "column '{}' exceeds maximum of {}",
                letters, MAX_COLS
            )));
        }
    }

    Ok(column)
}

/// Build an A1-style address from a 1-based row and column
///
/// # Examples
/// ```
/// use sheetwright_core::cell_address;
///
/// assert_eq!(cell_address(1, 28).unwrap(), "AB1");
/// ```
pub fn cell_address(row: u32, column: u32) -> Result<String> {
    check_row(row)?;
    let mut address = column_to_letters(column)?;
    address.push_str(&row.to_string());
    Ok(address)
}

/// Parse an A1-style address into a 1-based `(row, column)` pair
///
/// The input must match `^[A-Z]+[0-9]+$`; `$` markers, ranges and sheet
/// prefixes are not accepted.
pub fn parse_cell_address(s: &str) -> Result<(u32, u32)> {
    let bytes = s.as_bytes();
    let split = bytes
        .iter()
        .position(|b| !b.is_ascii_uppercase())
        .unwrap_or(bytes.len());

    if split == 0 {
        return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
    }

    let digits = &s[split..];
    if digits.is_empty() {
        return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAddress(format!(
            "unexpected characters in '{}'",
            s
        )));
    }

    let column = letters_to_column(&s[..split])?;
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;
    check_row(row)?;

    Ok((row, column))
}

fn check_row(row: u32) -> Result<()> {
    if row == 0 {
        return Err(Error::invalid_address("row number must be >= 1"));
    }
    if row > MAX_ROWS {
        return Err(Error::InvalidAddress(format!(
            "row {} exceeds maximum of {}",
            row, MAX_ROWS
        )));
    }
    Ok(())
}

/// A validated cell location (e.g., "B7")
///
/// Both coordinates are 1-based and always within the worksheet limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    row: u32,
    column: u32,
}

impl CellAddress {
    /// Create a cell address, validating both coordinates
    pub fn new(row: u32, column: u32) -> Result<Self> {
        check_row(row)?;
        if column == 0 || column > MAX_COLS {
            return Err(Error::InvalidAddress(format!(
                "column {} outside 1..={}",
                column, MAX_COLS
            )));
        }
        Ok(Self { row, column })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetwright_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("AB12").unwrap();
    /// assert_eq!(addr.row(), 12);
    /// assert_eq!(addr.column(), 28);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (row, column) = parse_cell_address(s)?;
        Ok(Self { row, column })
    }

    /// 1-based row number
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column index
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Column letters for this address
    pub fn column_letters(&self) -> String {
        // Coordinates were validated on construction
        column_to_letters(self.column).unwrap_or_default()
    }

    /// Move by the given number of rows and columns
    pub fn offset(&self, rows: u32, columns: u32) -> Result<Self> {
        let row = self
            .row
            .checked_add(rows)
            .ok_or_else(|| Error::invalid_address("row offset overflows"))?;
        let column = self
            .column
            .checked_add(columns)
            .ok_or_else(|| Error::invalid_address("column offset overflows"))?;
        Self::new(row, column)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column_letters(), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(1).unwrap(), "A");
        assert_eq!(column_to_letters(2).unwrap(), "B");
        assert_eq!(column_to_letters(26).unwrap(), "Z");
        assert_eq!(column_to_letters(27).unwrap(), "AA");
        assert_eq!(column_to_letters(28).unwrap(), "AB");
        assert_eq!(column_to_letters(702).unwrap(), "ZZ");
        assert_eq!(column_to_letters(703).unwrap(), "AAA");
        assert_eq!(column_to_letters(16384).unwrap(), "XFD"); // Max Excel column
    }

    #[test]
    fn test_column_to_letters_errors() {
        assert!(column_to_letters(0).is_err());
        assert!(column_to_letters(MAX_COLS + 1).is_err());
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("Z").unwrap(), 26);
        assert_eq!(letters_to_column("AA").unwrap(), 27);
        assert_eq!(letters_to_column("AZ").unwrap(), 52);
        assert_eq!(letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(letters_to_column("AAA").unwrap(), 703);
        assert_eq!(letters_to_column("XFD").unwrap(), 16384);
    }

    #[test]
    fn test_letters_to_column_errors() {
        assert!(letters_to_column("").is_err());
        assert!(letters_to_column("a").is_err());
        assert!(letters_to_column("A1").is_err());
        assert!(letters_to_column("Ä").is_err());
        assert!(letters_to_column("XFE").is_err()); // Column too large
        assert!(letters_to_column("ZZZZZZZZZZZZZZ").is_err());
    }

    #[test]
    fn test_bijection_at_length_transitions() {
        for n in [1, 26, 27, 52, 702, 703] {
            let letters = column_to_letters(n).unwrap();
            assert_eq!(letters_to_column(&letters).unwrap(), n, "column {}", n);
        }
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(1, 1).unwrap(), "A1");
        assert_eq!(cell_address(5, 28).unwrap(), "AB5");
        assert_eq!(cell_address(1_048_576, 16_384).unwrap(), "XFD1048576");
        assert!(cell_address(0, 1).is_err());
        assert!(cell_address(1, 0).is_err());
        assert!(cell_address(MAX_ROWS + 1, 1).is_err());
    }

    #[test]
    fn test_parse_cell_address() {
        assert_eq!(parse_cell_address("A1").unwrap(), (1, 1));
        assert_eq!(parse_cell_address("AB12").unwrap(), (12, 28));
        assert_eq!(parse_cell_address("XFD1048576").unwrap(), (1_048_576, 16_384));
    }

    #[test]
    fn test_parse_cell_address_errors() {
        for bad in [
            "", "A", "1", "A0", "a1", "$A$1", "A1:B2", "1A", "A-1", "A 1", " A1", "A1048577",
            "XFE1", "A99999999999",
        ] {
            let err = parse_cell_address(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAddress(_)),
                "'{}' gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_cell_address_type() {
        let addr = CellAddress::new(3, 2).unwrap();
        assert_eq!(addr.to_string(), "B3");
        assert_eq!(addr.offset(1, 1).unwrap().to_string(), "C4");
        assert!(CellAddress::new(1, MAX_COLS).unwrap().offset(0, 1).is_err());

        let parsed: CellAddress = "AB12".parse().unwrap();
        assert_eq!((parsed.row(), parsed.column()), (12, 28));
        assert_eq!(parsed.to_a1_string(), "AB12");
    }

    proptest! {
        #[test]
        fn prop_address_round_trip(row in 1u32..=MAX_ROWS, column in 1u32..=MAX_COLS) {
            let address = cell_address(row, column).unwrap();
            prop_assert_eq!(parse_cell_address(&address).unwrap(), (row, column));
        }

        #[test]
        fn prop_column_bijection(column in 1u32..=MAX_COLS) {
            let letters = column_to_letters(column).unwrap();
            prop_assert_eq!(letters_to_column(&letters).unwrap(), column);
        }

        #[test]
        fn prop_letters_round_trip(letters in "[A-Z]{1,3}") {
            if let Ok(column) = letters_to_column(&letters) {
                prop_assert_eq!(column_to_letters(column).unwrap(), letters);
            }
        }
    }
}
