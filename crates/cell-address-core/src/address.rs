//! The [`Address`] value type

use crate::column::column_name;
use crate::error::{Error, Result};
use crate::parser::{parse_address, to_address, to_address_r1c1};
use crate::{ERROR_REFERENCE, MAX_COLS, MAX_ROWS};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// What shape of area an [`Address`] covers
///
/// Entire rows and entire columns are kept apart from ordinary ranges so that
/// `9:9` and `E:F` render back the way they were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressKind {
    /// A single cell or a rectangular range of cells
    Cells,
    /// One or more whole rows (all columns)
    EntireRows,
    /// One or more whole columns (all rows)
    EntireColumns,
    /// The `#REF!` error reference
    Error,
}

/// A sheet-qualified cell or range address (e.g., "Sheet1!$A$1:$C$4")
///
/// All indices are 0-based and inclusive. Values are immutable once built;
/// use the constructors or [`parse_address`] to make one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    sheet_name: String,
    row_first: u32,
    row_last: u32,
    column_first: u32,
    column_last: u32,
    kind: AddressKind,
}

impl Address {
    /// The distinguished `#REF!` address
    pub const REF: Address = Address {
        sheet_name: String::new(),
        row_first: 0,
        row_last: 0,
        column_first: 0,
        column_last: 0,
        kind: AddressKind::Error,
    };

    /// Create a single-cell address
    pub fn cell(sheet_name: impl Into<String>, row: u32, column: u32) -> Result<Self> {
        Self::range(sheet_name, row, row, column, column)
    }

    /// Create a range address from first/last row and column indices
    ///
    /// The bounds are kept as given; a range written bottom-up (`C4:A1`)
    /// keeps `row_first > row_last`.
    pub fn range(
        sheet_name: impl Into<String>,
        row_first: u32,
        row_last: u32,
        column_first: u32,
        column_last: u32,
    ) -> Result<Self> {
        check_row(row_first)?;
        check_row(row_last)?;
        check_column(column_first)?;
        check_column(column_last)?;

        Ok(Self::from_parts(
            sheet_name.into(),
            row_first,
            row_last,
            column_first,
            column_last,
            AddressKind::Cells,
        ))
    }

    /// Create an address covering whole rows (e.g., "9:9")
    pub fn entire_rows(sheet_name: impl Into<String>, row_first: u32, row_last: u32) -> Result<Self> {
        check_row(row_first)?;
        check_row(row_last)?;

        Ok(Self::from_parts(
            sheet_name.into(),
            row_first,
            row_last,
            0,
            MAX_COLS - 1,
            AddressKind::EntireRows,
        ))
    }

    /// Create an address covering whole columns (e.g., "E:F")
    pub fn entire_columns(
        sheet_name: impl Into<String>,
        column_first: u32,
        column_last: u32,
    ) -> Result<Self> {
        check_column(column_first)?;
        check_column(column_last)?;

        Ok(Self::from_parts(
            sheet_name.into(),
            0,
            MAX_ROWS - 1,
            column_first,
            column_last,
            AddressKind::EntireColumns,
        ))
    }

    /// Build without bounds checks; callers guarantee the invariants.
    pub(crate) fn from_parts(
        sheet_name: String,
        row_first: u32,
        row_last: u32,
        column_first: u32,
        column_last: u32,
        kind: AddressKind,
    ) -> Self {
        Self {
            sheet_name,
            row_first,
            row_last,
            column_first,
            column_last,
            kind,
        }
    }

    /// Return a copy of this address on another sheet
    pub fn with_sheet(&self, sheet_name: impl Into<String>) -> Self {
        if self.is_error() {
            return Self::REF;
        }
        Self {
            sheet_name: sheet_name.into(),
            ..self.clone()
        }
    }

    /// Name of the sheet, empty when the address is unqualified
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn row_first(&self) -> u32 {
        self.row_first
    }

    pub fn row_last(&self) -> u32 {
        self.row_last
    }

    pub fn column_first(&self) -> u32 {
        self.column_first
    }

    pub fn column_last(&self) -> u32 {
        self.column_last
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Topmost row index, regardless of the order the bounds were given in
    pub fn top(&self) -> u32 {
        self.row_first.min(self.row_last)
    }

    pub fn bottom(&self) -> u32 {
        self.row_first.max(self.row_last)
    }

    pub fn left(&self) -> u32 {
        self.column_first.min(self.column_last)
    }

    pub fn right(&self) -> u32 {
        self.column_first.max(self.column_last)
    }

    /// Check whether this is the `#REF!` address
    pub fn is_error(&self) -> bool {
        self.kind == AddressKind::Error
    }

    /// Check whether the address covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.kind == AddressKind::Cells
            && self.row_first == self.row_last
            && self.column_first == self.column_last
    }

    pub fn is_entire_rows(&self) -> bool {
        self.kind == AddressKind::EntireRows
    }

    pub fn is_entire_columns(&self) -> bool {
        self.kind == AddressKind::EntireColumns
    }

    /// Get the number of rows
    pub fn row_count(&self) -> u32 {
        self.row_last.abs_diff(self.row_first) + 1
    }

    /// Get the number of columns
    pub fn column_count(&self) -> u32 {
        self.column_last.abs_diff(self.column_first) + 1
    }

    /// Get the total number of cells
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.column_count())
    }

    /// A1-style address without the sheet (e.g., "$A$1:$C$4", "$9:$9", "$E:$F")
    pub fn local_address(&self) -> String {
        match self.kind {
            AddressKind::Error => ERROR_REFERENCE.to_string(),
            AddressKind::EntireRows => {
                format!("${}:${}", self.row_first + 1, self.row_last + 1)
            }
            AddressKind::EntireColumns => format!(
                "${}:${}",
                column_name(i64::from(self.column_first)),
                column_name(i64::from(self.column_last))
            ),
            AddressKind::Cells if self.is_single_cell() => {
                to_address(i64::from(self.row_first), i64::from(self.column_first))
            }
            AddressKind::Cells => format!(
                "{}:{}",
                to_address(i64::from(self.row_first), i64::from(self.column_first)),
                to_address(i64::from(self.row_last), i64::from(self.column_last))
            ),
        }
    }

    /// R1C1-style address without the sheet (e.g., "R1C1:R4C3")
    ///
    /// Entire rows and columns are written with explicit bounds on both axes
    /// so the text parses back to the same area.
    pub fn local_address_r1c1(&self) -> String {
        if self.is_error() {
            return ERROR_REFERENCE.to_string();
        }
        let first = to_address_r1c1(i64::from(self.row_first), i64::from(self.column_first));
        if self.is_single_cell() {
            return first;
        }
        let last = to_address_r1c1(i64::from(self.row_last), i64::from(self.column_last));
        format!("{first}:{last}")
    }

    /// A1-style address including the sheet qualifier
    ///
    /// Sheet names containing a space or an apostrophe are single-quoted,
    /// with apostrophes doubled: `'Sheet 1'!$A$1`, `'Bob''s'!$A$1`.
    pub fn full_address(&self) -> String {
        self.qualify(self.local_address())
    }

    /// R1C1-style address including the sheet qualifier
    pub fn full_address_r1c1(&self) -> String {
        self.qualify(self.local_address_r1c1())
    }

    fn qualify(&self, local: String) -> String {
        if self.is_error() || self.sheet_name.is_empty() {
            return local;
        }
        format!("{}!{}", quote_sheet_name(&self.sheet_name), local)
    }
}

/// Quote a sheet name for use in address text when it contains a space or `'`
pub(crate) fn quote_sheet_name(name: &str) -> Cow<'_, str> {
    if name.contains([' ', '\'']) {
        Cow::Owned(format!("'{}'", name.replace('\'', "''")))
    } else {
        Cow::Borrowed(name)
    }
}

fn check_row(row: u32) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(i64::from(row), MAX_ROWS - 1));
    }
    Ok(())
}

fn check_column(column: u32) -> Result<()> {
    if column >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(i64::from(column), MAX_COLS - 1));
    }
    Ok(())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_address())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_address(s).ok_or_else(|| Error::InvalidAddress(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_cell() {
        let cell = Address::cell("sheet1", 0, 0).unwrap();
        assert_eq!(cell.local_address(), "$A$1");
        assert_eq!(cell.full_address(), "sheet1!$A$1");
        assert!(cell.is_single_cell());
        assert_eq!(cell.cell_count(), 1);

        let cell = Address::cell("Sheet 1", 0, 0).unwrap();
        assert_eq!(cell.local_address(), "$A$1");
        assert_eq!(cell.full_address(), "'Sheet 1'!$A$1");
    }

    #[test]
    fn test_create_range() {
        let range = Address::range("", 0, 3, 0, 2).unwrap();
        assert_eq!(range.row_count(), 4);
        assert_eq!(range.column_count(), 3);
        assert_eq!(range.cell_count(), 12);
        assert_eq!(range.local_address(), "$A$1:$C$4");
        assert_eq!(range.full_address(), "$A$1:$C$4");
        assert_eq!(range.local_address_r1c1(), "R1C1:R4C3");
    }

    #[test]
    fn test_reversed_range_counts() {
        let range = Address::range("", 3, 0, 2, 0).unwrap();
        assert_eq!(range.row_count(), 4);
        assert_eq!(range.column_count(), 3);
        assert_eq!(range.top(), 0);
        assert_eq!(range.right(), 2);
    }

    #[test]
    fn test_entire_rows_and_columns() {
        let rows = Address::entire_rows("Sheet1", 8, 8).unwrap();
        assert_eq!(rows.column_first(), 0);
        assert_eq!(rows.column_last(), MAX_COLS - 1);
        assert_eq!(rows.cell_count(), u64::from(MAX_COLS));
        assert_eq!(rows.full_address(), "Sheet1!$9:$9");
        assert_eq!(rows.local_address_r1c1(), "R9C1:R9C16384");

        let cols = Address::entire_columns("Sheet1", 4, 5).unwrap();
        assert_eq!(cols.row_first(), 0);
        assert_eq!(cols.row_last(), MAX_ROWS - 1);
        assert_eq!(cols.full_address(), "Sheet1!$E:$F");
    }

    #[test]
    fn test_bounds_checked() {
        assert_eq!(
            Address::cell("", MAX_ROWS, 0),
            Err(Error::RowOutOfBounds(i64::from(MAX_ROWS), MAX_ROWS - 1))
        );
        assert_eq!(
            Address::range("", 0, 0, 0, MAX_COLS),
            Err(Error::ColumnOutOfBounds(i64::from(MAX_COLS), MAX_COLS - 1))
        );
        assert!(Address::cell("", MAX_ROWS - 1, MAX_COLS - 1).is_ok());
    }

    #[test]
    fn test_error_reference() {
        let err = Address::REF;
        assert!(err.is_error());
        assert_eq!(err.local_address(), ERROR_REFERENCE);
        assert_eq!(err.full_address(), ERROR_REFERENCE);
        assert_eq!(err.to_string(), ERROR_REFERENCE);
        assert!(err.with_sheet("Sheet1").is_error());
    }

    #[test]
    fn test_quote_sheet_name() {
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
        assert_eq!(quote_sheet_name("Sheet 1"), "'Sheet 1'");
        assert_eq!(quote_sheet_name("Bob's data"), "'Bob''s data'");
        assert_eq!(quote_sheet_name("Bob's"), "'Bob''s'");
        assert_eq!(quote_sheet_name("'x"), "'''x'");
        assert_eq!(quote_sheet_name("it''s"), "'it''''s'");
    }

    #[test]
    fn test_from_str() {
        let addr: Address = "Sheet1!B2".parse().unwrap();
        assert_eq!(addr, Address::cell("Sheet1", 1, 1).unwrap());

        let err = "not an address".parse::<Address>().unwrap_err();
        assert_eq!(err, Error::InvalidAddress("not an address".into()));
    }
}
