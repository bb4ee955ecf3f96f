//! Collaborator traits for the two ways a host exposes cells.

use cell_address_core::{Address, MAX_COLS, MAX_ROWS};

use crate::error::{HostError, Result};
use crate::value::CellValue;

/// Rectangular block of values, outer `Vec` is rows.
pub type Matrix = Vec<Vec<CellValue>>;

/// Live cell references addressed by 0-based coordinates and sheet name.
///
/// An empty sheet name means the host's active sheet.
pub trait ReferenceProvider {
    /// Read the values of every cell in `address`.
    fn get_values(&self, address: &Address) -> Result<Matrix>;

    /// Write `values` into `address`; the matrix has the address's shape.
    fn set_values(&self, address: &Address, values: Matrix) -> Result<()>;

    /// Formula of the top-left cell (empty string if none).
    fn get_formula(&self, address: &Address) -> Result<String>;

    /// Enter `formula` into every cell of `address`.
    fn set_formula(&self, address: &Address, formula: &str) -> Result<()>;

    /// Remove values and formulas from every cell of `address`.
    fn clear_contents(&self, address: &Address) -> Result<()>;

    /// Move the host selection to `address`.
    fn select(&self, address: &Address) -> Result<()>;
}

/// UI-bound range handles looked up by full address text.
pub trait RangeProvider {
    /// Area metadata of the range named by `full_address`.
    fn area(&self, full_address: &str) -> Result<RangeArea>;

    fn get_values(&self, full_address: &str) -> Result<Matrix>;

    fn set_values(&self, full_address: &str, values: Matrix) -> Result<()>;

    /// Remove values and formulas from every cell of the range.
    fn clear_contents(&self, full_address: &str) -> Result<()>;
}

/// Raw coordinates of a live reference (0-based, inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceInfo {
    pub sheet_name: String,
    pub row_first: u32,
    pub row_last: u32,
    pub column_first: u32,
    pub column_last: u32,
    /// Number of areas in the reference; only single-area references convert.
    pub area_count: usize,
}

/// Metadata of a range handle (1-based row/column, sizes in cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeArea {
    pub sheet_name: String,
    pub row: u32,
    pub column: u32,
    pub rows: u32,
    pub columns: u32,
    pub area_count: usize,
}

impl TryFrom<ReferenceInfo> for Address {
    type Error = HostError;

    fn try_from(info: ReferenceInfo) -> Result<Self> {
        if info.area_count > 1 {
            return Err(HostError::MultipleAreas(info.area_count));
        }
        Ok(Address::range(
            info.sheet_name,
            info.row_first,
            info.row_last,
            info.column_first,
            info.column_last,
        )?)
    }
}

impl TryFrom<RangeArea> for Address {
    type Error = HostError;

    fn try_from(area: RangeArea) -> Result<Self> {
        if area.area_count > 1 {
            return Err(HostError::MultipleAreas(area.area_count));
        }
        let row_first = one_based_to_index(area.row, true)?;
        let column_first = one_based_to_index(area.column, false)?;
        let row_last = row_first.saturating_add(area.rows.max(1) - 1);
        let column_last = column_first.saturating_add(area.columns.max(1) - 1);

        let address = if row_first == 0 && area.rows == MAX_ROWS {
            Address::entire_columns(area.sheet_name, column_first, column_last)?
        } else if column_first == 0 && area.columns == MAX_COLS {
            Address::entire_rows(area.sheet_name, row_first, row_last)?
        } else {
            Address::range(area.sheet_name, row_first, row_last, column_first, column_last)?
        };
        Ok(address)
    }
}

impl From<&Address> for RangeArea {
    fn from(address: &Address) -> Self {
        Self {
            sheet_name: address.sheet_name().to_string(),
            row: address.top() + 1,
            column: address.left() + 1,
            rows: address.row_count(),
            columns: address.column_count(),
            area_count: 1,
        }
    }
}

fn one_based_to_index(value: u32, is_row: bool) -> Result<u32> {
    value.checked_sub(1).ok_or_else(|| {
        let err = if is_row {
            cell_address_core::Error::RowOutOfBounds(-1, MAX_ROWS - 1)
        } else {
            cell_address_core::Error::ColumnOutOfBounds(-1, MAX_COLS - 1)
        };
        HostError::Address(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_address_core::AddressKind;
    use pretty_assertions::assert_eq;

    fn area(row: u32, column: u32, rows: u32, columns: u32) -> RangeArea {
        RangeArea {
            sheet_name: "Sheet1".into(),
            row,
            column,
            rows,
            columns,
            area_count: 1,
        }
    }

    #[test]
    fn test_reference_info_to_address() {
        let info = ReferenceInfo {
            sheet_name: "Data".into(),
            row_first: 0,
            row_last: 3,
            column_first: 0,
            column_last: 2,
            area_count: 1,
        };
        let address = Address::try_from(info.clone()).unwrap();
        assert_eq!(address.full_address(), "Data!$A$1:$C$4");

        let multi = ReferenceInfo {
            area_count: 2,
            ..info
        };
        assert!(matches!(
            Address::try_from(multi),
            Err(HostError::MultipleAreas(2))
        ));
    }

    #[test]
    fn test_range_area_to_address() {
        let single = Address::try_from(area(2, 3, 1, 1)).unwrap();
        assert_eq!(single.full_address(), "Sheet1!$C$2");
        assert!(single.is_single_cell());

        let block = Address::try_from(area(1, 1, 4, 3)).unwrap();
        assert_eq!(block.local_address(), "$A$1:$C$4");

        let rows = Address::try_from(area(9, 1, 1, MAX_COLS)).unwrap();
        assert_eq!(rows.kind(), AddressKind::EntireRows);
        assert_eq!(rows.local_address(), "$9:$9");

        let cols = Address::try_from(area(1, 5, MAX_ROWS, 2)).unwrap();
        assert_eq!(cols.kind(), AddressKind::EntireColumns);
        assert_eq!(cols.local_address(), "$E:$F");
    }

    #[test]
    fn test_range_area_rejects() {
        assert!(matches!(
            Address::try_from(area(0, 1, 1, 1)),
            Err(HostError::Address(_))
        ));
        let multi = RangeArea {
            area_count: 3,
            ..area(1, 1, 1, 1)
        };
        assert!(matches!(
            Address::try_from(multi),
            Err(HostError::MultipleAreas(3))
        ));
    }

    #[test]
    fn test_address_to_range_area() {
        let address = cell_address_core::parse_address("Sheet1!B2:D3").unwrap();
        let area = RangeArea::from(&address);
        assert_eq!(area, self::area(2, 2, 2, 3));
    }
}
