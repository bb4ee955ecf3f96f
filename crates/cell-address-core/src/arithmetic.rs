//! Address arithmetic: offsets, sub-cells, iteration and bounding ranges

use crate::address::{Address, AddressKind};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// Order in which the cells of a range are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillDirection {
    /// Left to right, then top to bottom
    #[default]
    RowFirst,
    /// Top to bottom, then left to right
    ColumnFirst,
}

impl Address {
    /// Shift the address, keeping its size
    ///
    /// Positive offsets move down/right. Entire rows only move vertically and
    /// entire columns only move horizontally.
    pub fn offset(&self, row_offset: i64, column_offset: i64) -> Result<Address> {
        let (row_offset, column_offset) = match self.kind() {
            AddressKind::Error => return Err(Error::ErrorReference),
            AddressKind::Cells => (row_offset, column_offset),
            AddressKind::EntireRows => (row_offset, 0),
            AddressKind::EntireColumns => (0, column_offset),
        };

        Ok(Address::from_parts(
            self.sheet_name().to_string(),
            shift_row(self.row_first(), row_offset)?,
            shift_row(self.row_last(), row_offset)?,
            shift_column(self.column_first(), column_offset)?,
            shift_column(self.column_last(), column_offset)?,
            self.kind(),
        ))
    }

    /// Get a single cell by position relative to the top-left corner
    pub fn cell_at(&self, row_index: u32, column_index: u32) -> Result<Address> {
        if self.is_error() {
            return Err(Error::ErrorReference);
        }
        let row = self.top().checked_add(row_index).unwrap_or(u32::MAX);
        let column = self.left().checked_add(column_index).unwrap_or(u32::MAX);
        Address::cell(self.sheet_name(), row, column)
    }

    /// Get the `index`-th cell of the range, counting in `direction`
    ///
    /// # Examples
    /// ```
    /// use cell_address_core::{parse_address, FillDirection};
    ///
    /// let range = parse_address("A1:C2").unwrap();
    /// let cell = range.nth_cell(4, FillDirection::RowFirst).unwrap();
    /// assert_eq!(cell.local_address(), "$B$2");
    /// let cell = range.nth_cell(4, FillDirection::ColumnFirst).unwrap();
    /// assert_eq!(cell.local_address(), "$C$1");
    /// ```
    pub fn nth_cell(&self, index: u64, direction: FillDirection) -> Result<Address> {
        if self.is_error() {
            return Err(Error::ErrorReference);
        }
        let count = self.cell_count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        let (row, column) = linear_to_grid(index, self.row_count(), self.column_count(), direction);
        self.cell_at(row, column)
    }

    /// Iterate over every cell of the range as single-cell addresses
    ///
    /// The `#REF!` address yields nothing.
    pub fn cells(&self, direction: FillDirection) -> Cells {
        let count = if self.is_error() { 0 } else { self.cell_count() };
        Cells {
            sheet_name: self.sheet_name().to_string(),
            top: self.top(),
            left: self.left(),
            rows: self.row_count(),
            columns: self.column_count(),
            direction,
            next: 0,
            count,
        }
    }

    /// Check whether `other` lies entirely inside this address
    ///
    /// Sheet names compare case-insensitively; an unqualified address matches
    /// any sheet.
    pub fn contains(&self, other: &Address) -> bool {
        if self.is_error() || other.is_error() {
            return false;
        }
        let same_sheet = self.sheet_name().is_empty()
            || other.sheet_name().is_empty()
            || self.sheet_name().eq_ignore_ascii_case(other.sheet_name());

        same_sheet
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
            && other.left() >= self.left()
            && other.right() <= self.right()
    }

    /// The later of two addresses by first column / first row
    pub fn max<'a>(&'a self, other: &'a Address) -> &'a Address {
        if self.is_after(other) {
            self
        } else {
            other
        }
    }

    /// The earlier of two addresses by first column / first row
    pub fn min<'a>(&'a self, other: &'a Address) -> &'a Address {
        if self.is_after(other) {
            other
        } else {
            self
        }
    }

    fn is_after(&self, other: &Address) -> bool {
        self.column_first() > other.column_first() || self.row_first() > other.row_first()
    }

    /// Smallest range covering every address in `addresses`
    ///
    /// `#REF!` entries are skipped. The sheet is taken from the first address.
    /// Returns [`Address::REF`] when nothing is left.
    ///
    /// # Examples
    /// ```
    /// use cell_address_core::{parse_address, Address};
    ///
    /// let a = parse_address("A1").unwrap();
    /// let b = parse_address("C4").unwrap();
    /// assert_eq!(Address::bounding([&a, &b]).local_address(), "$A$1:$C$4");
    /// ```
    pub fn bounding<'a, I>(addresses: I) -> Address
    where
        I: IntoIterator<Item = &'a Address>,
    {
        let mut iter = addresses.into_iter().filter(|a| !a.is_error());
        let Some(first) = iter.next() else {
            return Address::REF;
        };

        let mut top = first.top();
        let mut bottom = first.bottom();
        let mut left = first.left();
        let mut right = first.right();
        let mut kind = first.kind();

        for addr in iter {
            top = top.min(addr.top());
            bottom = bottom.max(addr.bottom());
            left = left.min(addr.left());
            right = right.max(addr.right());
            if addr.kind() != kind {
                kind = AddressKind::Cells;
            }
        }

        Address::from_parts(first.sheet_name().to_string(), top, bottom, left, right, kind)
    }
}

fn linear_to_grid(index: u64, rows: u32, columns: u32, direction: FillDirection) -> (u32, u32) {
    match direction {
        FillDirection::RowFirst => {
            let columns = u64::from(columns);
            ((index / columns) as u32, (index % columns) as u32)
        }
        FillDirection::ColumnFirst => {
            let rows = u64::from(rows);
            ((index % rows) as u32, (index / rows) as u32)
        }
    }
}

fn shift_row(row: u32, offset: i64) -> Result<u32> {
    let shifted = i64::from(row).saturating_add(offset);
    if !(0..i64::from(MAX_ROWS)).contains(&shifted) {
        return Err(Error::RowOutOfBounds(shifted, MAX_ROWS - 1));
    }
    Ok(shifted as u32)
}

fn shift_column(column: u32, offset: i64) -> Result<u32> {
    let shifted = i64::from(column).saturating_add(offset);
    if !(0..i64::from(MAX_COLS)).contains(&shifted) {
        return Err(Error::ColumnOutOfBounds(shifted, MAX_COLS - 1));
    }
    Ok(shifted as u32)
}

/// Iterator over the cells of an [`Address`]
pub struct Cells {
    sheet_name: String,
    top: u32,
    left: u32,
    rows: u32,
    columns: u32,
    direction: FillDirection,
    next: u64,
    count: u64,
}

impl Iterator for Cells {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let (row, column) = linear_to_grid(self.next, self.rows, self.columns, self.direction);
        self.next += 1;

        Some(Address::from_parts(
            self.sheet_name.clone(),
            self.top + row,
            self.top + row,
            self.left + column,
            self.left + column,
            AddressKind::Cells,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_address;
    use pretty_assertions::assert_eq;

    fn addr(text: &str) -> Address {
        parse_address(text).unwrap()
    }

    #[test]
    fn test_offset() {
        let cell = addr("A1");
        assert_eq!(cell.offset(0, 0).unwrap(), cell);
        assert_eq!(cell.offset(1, 1).unwrap().local_address(), "$B$2");

        let range = addr("Sheet1!B2:C3");
        let moved = range.offset(2, -1).unwrap();
        assert_eq!(moved.full_address(), "Sheet1!$A$4:$B$5");
        assert_eq!(moved.cell_count(), range.cell_count());
    }

    #[test]
    fn test_offset_out_of_bounds() {
        assert_eq!(
            addr("A1").offset(-1, 0),
            Err(Error::RowOutOfBounds(-1, MAX_ROWS - 1))
        );
        assert_eq!(
            addr("XFD1").offset(0, 1),
            Err(Error::ColumnOutOfBounds(i64::from(MAX_COLS), MAX_COLS - 1))
        );
        assert_eq!(Address::REF.offset(1, 1), Err(Error::ErrorReference));
    }

    #[test]
    fn test_offset_entire_rows_and_columns() {
        let rows = addr("9:10").offset(2, 5).unwrap();
        assert_eq!(rows.local_address(), "$11:$12");

        let cols = addr("E:F").offset(3, -4).unwrap();
        assert_eq!(cols.local_address(), "$A:$B");
    }

    #[test]
    fn test_cell_at() {
        let range = addr("Sheet1!B2:D4");
        let cell = range.cell_at(1, 2).unwrap();
        assert_eq!(cell.full_address(), "Sheet1!$D$3");
        assert!(cell.is_single_cell());
    }

    #[test]
    fn test_nth_cell() {
        let range = addr("A1:C2");
        let row_first: Vec<String> = (0..6)
            .map(|i| range.nth_cell(i, FillDirection::RowFirst).unwrap().local_address())
            .collect();
        assert_eq!(row_first, ["$A$1", "$B$1", "$C$1", "$A$2", "$B$2", "$C$2"]);

        let column_first: Vec<String> = (0..6)
            .map(|i| range.nth_cell(i, FillDirection::ColumnFirst).unwrap().local_address())
            .collect();
        assert_eq!(column_first, ["$A$1", "$A$2", "$B$1", "$B$2", "$C$1", "$C$2"]);

        assert_eq!(
            range.nth_cell(6, FillDirection::RowFirst),
            Err(Error::IndexOutOfRange { index: 6, count: 6 })
        );
    }

    #[test]
    fn test_cells_iterator() {
        let range = addr("Data!A1:B2");
        let cells: Vec<_> = range.cells(FillDirection::RowFirst).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].full_address(), "Data!$A$1");
        assert_eq!(cells[1].full_address(), "Data!$B$1");
        assert_eq!(cells[2].full_address(), "Data!$A$2");
        assert_eq!(cells[3].full_address(), "Data!$B$2");

        let iter = range.cells(FillDirection::ColumnFirst);
        assert_eq!(iter.len(), 4);
        assert_eq!(Address::REF.cells(FillDirection::RowFirst).count(), 0);
    }

    #[test]
    fn test_contains() {
        let range = addr("Sheet1!B2:D4");
        assert!(range.contains(&addr("sheet1!C3")));
        assert!(range.contains(&addr("B2:D4")));
        assert!(!range.contains(&addr("Sheet1!A1")));
        assert!(!range.contains(&addr("Sheet2!C3")));
        assert!(!range.contains(&addr("C3:E5")));
        assert!(addr("A:A").contains(&addr("A1048576")));
    }

    #[test]
    fn test_max_min() {
        let a1 = addr("A1");
        let c4 = addr("C4");
        assert_eq!(a1.max(&c4), &c4);
        assert_eq!(c4.max(&a1), &c4);
        assert_eq!(a1.min(&c4), &a1);
        assert_eq!(c4.min(&a1), &a1);
    }

    #[test]
    fn test_bounding() {
        let a1 = addr("A1");
        let c4 = addr("C4");
        let range = Address::bounding([&a1, &c4]);
        assert_eq!(range.local_address(), "$A$1:$C$4");

        assert_eq!(Address::bounding([&a1]), a1);
        assert_eq!(Address::bounding(std::iter::empty::<&Address>()), Address::REF);
        assert_eq!(Address::bounding([&Address::REF, &c4]), c4);

        let rows = Address::bounding([&addr("2:3"), &addr("7:7")]);
        assert_eq!(rows.local_address(), "$2:$7");
    }
}
