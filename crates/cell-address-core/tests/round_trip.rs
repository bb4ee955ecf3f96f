//! Round-trip properties between address text and coordinates

use cell_address_core::{
    column_index_from_letters, column_name, get_sheet_name, parse_address, to_address,
    to_address_r1c1, Address, ERROR_REFERENCE, MAX_COLS, MAX_ROWS,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn a1_round_trip(row in 0..MAX_ROWS, col in 0..MAX_COLS) {
        let text = to_address(i64::from(row), i64::from(col));
        let addr = parse_address(&text).unwrap();
        prop_assert_eq!(addr.row_first(), row);
        prop_assert_eq!(addr.column_first(), col);
        prop_assert!(addr.is_single_cell());
    }

    #[test]
    fn r1c1_round_trip(row in 0..MAX_ROWS, col in 0..MAX_COLS) {
        let text = to_address_r1c1(i64::from(row), i64::from(col));
        let addr = parse_address(&text).unwrap();
        prop_assert_eq!(addr.row_first(), row);
        prop_assert_eq!(addr.column_first(), col);
    }

    #[test]
    fn column_name_bijection(n in 0u32..=MAX_COLS) {
        prop_assert_eq!(column_index_from_letters(&column_name(i64::from(n))), Some(n));
    }

    #[test]
    fn full_address_round_trip(
        sheet in "[A-Za-z][A-Za-z0-9 ]{0,12}",
        r1 in 0..MAX_ROWS,
        r2 in 0..MAX_ROWS,
        c1 in 0..MAX_COLS,
        c2 in 0..MAX_COLS,
    ) {
        let addr = Address::range(sheet.as_str(), r1, r2, c1, c2).unwrap();
        prop_assert_eq!(parse_address(&addr.full_address()), Some(addr.clone()));
        prop_assert_eq!(parse_address(&addr.full_address_r1c1()), Some(addr));
    }
}

#[test]
fn column_name_every_index() {
    for n in 0..=MAX_COLS {
        assert_eq!(column_index_from_letters(&column_name(i64::from(n))), Some(n));
    }
}

#[test]
fn column_name_boundary_cases() {
    assert_eq!(column_name(25), "Z");
    assert_eq!(column_name(26), "AA");
    assert_eq!(column_name(701), "ZZ");
    assert_eq!(column_name(702), "AAA");
    assert_eq!(column_name(16385), ERROR_REFERENCE);
}

#[test]
fn out_of_range_formatting_is_total() {
    assert_eq!(to_address(-1, 0), ERROR_REFERENCE);
    assert_eq!(to_address_r1c1(0, -1), ERROR_REFERENCE);
    assert_eq!(to_address(i64::MIN, i64::MAX), ERROR_REFERENCE);
}

#[test]
fn sheet_with_space_is_quoted_on_render() {
    assert_eq!(get_sheet_name("'Sheet 1'!A1").unwrap(), "Sheet 1");

    let addr = parse_address("'Sheet 1'!A1").unwrap();
    assert_eq!(addr.sheet_name(), "Sheet 1");
    assert_eq!(addr.full_address(), "'Sheet 1'!$A$1");
    assert_eq!(addr.to_string(), "'Sheet 1'!$A$1");
}

#[test]
fn sheet_with_apostrophes_survives_round_trip() {
    for name in ["'x", "x'", "it''s", "Bob's", "'"] {
        let addr = Address::cell(name, 0, 0).unwrap();
        let text = addr.full_address();
        assert_eq!(get_sheet_name(&text).unwrap(), name, "{text}");
        assert_eq!(parse_address(&text), Some(addr), "{text}");
    }
}

#[test]
fn entire_row_and_column_shorthand() {
    let rows = parse_address("Sheet1!9:9").unwrap();
    assert!(rows.is_entire_rows() && !rows.is_entire_columns());
    assert_eq!((rows.row_first(), rows.row_last()), (8, 8));
    assert_eq!((rows.column_first(), rows.column_last()), (0, MAX_COLS - 1));

    let cols = parse_address("Sheet1!E:F").unwrap();
    assert!(cols.is_entire_columns() && !cols.is_entire_rows());
    assert_eq!((cols.column_first(), cols.column_last()), (4, 5));
    assert_eq!((cols.row_first(), cols.row_last()), (0, MAX_ROWS - 1));

    assert_eq!(parse_address(&rows.full_address()), Some(rows));
    assert_eq!(parse_address(&cols.full_address()), Some(cols));
}

#[test]
fn error_marker_anywhere() {
    for text in ["#REF!", "A1#", "Sheet1!#N/A", "#"] {
        assert_eq!(parse_address(text), Some(Address::REF), "{text}");
    }
}
