//! Address text parsing and formatting
//!
//! Supports the two Excel notations:
//! - A1: `A1`, `$A$1`, `Sheet1!A1:C4`, `'Sheet 1'!B2`, `Sheet1!9:9`, `E:F`
//! - R1C1: `R1C1`, `Sheet1!R1C1:R4C3`
//!
//! The notation is inferred from the text itself; there is no format flag.
//! Parsing never fails loudly: text that does not fit the grammar yields
//! `None`, and any text containing `#` yields [`Address::REF`].

use crate::address::Address;
use crate::column::{column_index_from_letters, column_name};
use crate::error::{Error, Result};
use crate::{ERROR_REFERENCE, MAX_COLS, MAX_ROWS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part ending in `R<digits>C<digits>`
static R1C1_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R[0-9]+C[0-9]+\s*$").expect("R1C1 suffix pattern"));

/// One side of an R1C1 reference
static R1C1_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*R([0-9]+)C([0-9]+)\s*$").expect("R1C1 part pattern"));

/// One side of an A1 reference; either the column or the row may be absent
static A1_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\$?([A-Za-z]+))?(?:\$?([0-9]+))?\s*$").expect("A1 part pattern")
});

/// Check whether address text is in R1C1 notation
///
/// Only the part after the sheet qualifier is inspected, so a sheet named
/// like `R3C2` does not turn an A1 address into an R1C1 one.
pub fn is_r1c1_format(text: &str) -> bool {
    let (_, local) = split_qualifier(text);
    R1C1_SUFFIX.is_match(local)
}

/// Parse address text in either notation
///
/// # Examples
/// ```
/// use cell_address_core::{parse_address, Address};
///
/// let addr = parse_address("A1:C4").unwrap();
/// assert_eq!(addr.cell_count(), 12);
///
/// assert_eq!(parse_address("#REF!"), Some(Address::REF));
/// assert_eq!(parse_address(""), None);
/// ```
pub fn parse_address(text: &str) -> Option<Address> {
    if text.is_empty() {
        return None;
    }

    if text.contains('#') {
        return Some(Address::REF);
    }

    if is_r1c1_format(text) {
        parse_r1c1(text)
    } else {
        parse_a1(text)
    }
}

/// Parse A1-style address text ("A1", "$A$1", "Sheet1!A1:C4", "9:9", "E:F")
pub fn parse_a1(text: &str) -> Option<Address> {
    let (sheet, local) = split_qualifier(text);
    let sheet_name = unquote_sheet_name(sheet);

    let Some((first, last)) = local.split_once(':') else {
        let part = A1Part::parse(local)?;
        return Address::cell(sheet_name, part.row?, part.column?).ok();
    };

    let first = A1Part::parse(first)?;
    let last = A1Part::parse(last)?;

    match (first, last) {
        (
            A1Part {
                column: Some(column_first),
                row: Some(row_first),
            },
            A1Part {
                column: Some(column_last),
                row: Some(row_last),
            },
        ) => Address::range(sheet_name, row_first, row_last, column_first, column_last).ok(),
        (
            A1Part {
                column: None,
                row: Some(row_first),
            },
            A1Part {
                column: None,
                row: Some(row_last),
            },
        ) => Address::entire_rows(sheet_name, row_first, row_last).ok(),
        (
            A1Part {
                column: Some(column_first),
                row: None,
            },
            A1Part {
                column: Some(column_last),
                row: None,
            },
        ) => Address::entire_columns(sheet_name, column_first, column_last).ok(),
        _ => None,
    }
}

/// Parse R1C1-style address text ("R1C1", "Sheet1!R1C1:R4C3")
pub fn parse_r1c1(text: &str) -> Option<Address> {
    let (sheet, local) = split_qualifier(text);
    let sheet_name = unquote_sheet_name(sheet);

    match local.split_once(':') {
        None => {
            let (row, column) = r1c1_part(local)?;
            Address::cell(sheet_name, row, column).ok()
        }
        Some((first, last)) => {
            let (row_first, column_first) = r1c1_part(first)?;
            let (row_last, column_last) = r1c1_part(last)?;
            Address::range(sheet_name, row_first, row_last, column_first, column_last).ok()
        }
    }
}

/// Extract the sheet name from address text
///
/// Returns an empty string when there is no `!` qualifier. A leading
/// `[Book.xlsx]` workbook qualifier and surrounding single quotes are
/// stripped, so `'[Book1]Sheet 1'!A1` gives `Sheet 1`.
///
/// # Errors
/// [`Error::InvalidArgument`] when `text` is empty.
pub fn get_sheet_name(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(Error::InvalidArgument("address"));
    }
    let (sheet, _) = split_qualifier(text);
    Ok(unquote_sheet_name(sheet))
}

/// Format 0-based indices as an absolute A1 address ("$A$1")
///
/// Indices outside the worksheet yield [`ERROR_REFERENCE`].
pub fn to_address(row: i64, column: i64) -> String {
    if !in_bounds(row, column) {
        return ERROR_REFERENCE.to_string();
    }
    format!("${}${}", column_name(column), row + 1)
}

/// Format 0-based indices as an R1C1 address ("R1C1")
///
/// Indices outside the worksheet yield [`ERROR_REFERENCE`].
pub fn to_address_r1c1(row: i64, column: i64) -> String {
    if !in_bounds(row, column) {
        return ERROR_REFERENCE.to_string();
    }
    format!("R{}C{}", row + 1, column + 1)
}

fn in_bounds(row: i64, column: i64) -> bool {
    (0..i64::from(MAX_ROWS)).contains(&row) && (0..i64::from(MAX_COLS)).contains(&column)
}

/// Split text into the raw sheet qualifier and the local address.
///
/// The qualifier runs from after the last `]` (or the start) to the first
/// following `!`. Without such a `!` the whole text is the local address.
fn split_qualifier(text: &str) -> (&str, &str) {
    let start = text.rfind(']').map_or(0, |i| i + 1);
    match text[start..].find('!') {
        Some(offset) => {
            let bang = start + offset;
            (&text[start..bang], &text[bang + 1..])
        }
        None => ("", text),
    }
}

fn unquote_sheet_name(raw: &str) -> String {
    let name = raw.strip_prefix('\'').unwrap_or(raw);
    let name = name.strip_suffix('\'').unwrap_or(name);
    name.replace("''", "'")
}

/// One matched side of an A1 reference, already 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct A1Part {
    column: Option<u32>,
    row: Option<u32>,
}

impl A1Part {
    fn parse(text: &str) -> Option<Self> {
        let caps = A1_PART.captures(text)?;

        let column = match caps.get(1) {
            Some(m) => Some(column_index_from_letters(m.as_str())?),
            None => None,
        };
        let row = match caps.get(2) {
            Some(m) => Some(m.as_str().parse::<u32>().ok()?.checked_sub(1)?),
            None => None,
        };

        if column.is_none() && row.is_none() {
            return None;
        }
        Some(Self { column, row })
    }
}

/// Match one side of an R1C1 reference, returning 0-based (row, column)
fn r1c1_part(text: &str) -> Option<(u32, u32)> {
    let caps = R1C1_PART.captures(text)?;
    let row = caps[1].parse::<u32>().ok()?.checked_sub(1)?;
    let column = caps[2].parse::<u32>().ok()?.checked_sub(1)?;
    Some((row, column))
}
