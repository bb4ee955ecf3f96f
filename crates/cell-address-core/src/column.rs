//! Column letter conversion
//!
//! Excel names columns with bijective base-26: the letters A-Z stand for the
//! digits 1-26 and there is no zero digit, so `Z` is followed by `AA` rather
//! than `BA`. Every position therefore subtracts one before dividing.

use crate::{ERROR_REFERENCE, MAX_COLS};

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
///
/// Indices outside `0..=16384` yield [`ERROR_REFERENCE`] instead of a name.
///
/// # Examples
/// ```
/// use cell_address_core::column_name;
///
/// assert_eq!(column_name(0), "A");
/// assert_eq!(column_name(701), "ZZ");
/// assert_eq!(column_name(16383), "XFD");
/// assert_eq!(column_name(-1), "#REF!");
/// ```
pub fn column_name(index: i64) -> String {
    if !(0..=i64::from(MAX_COLS)).contains(&index) {
        return ERROR_REFERENCE.to_string();
    }

    let mut result = String::with_capacity(3);
    let mut n = index + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a zero-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// Letters are case-insensitive. Returns `None` for empty input, any
/// non-letter character, or a value that does not fit in `u32`.
pub fn column_index_from_letters(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    let mut acc: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }

    Some(acc - 1)
}
