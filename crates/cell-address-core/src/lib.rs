//! # cell-address-core
//!
//! Spreadsheet cell addressing for the cell-address workspace.
//!
//! This crate provides:
//! - [`Address`] - An immutable sheet-qualified cell or range address
//! - [`parser`] - Conversion between address text (A1 / R1C1) and coordinates
//! - [`column`] - Excel's bijective base-26 column letters
//! - Address arithmetic (offsets, cell iteration, bounding ranges)
//!
//! ## Example
//!
//! ```rust
//! use cell_address_core::{parse_address, Address};
//!
//! let addr = parse_address("Sheet1!A1:C4").unwrap();
//! assert_eq!(addr.sheet_name(), "Sheet1");
//! assert_eq!(addr.row_last(), 3);
//! assert_eq!(addr.column_last(), 2);
//! assert_eq!(addr.cell_count(), 12);
//! assert_eq!(addr.to_string(), "Sheet1!$A$1:$C$4");
//!
//! let cell = Address::cell("Sheet 1", 1, 1).unwrap();
//! assert_eq!(cell.full_address(), "'Sheet 1'!$B$2");
//! ```

pub mod address;
pub mod arithmetic;
pub mod column;
pub mod error;
pub mod parser;

// Re-exports for convenience
pub use address::{Address, AddressKind};
pub use arithmetic::{Cells, FillDirection};
pub use column::{column_index_from_letters, column_name};
pub use error::{Error, Result};
pub use parser::{
    get_sheet_name, is_r1c1_format, parse_a1, parse_address, parse_r1c1, to_address,
    to_address_r1c1,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Marker text for an invalid or out-of-range reference
pub const ERROR_REFERENCE: &str = "#REF!";
