//! Spreadsheet host access driven by [`cell_address_core::Address`] values.
//!
//! A spreadsheet host exposes cells in two ways, modelled here as traits:
//! - [`ReferenceProvider`] - live references by 0-based coordinates and sheet
//!   name (read/write values and formulas, select)
//! - [`RangeProvider`] - UI-bound range handles looked up by address text,
//!   reporting 1-based area metadata
//!
//! [`CellAccessor`] routes reads and writes to one of them according to the
//! [`AccessStrategy`] in its [`AccessConfig`]. [`MemoryWorkbook`] implements
//! both traits in-process.
//!
//! # Architecture
//!
//! ```text
//! Your Rust code
//!     └── CellAccessor (AccessConfig.strategy)
//!           ├── ReferenceProvider  (Reference strategy, formulas, select)
//!           └── RangeProvider      (Range strategy)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cell_address_core::parse_address;
//! use cell_address_host::{AccessConfig, CellAccessor, CellValue, MemoryWorkbook};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let book = MemoryWorkbook::new();
//!     let cells = CellAccessor::new(AccessConfig::default(), &book, &book);
//!
//!     let range = parse_address("Sheet1!A1:C1").unwrap();
//!     cells.set_value(&range, "a,b,c")?;
//!
//!     let b1 = parse_address("Sheet1!B1").unwrap();
//!     assert_eq!(cells.get_value(&b1)?, CellValue::from("b"));
//!     Ok(())
//! }
//! ```

mod accessor;
mod config;
mod error;
mod memory;
mod provider;
mod value;

pub use accessor::{reference_formula, CellAccessor};
pub use config::{AccessConfig, AccessStrategy, DEFAULT_MAX_CELLS};
pub use error::{HostError, Result};
pub use memory::MemoryWorkbook;
pub use provider::{Matrix, RangeArea, RangeProvider, ReferenceInfo, ReferenceProvider};
pub use value::{CellError, CellValue};
