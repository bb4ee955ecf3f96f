//! Error types for cell-address-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cell-address-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Address text could not be parsed
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// A required argument was empty
    #[error("Argument `{0}` must not be empty")]
    InvalidArgument(&'static str),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(i64, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(i64, u32),

    /// Linear cell index past the end of a range
    #[error("Cell index {index} out of range (count: {count})")]
    IndexOutOfRange { index: u64, count: u64 },

    /// Operation is not defined for the `#REF!` address
    #[error("Operation not valid on an error reference")]
    ErrorReference,
}
