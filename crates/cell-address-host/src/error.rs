//! Errors from host access.

/// Result type alias using [`HostError`]
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors from reading or writing cells through a provider.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Address(#[from] cell_address_core::Error),

    #[error("Reference must contain a single area, got {0}")]
    MultipleAreas(usize),

    #[error("Value matrix is {actual_rows}x{actual_columns}, target is {rows}x{columns}")]
    ShapeMismatch {
        rows: u32,
        columns: u32,
        actual_rows: usize,
        actual_columns: usize,
    },

    #[error("Area of {cells} cells exceeds the limit of {limit}")]
    AreaTooLarge { cells: u64, limit: u64 },

    #[error("Cannot access cells of an error reference")]
    ErrorReference,

    #[error("Provider error: {0}")]
    Provider(String),
}

impl HostError {
    /// Create a provider error with a message
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        HostError::Provider(msg.into())
    }
}
