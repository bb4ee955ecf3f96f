//! Access configuration.

use serde::{Deserialize, Serialize};

/// Default cap on the cells an operation may hold as a value matrix.
pub const DEFAULT_MAX_CELLS: u64 = 1 << 24;

/// Which provider serves value reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStrategy {
    /// Live coordinate references ([`crate::ReferenceProvider`])
    #[default]
    Reference,
    /// Range handles looked up by address text ([`crate::RangeProvider`])
    Range,
}

/// Configuration for a [`crate::CellAccessor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Provider used for values and clearing.
    pub strategy: AccessStrategy,

    /// Separator used to split a text value written to a multi-cell range.
    pub list_separator: char,

    /// Largest area, in cells, read or written as a value matrix.
    ///
    /// Clearing goes through the providers directly and is not limited.
    pub max_cells: u64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            strategy: AccessStrategy::Reference,
            list_separator: ',',
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl AccessConfig {
    /// Set the access strategy
    pub fn with_strategy(mut self, strategy: AccessStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the list separator
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.list_separator = separator;
        self
    }

    /// Set the matrix cell limit
    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }
}
