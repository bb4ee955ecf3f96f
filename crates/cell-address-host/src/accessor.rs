//! Routing of cell reads and writes to the configured provider.

use cell_address_core::{to_address, Address};

use crate::config::{AccessConfig, AccessStrategy};
use crate::error::{HostError, Result};
use crate::provider::{Matrix, RangeProvider, ReferenceProvider};
use crate::value::CellValue;

/// Reads and writes cells by [`Address`] through a host's providers.
///
/// Values and clearing follow [`AccessConfig::strategy`]. Formulas and
/// selection always go through the reference provider, which is the only one
/// that supports them.
pub struct CellAccessor<'a> {
    config: AccessConfig,
    references: &'a dyn ReferenceProvider,
    ranges: &'a dyn RangeProvider,
}

impl<'a> CellAccessor<'a> {
    pub fn new(
        config: AccessConfig,
        references: &'a dyn ReferenceProvider,
        ranges: &'a dyn RangeProvider,
    ) -> Self {
        Self {
            config,
            references,
            ranges,
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Read the top-left value of `address` (`Null` for an empty cell).
    pub fn get_value(&self, address: &Address) -> Result<CellValue> {
        ensure_valid(address)?;
        let matrix = self.get_matrix(&address.cell_at(0, 0)?)?;
        Ok(matrix
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default())
    }

    /// Read every value of `address`, row by row.
    pub fn get_values(&self, address: &Address) -> Result<Vec<CellValue>> {
        Ok(self.get_matrix(address)?.into_iter().flatten().collect())
    }

    /// Read the values of `address` in its own shape.
    pub fn get_matrix(&self, address: &Address) -> Result<Matrix> {
        ensure_valid(address)?;
        self.ensure_fits(address)?;
        tracing::debug!(strategy = ?self.config.strategy, %address, "reading values");

        let result = match self.config.strategy {
            AccessStrategy::Reference => self.references.get_values(address),
            AccessStrategy::Range => self.ranges.get_values(&address.full_address()),
        };
        result.map_err(|e| log_failure("read", address, e))
    }

    /// Write a single value into `address`.
    ///
    /// - `Null` clears every cell, as [`CellAccessor::clear_contents`] does
    /// - a single-cell target receives the value as is
    /// - text written to a multi-cell target is split on
    ///   [`AccessConfig::list_separator`] and laid out row by row; missing
    ///   items leave cells empty and extra items are dropped
    /// - any other value fills every cell
    pub fn set_value(&self, address: &Address, value: impl Into<CellValue>) -> Result<()> {
        let value = value.into();
        if value.is_null() {
            return self.clear_contents(address);
        }
        ensure_valid(address)?;
        self.ensure_fits(address)?;
        let rows = address.row_count() as usize;
        let columns = address.column_count() as usize;

        let matrix = match value {
            value if address.is_single_cell() => vec![vec![value]],
            CellValue::String(text) => {
                let mut items = text
                    .split(self.config.list_separator)
                    .map(|item| CellValue::String(item.to_string()));
                (0..rows)
                    .map(|_| {
                        (0..columns)
                            .map(|_| items.next().unwrap_or_default())
                            .collect()
                    })
                    .collect()
            }
            value => vec![vec![value; columns]; rows],
        };

        self.write(address, matrix)
    }

    /// Write a matrix of values; it must match the shape of `address`.
    pub fn set_values(&self, address: &Address, values: Matrix) -> Result<()> {
        ensure_valid(address)?;
        let actual_rows = values.len();
        let actual_columns = values.first().map_or(0, Vec::len);
        let shape_ok = actual_rows == address.row_count() as usize
            && values
                .iter()
                .all(|row| row.len() == address.column_count() as usize);

        if !shape_ok {
            return Err(HostError::ShapeMismatch {
                rows: address.row_count(),
                columns: address.column_count(),
                actual_rows,
                actual_columns,
            });
        }

        self.write(address, values)
    }

    /// Read the formula of the top-left cell of `address`.
    pub fn get_formula(&self, address: &Address) -> Result<String> {
        ensure_valid(address)?;
        self.references
            .get_formula(address)
            .map_err(|e| log_failure("read formula", address, e))
    }

    /// Enter `formula` into `address`.
    pub fn set_formula(&self, address: &Address, formula: &str) -> Result<()> {
        ensure_valid(address)?;
        tracing::debug!(%address, formula, "setting formula");
        self.references
            .set_formula(address, formula)
            .map_err(|e| log_failure("write formula", address, e))
    }

    /// Remove the contents of every cell in `address`.
    pub fn clear_contents(&self, address: &Address) -> Result<()> {
        ensure_valid(address)?;
        tracing::debug!(strategy = ?self.config.strategy, %address, "clearing contents");

        let result = match self.config.strategy {
            AccessStrategy::Reference => self.references.clear_contents(address),
            AccessStrategy::Range => self.ranges.clear_contents(&address.full_address()),
        };
        result.map_err(|e| log_failure("clear", address, e))
    }

    /// Move the host selection to `address`.
    pub fn activate(&self, address: &Address) -> Result<()> {
        ensure_valid(address)?;
        self.references
            .select(address)
            .map_err(|e| log_failure("select", address, e))
    }

    fn ensure_fits(&self, address: &Address) -> Result<()> {
        let cells = address.cell_count();
        if cells > self.config.max_cells {
            return Err(HostError::AreaTooLarge {
                cells,
                limit: self.config.max_cells,
            });
        }
        Ok(())
    }

    fn write(&self, address: &Address, values: Matrix) -> Result<()> {
        tracing::debug!(strategy = ?self.config.strategy, %address, "writing values");

        let result = match self.config.strategy {
            AccessStrategy::Reference => self.references.set_values(address, values),
            AccessStrategy::Range => self.ranges.set_values(&address.full_address(), values),
        };
        result.map_err(|e| log_failure("write", address, e))
    }
}

/// Formula text that points at `address` (`=$A$1` or `=$A$1:$C$4`).
///
/// With `first_cell_only` the formula refers to the top-left cell alone.
pub fn reference_formula(address: &Address, first_cell_only: bool) -> String {
    if first_cell_only || address.is_single_cell() {
        let top_left = to_address(i64::from(address.top()), i64::from(address.left()));
        return format!("={top_left}");
    }
    format!("={}", address.local_address())
}

fn ensure_valid(address: &Address) -> Result<()> {
    if address.is_error() {
        return Err(HostError::ErrorReference);
    }
    Ok(())
}

fn log_failure(action: &str, address: &Address, err: HostError) -> HostError {
    tracing::warn!(%address, error = %err, "failed to {action} cells");
    err
}
