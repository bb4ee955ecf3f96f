//! In-process workbook implementing both provider traits.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use cell_address_core::{parse_address, Address};

use crate::config::DEFAULT_MAX_CELLS;
use crate::error::{HostError, Result};
use crate::provider::{Matrix, RangeArea, RangeProvider, ReferenceProvider};
use crate::value::CellValue;

/// Sheet name used for unqualified addresses unless changed.
const DEFAULT_ACTIVE_SHEET: &str = "Sheet1";

/// (lowercased sheet, row, column)
type CellKey = (String, u32, u32);

#[derive(Debug, Default)]
struct State {
    values: HashMap<CellKey, CellValue>,
    formulas: HashMap<CellKey, String>,
    selection: Option<Address>,
}

/// A workbook held in memory.
///
/// Sheet names match case-insensitively. Unqualified addresses refer to the
/// active sheet. Formulas are stored as text and never evaluated.
///
/// Storage is sparse, so clearing any area is cheap. Reading values or
/// entering a formula touches every cell of the area and is refused above
/// the workbook's cell limit.
#[derive(Debug)]
pub struct MemoryWorkbook {
    active_sheet: String,
    max_cells: u64,
    state: Mutex<State>,
}

impl Default for MemoryWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self {
            active_sheet: DEFAULT_ACTIVE_SHEET.to_string(),
            max_cells: DEFAULT_MAX_CELLS,
            state: Mutex::new(State::default()),
        }
    }

    /// Use `name` as the sheet for unqualified addresses.
    pub fn with_active_sheet(mut self, name: impl Into<String>) -> Self {
        self.active_sheet = name.into();
        self
    }

    /// Refuse per-cell work on areas larger than `max_cells`.
    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn active_sheet(&self) -> &str {
        &self.active_sheet
    }

    /// The address most recently selected, if any.
    pub fn selection(&self) -> Result<Option<Address>> {
        Ok(self.state()?.selection.clone())
    }

    /// Number of non-empty cells across all sheets.
    pub fn len(&self) -> Result<usize> {
        Ok(self.state()?.values.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn state(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| HostError::provider("workbook state lock poisoned"))
    }

    fn sheet_key(&self, address: &Address) -> String {
        let sheet = if address.sheet_name().is_empty() {
            &self.active_sheet
        } else {
            address.sheet_name()
        };
        sheet.to_lowercase()
    }

    fn ensure_fits(&self, address: &Address) -> Result<()> {
        let cells = address.cell_count();
        if cells > self.max_cells {
            return Err(HostError::AreaTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }

    fn resolve(&self, full_address: &str) -> Result<Address> {
        let address = parse_address(full_address).ok_or_else(|| {
            HostError::Address(cell_address_core::Error::InvalidAddress(
                full_address.to_string(),
            ))
        })?;
        if address.is_error() {
            return Err(HostError::ErrorReference);
        }
        Ok(address)
    }

    fn clear(&self, address: &Address) -> Result<()> {
        let sheet = self.sheet_key(address);
        let mut state = self.state()?;
        let in_area = |key: &CellKey| key.0 == sheet && covers(address, key.1, key.2);
        state.values.retain(|key, _| !in_area(key));
        state.formulas.retain(|key, _| !in_area(key));
        Ok(())
    }
}

fn covers(address: &Address, row: u32, column: u32) -> bool {
    (address.top()..=address.bottom()).contains(&row)
        && (address.left()..=address.right()).contains(&column)
}

impl ReferenceProvider for MemoryWorkbook {
    fn get_values(&self, address: &Address) -> Result<Matrix> {
        self.ensure_fits(address)?;
        let sheet = self.sheet_key(address);
        let state = self.state()?;
        let matrix = (address.top()..=address.bottom())
            .map(|row| {
                (address.left()..=address.right())
                    .map(|column| {
                        state
                            .values
                            .get(&(sheet.clone(), row, column))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Ok(matrix)
    }

    fn set_values(&self, address: &Address, values: Matrix) -> Result<()> {
        let sheet = self.sheet_key(address);
        let mut state = self.state()?;
        for (row, row_values) in (address.top()..).zip(values) {
            for (column, value) in (address.left()..).zip(row_values) {
                let key = (sheet.clone(), row, column);
                if value.is_null() {
                    state.values.remove(&key);
                } else {
                    state.values.insert(key, value);
                }
            }
        }
        Ok(())
    }

    fn get_formula(&self, address: &Address) -> Result<String> {
        let key = (self.sheet_key(address), address.top(), address.left());
        Ok(self.state()?.formulas.get(&key).cloned().unwrap_or_default())
    }

    fn set_formula(&self, address: &Address, formula: &str) -> Result<()> {
        self.ensure_fits(address)?;
        let sheet = self.sheet_key(address);
        let mut state = self.state()?;
        for row in address.top()..=address.bottom() {
            for column in address.left()..=address.right() {
                state
                    .formulas
                    .insert((sheet.clone(), row, column), formula.to_string());
            }
        }
        Ok(())
    }

    fn clear_contents(&self, address: &Address) -> Result<()> {
        self.clear(address)
    }

    fn select(&self, address: &Address) -> Result<()> {
        self.state()?.selection = Some(address.clone());
        Ok(())
    }
}

impl RangeProvider for MemoryWorkbook {
    fn area(&self, full_address: &str) -> Result<RangeArea> {
        let address = self.resolve(full_address)?;
        let mut area = RangeArea::from(&address);
        if area.sheet_name.is_empty() {
            area.sheet_name = self.active_sheet.clone();
        }
        Ok(area)
    }

    fn get_values(&self, full_address: &str) -> Result<Matrix> {
        let address = self.resolve(full_address)?;
        ReferenceProvider::get_values(self, &address)
    }

    fn set_values(&self, full_address: &str, values: Matrix) -> Result<()> {
        let address = self.resolve(full_address)?;
        ReferenceProvider::set_values(self, &address, values)
    }

    fn clear_contents(&self, full_address: &str) -> Result<()> {
        let address = self.resolve(full_address)?;
        self.clear(&address)
    }
}
