//! Budget file store
//!
//! Each month's budget lives in its own `budget_YYYY-MM.txt` file holding a
//! single decimal number.

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};

use super::file_io::{read_text_optional, write_text_atomic};

/// Reads and writes per-month budget files
pub struct BudgetStore {
    paths: ExpensePaths,
}

impl BudgetStore {
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Load the stored budget for a month, if any
    pub fn load(&self, month: MonthKey) -> ExpenseResult<Option<Money>> {
        let path = self.paths.budget_file(month);

        let Some(contents) = read_text_optional(&path)? else {
            return Ok(None);
        };

        let amount = Money::parse(&contents).map_err(|_| {
            ExpenseError::Storage(format!(
                "Budget file {} does not contain a number: '{}'",
                path.display(),
                contents.trim()
            ))
        })?;

        Ok(Some(amount))
    }

    /// Store the budget for a month, replacing any previous value
    pub fn save(&self, month: MonthKey, amount: Money) -> ExpenseResult<()> {
        let path = self.paths.budget_file(month);
        log::debug!("writing budget {} to {}", amount, path.display());
        write_text_atomic(&path, &amount.to_string())
    }
}
