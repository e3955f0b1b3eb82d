//! Monthly ledger store
//!
//! Each month's expenses are appended to `expenses_YYYY-MM.csv` as headerless
//! rows of `date,note,amount,category`. The file only ever grows.

use std::fs::{File, OpenOptions};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money, MonthKey};

use super::file_io::{ensure_parent, is_missing_or_empty};

/// One CSV row as it appears on disk
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    date: NaiveDate,
    note: String,
    amount: String,
    category: Category,
}

impl From<&Expense> for LedgerRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date,
            note: expense.note_str().to_string(),
            amount: expense.amount.to_string(),
            category: expense.category,
        }
    }
}

impl LedgerRow {
    fn into_expense(self) -> Option<Expense> {
        let amount = Money::parse(&self.amount).ok()?;
        if amount.is_negative() {
            return None;
        }
        Some(Expense::new(self.date, self.category, amount).with_note(self.note))
    }
}

/// The expenses recorded for one month, in file order
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    /// Raw text of rows that could not be read
    pub skipped: Vec<String>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

/// Appends to and reads back the per-month ledger files
pub struct LedgerStore {
    paths: ExpensePaths,
}

impl LedgerStore {
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Check whether anything has been recorded for the month
    pub fn has_entries(&self, month: MonthKey) -> bool {
        !is_missing_or_empty(self.paths.ledger_file(month))
    }

    /// Append one expense to the ledger of its month
    pub fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        let path = self.paths.ledger_file(expense.month());
        ensure_parent(&path)?;

        if !path.exists() {
            log::debug!("creating ledger {}", path.display());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.serialize(LedgerRow::from(expense))?;
        writer.flush()?;

        Ok(())
    }

    /// Read every expense recorded for the month
    ///
    /// A missing file is an empty ledger. Rows that can't be parsed are
    /// collected in `skipped` instead of failing the read.
    pub fn read(&self, month: MonthKey) -> ExpenseResult<Ledger> {
        let path = self.paths.ledger_file(month);

        if !path.exists() {
            return Ok(Ledger::default());
        }

        let file = File::open(&path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut ledger = Ledger::default();

        for (index, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("{}: unreadable row {}: {}", path.display(), index + 1, e);
                    ledger.skipped.push(format!("<row {}>", index + 1));
                    continue;
                }
            };

            let expense = record
                .deserialize::<LedgerRow>(None)
                .ok()
                .and_then(LedgerRow::into_expense);

            match expense {
                Some(expense) => ledger.expenses.push(expense),
                None => {
                    let raw = record.iter().collect::<Vec<_>>().join(",");
                    log::warn!("{}: skipping malformed row {}: {}", path.display(), index + 1, raw);
                    ledger.skipped.push(raw);
                }
            }
        }

        Ok(ledger)
    }
}
