//! Expense service
//!
//! Records expenses into the monthly ledgers, either from values given on
//! the command line or from an interactive prompt.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::MAX_NOTE_LEN;
use crate::models::{Expense, MonthKey};
use crate::prompt::Prompter;
use crate::storage::{Ledger, Storage};

/// Service for recording and reading expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append an expense to its month's ledger
    ///
    /// No check is made against the budget.
    pub fn record(&self, expense: &Expense) -> ExpenseResult<()> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.ledger.append(expense)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.month().to_string(),
            expense,
            Some(format!("{} {}", expense.category, expense.amount)),
        )?;

        Ok(())
    }

    /// Ask the user for the fields of a new expense dated `today`
    pub fn prompt_expense<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        today: NaiveDate,
        currency_symbol: &str,
    ) -> ExpenseResult<Expense> {
        prompter.say("🎯  Enter a new expense")?;
        let note = prompter.ask_bounded("Name/Description: ", MAX_NOTE_LEN)?;
        let amount = prompter.ask_amount(
            &format!("Amount ({}): ", currency_symbol),
            "Amount must be positive.",
        )?;
        let category = prompter.ask_category()?;

        Ok(Expense::new(today, category, amount).with_note(note))
    }

    /// Every expense recorded for a month
    pub fn ledger(&self, month: MonthKey) -> ExpenseResult<Ledger> {
        self.storage.ledger.read(month)
    }
}
