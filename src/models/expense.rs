//! Expense record and monthly budget models
//!
//! An expense is immutable once written to a ledger; the program never
//! updates or deletes one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::MonthKey;

/// Maximum length of an expense note
pub const MAX_NOTE_LEN: usize = 200;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the expense was made
    pub date: NaiveDate,

    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    /// Create a new expense without a note
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
            note: None,
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        self.note = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// The month whose ledger this expense belongs to
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// The note, or an empty string
    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if let Some(note) = &self.note {
            let len = note.chars().count();
            if len > MAX_NOTE_LEN {
                return Err(ExpenseValidationError::NoteTooLong(len));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if let Some(note) = &self.note {
            write!(f, " ({})", note)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    NoteTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::NoteTooLong(len) => write!(
                f,
                "Note too long ({} characters, max {})",
                len, MAX_NOTE_LEN
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// The spending ceiling for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub month: MonthKey,
    pub amount: Money,
}

impl MonthlyBudget {
    pub fn new(month: MonthKey, amount: Money) -> Self {
        Self { month, amount }
    }
}
