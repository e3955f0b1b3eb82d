//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: money amounts,
//! the fixed category set, month keys, expenses and monthly budgets.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, MonthlyBudget};
pub use money::{Money, MoneyParseError};
pub use month::MonthKey;
