//! Service layer for the expense tracker
//!
//! Business logic between the CLI and storage: budget resolution and
//! expense recording.

pub mod budget;
pub mod expense;

pub use budget::{BudgetService, BudgetSource, ResolvedBudget};
pub use expense::ExpenseService;
