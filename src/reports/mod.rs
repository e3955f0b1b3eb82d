//! Reports for the expense tracker
//!
//! - Monthly summary: spending by category against the month's budget

pub mod summary;

pub use summary::{CategoryTotal, MonthlySummary};
