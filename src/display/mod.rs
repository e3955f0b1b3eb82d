//! Display formatting for terminal output
//!
//! Formatting for summaries, the text pie chart and ledger tables.

pub mod chart;
pub mod expense;
pub mod report;
pub mod summary;

pub use chart::render_pie_chart;
pub use expense::{format_category_table, format_expense_table};
pub use report::{format_money_colored, green};
pub use summary::format_summary;
