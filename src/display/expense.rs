//! Ledger and category display
//!
//! Table views of a month's expenses and of the category menu.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "")]
    emoji: &'static str,
    #[tabled(rename = "Category")]
    name: &'static str,
}

/// Format a month's expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        date: e.date.format(date_format).to_string(),
        category: format!("{} {}", e.category.emoji(), e.category),
        amount: e.amount.format_with_symbol(symbol),
        note: truncate(e.note_str(), 30),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the fixed category list with menu numbers
pub fn format_category_table() -> String {
    let rows = Category::ALL.iter().map(|c| CategoryRow {
        index: c.menu_index(),
        emoji: c.emoji(),
        name: c.name(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
