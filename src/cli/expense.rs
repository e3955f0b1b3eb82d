//! Expense CLI commands
//!
//! Non-interactive recording, ledger listing and the category list.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_category_table, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_date, parse_month, today};

/// Arguments for recording an expense without prompts
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category name or menu number (see `categories`)
    pub category: String,
    /// Amount (e.g., "200" or "45.50")
    pub amount: String,
    /// Description of the expense
    #[arg(short, long)]
    pub note: Option<String>,
    /// Date of the expense (YYYY-MM-DD, "today", "yesterday")
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Record one expense from command-line arguments
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let category: Category = args.category.parse()?;
    let amount =
        Money::parse(&args.amount).map_err(|_| ExpenseError::invalid_amount(args.amount.clone()))?;
    let date = parse_date(args.date.as_deref(), today())?;

    let mut expense = Expense::new(date, category, amount);
    if let Some(note) = args.note {
        expense = expense.with_note(note);
    }

    ExpenseService::new(storage).record(&expense)?;

    println!(
        "✅  Recorded {} {} {} on {}.",
        category.emoji(),
        category,
        amount.format_with_symbol(&settings.currency_symbol),
        date.format(&settings.date_format)
    );

    Ok(())
}

/// List the expenses recorded for a month
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> ExpenseResult<()> {
    let month = parse_month(month.as_deref(), today())?;
    let ledger = ExpenseService::new(storage).ledger(month)?;

    for line in &ledger.skipped {
        println!("Skipping malformed line: {}", line);
    }

    println!("Expenses for {}", month.friendly());
    print!(
        "{}",
        format_expense_table(&ledger.expenses, &settings.currency_symbol, &settings.date_format)
    );

    if !ledger.is_empty() {
        println!(
            "Total: {}",
            ledger.total().format_with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}

/// Print the category list
pub fn handle_categories_command() -> ExpenseResult<()> {
    print!("{}", format_category_table());
    Ok(())
}
