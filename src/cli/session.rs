//! Interactive session
//!
//! The default flow: resolve the month's budget, record expenses until the
//! user is done, then print the summary and optionally the pie chart.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::{format_summary, render_pie_chart};
use crate::error::ExpenseResult;
use crate::models::MonthKey;
use crate::prompt::Prompter;
use crate::reports::MonthlySummary;
use crate::services::{BudgetService, BudgetSource, ExpenseService};
use crate::storage::Storage;

/// Run the interactive session for the month containing `today`
pub fn run_session<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let month = MonthKey::from_date(today);
    let symbol = settings.currency_symbol.as_str();

    prompter.say(format!("🎯  Expense Tracker - {}", month.friendly()))?;

    let resolved = BudgetService::new(storage, settings).resolve(month, prompter)?;
    if resolved.source != BudgetSource::Stored {
        prompter.say(format!(
            "Budget for {} set to {}.",
            month.friendly(),
            resolved.budget.amount.format_with_symbol(symbol)
        ))?;
    }

    let expense_service = ExpenseService::new(storage);
    let mut recorded = 0usize;

    while prompter.confirm("Add a new expense? (y/n): ")? {
        let expense = expense_service.prompt_expense(prompter, today, symbol)?;
        expense_service.record(&expense)?;
        recorded += 1;
        prompter.say("✅  Expense saved.\n")?;
    }

    log::debug!("session recorded {} expense(s) for {}", recorded, month);

    let summary = MonthlySummary::generate(storage, month, resolved.budget.amount, today)?;
    write!(prompter.output_mut(), "{}", format_summary(&summary, symbol))?;

    if !summary.is_empty() && prompter.confirm("\nShow pie chart? (y/n): ")? {
        write!(prompter.output_mut(), "{}", render_pie_chart(&summary))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Category, Money};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage, settings)
    }

    fn run(storage: &Storage, settings: &Settings, input: &str, today: NaiveDate) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(storage, settings, &mut prompter, today).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_full_session() {
        let (_temp, storage, settings) = setup();
        let input = "1000\n\
                     y\nlunch\n200\n1\n\
                     y\nbus\n100\n2\n\
                     y\nsnack\n50\n1\n\
                     n\n\
                     y\n";

        let out = run(&storage, &settings, input, june(10));

        assert!(out.contains("Expense Tracker - June 2025"));
        assert!(out.contains("Budget for June 2025 set to ₹1000.00."));
        assert_eq!(out.matches("Expense saved.").count(), 3);
        assert!(out.contains("( 25.0%)"));
        assert!(out.contains("( 10.0%)"));
        assert!(out.contains("Budget remaining: ₹650.00"));
        assert!(out.contains("Monthly Expense Distribution"));

        let ledger = storage.ledger.read(MonthKey::new(2025, 6).unwrap()).unwrap();
        assert_eq!(ledger.expenses.len(), 3);
        assert_eq!(ledger.expenses[2].category, Category::Food);
    }

    #[test]
    fn test_second_session_reuses_stored_budget() {
        let (_temp, storage, settings) = setup();
        run(&storage, &settings, "800\nn\n", june(10));

        let out = run(&storage, &settings, "n\n", june(11));

        assert!(!out.contains("Enter budget"));
        assert!(out.contains("No expenses recorded yet."));
        assert!(!out.contains("Show pie chart"));
        assert_eq!(
            storage.budgets.load(MonthKey::new(2025, 6).unwrap()).unwrap(),
            Some(Money::from_cents(80_000))
        );
    }

    #[test]
    fn test_long_note_is_asked_again() {
        let (_temp, storage, settings) = setup();
        let input = format!("1000\ny\n{}\ncoffee\n10\n1\nn\nn\n", "x".repeat(201));

        let out = run(&storage, &settings, &input, june(10));

        assert!(out.contains("Too long (201 characters, max 200)."));
        assert_eq!(out.matches("Expense saved.").count(), 1);

        let ledger = storage.ledger.read(MonthKey::new(2025, 6).unwrap()).unwrap();
        assert_eq!(ledger.expenses[0].note.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_session_stops_cleanly_on_chart_decline() {
        let (_temp, storage, settings) = setup();
        let out = run(&storage, &settings, "100\ny\ntaxi\n30\ntravel\nn\nn\n", june(30));

        assert!(out.contains("Daily budget left: ₹0.00"));
        assert!(!out.contains("Monthly Expense Distribution"));
    }
}
