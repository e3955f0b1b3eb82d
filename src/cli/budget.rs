//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_month, today};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the budget for a month
    Show {
        /// Month (e.g., "2025-06", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set or overwrite the budget for a month
    Set {
        /// Amount (e.g., "1000" or "1000.00")
        amount: String,
        /// Month (e.g., "2025-06", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage, settings);
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Show { month } => {
            let month = parse_month(month.as_deref(), today())?;
            match service.get(month)? {
                Some(budget) => println!(
                    "Budget for {}: {}",
                    month.friendly(),
                    budget.amount.format_with_symbol(symbol)
                ),
                None => println!("No budget set for {}.", month.friendly()),
            }
        }
        BudgetCommands::Set { amount, month } => {
            let month = parse_month(month.as_deref(), today())?;
            let amount =
                Money::parse(&amount).map_err(|_| ExpenseError::invalid_amount(amount.clone()))?;
            let budget = service.set(month, amount)?;
            println!(
                "Budget for {} set to {}.",
                month.friendly(),
                budget.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
