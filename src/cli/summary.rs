//! Summary CLI command

use crate::config::settings::Settings;
use crate::display::{format_summary, render_pie_chart};
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::reports::MonthlySummary;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_month, today};

/// Print the spending summary for a month, with the pie chart if asked
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    chart: bool,
) -> ExpenseResult<()> {
    let today = today();
    let month = parse_month(month.as_deref(), today)?;

    let budget = match BudgetService::new(storage, settings).get(month)? {
        Some(budget) => budget.amount,
        None => {
            println!(
                "No budget set for {}; percentages are shown as 0%.",
                month.friendly()
            );
            Money::zero()
        }
    };

    let summary = MonthlySummary::generate(storage, month, budget, today)?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));

    if chart && !summary.is_empty() {
        print!("{}", render_pie_chart(&summary));
    }

    Ok(())
}
