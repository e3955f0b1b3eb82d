//! Monthly summary formatting

use crate::reports::MonthlySummary;

use super::report::{format_money_colored, format_percentage, green, separator};

/// Message shown when a month has no recorded expenses
pub const NO_EXPENSES: &str = "📂  No expenses recorded yet.";

/// Format the spending summary as printed at the end of a session
pub fn format_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    for line in &summary.skipped {
        output.push_str(&format!("Skipping malformed line: {}\n", line));
    }

    if summary.is_empty() {
        output.push_str(NO_EXPENSES);
        output.push('\n');
        return output;
    }

    output.push_str(&format!(
        "\n🧾  Expense Summary for {} - % of Budget\n",
        summary.month.friendly()
    ));
    output.push_str(&separator(44));
    output.push('\n');

    for total in &summary.categories {
        output.push_str(&format!(
            "  {} {:<14} {:>12}  ({})\n",
            total.category.emoji(),
            total.category.name(),
            total.total.format_with_symbol(symbol),
            format_percentage(total.percent_of_budget, 5)
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Budget:           {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total spent:      {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budget remaining: {}\n",
        format_money_colored(summary.remaining, symbol)
    ));
    output.push_str(&green(&format!(
        "Daily budget left: {}",
        summary.daily_allowance.format_with_symbol(symbol)
    )));
    output.push('\n');

    output
}
