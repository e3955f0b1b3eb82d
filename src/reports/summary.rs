//! Monthly spending summary
//!
//! Aggregates a month's ledger by category and relates the totals to the
//! month's budget.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Category, Expense, Money, MonthKey};
use crate::storage::Storage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of ledger entries
    pub count: usize,
    /// Share of the month's budget
    pub percent_of_budget: f64,
    /// Share of everything spent this month
    pub percent_of_spent: f64,
}

/// Summary of a month's spending against its budget
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub budget: Money,
    /// Per-category totals in order of first appearance in the ledger
    pub categories: Vec<CategoryTotal>,
    pub total_spent: Money,
    /// Budget minus total spent; negative when overspent
    pub remaining: Money,
    /// Remaining as a percentage of the budget
    pub remaining_percent: f64,
    /// Days left in the month after the report date
    pub days_left: u32,
    /// Remaining spread over the days left
    pub daily_allowance: Money,
    /// Ledger rows that could not be read
    pub skipped: Vec<String>,
}

impl MonthlySummary {
    /// Build a summary from the month's ledger on disk
    pub fn generate(
        storage: &Storage,
        month: MonthKey,
        budget: Money,
        today: NaiveDate,
    ) -> ExpenseResult<Self> {
        let ledger = storage.ledger.read(month)?;
        let mut summary = Self::from_expenses(month, budget, &ledger.expenses, today);
        summary.skipped = ledger.skipped;
        Ok(summary)
    }

    /// Build a summary from already-loaded expenses
    pub fn from_expenses(
        month: MonthKey,
        budget: Money,
        expenses: &[Expense],
        today: NaiveDate,
    ) -> Self {
        let mut totals: Vec<(Category, Money, usize)> = Vec::new();

        for expense in expenses {
            match totals.iter_mut().find(|(c, _, _)| *c == expense.category) {
                Some((_, total, count)) => {
                    *total += expense.amount;
                    *count += 1;
                }
                None => totals.push((expense.category, expense.amount, 1)),
            }
        }

        let total_spent: Money = totals.iter().map(|(_, total, _)| *total).sum();

        let categories = totals
            .into_iter()
            .map(|(category, total, count)| CategoryTotal {
                category,
                total,
                count,
                percent_of_budget: total.percent_of(budget),
                percent_of_spent: total.percent_of(total_spent),
            })
            .collect();

        let remaining = budget - total_spent;
        let days_left = month.days_left_after(today);

        Self {
            month,
            budget,
            categories,
            total_spent,
            remaining,
            remaining_percent: remaining.percent_of(budget),
            days_left,
            daily_allowance: remaining.per(days_left),
            skipped: Vec::new(),
        }
    }

    /// True when nothing has been recorded for the month
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Total for a single category, zero if nothing was spent on it
    pub fn total_for(&self, category: Category) -> Money {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{paths::ExpensePaths, settings::Settings};
    use tempfile::TempDir;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn month() -> MonthKey {
        MonthKey::new(2025, 6).unwrap()
    }

    fn expense(category: Category, units: i64) -> Expense {
        Expense::new(june(1), category, Money::from_units_cents(units, 0))
    }

    #[test]
    fn test_budget_example() {
        let expenses = vec![
            expense(Category::Food, 200),
            expense(Category::Transport, 100),
            expense(Category::Food, 50),
        ];
        let summary =
            MonthlySummary::from_expenses(month(), Money::from_cents(100_000), &expenses, june(10));

        assert_eq!(summary.categories.len(), 2);

        let food = &summary.categories[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.total, Money::from_cents(25_000));
        assert_eq!(food.count, 2);
        assert_eq!(food.percent_of_budget, 25.0);

        let transport = &summary.categories[1];
        assert_eq!(transport.total, Money::from_cents(10_000));
        assert_eq!(transport.percent_of_budget, 10.0);

        assert_eq!(summary.total_spent, Money::from_cents(35_000));
        assert_eq!(summary.remaining, Money::from_cents(65_000));
        assert_eq!(summary.remaining_percent, 65.0);
    }

    #[test]
    fn test_category_totals_sum_to_entries() {
        let expenses: Vec<Expense> = [
            (Category::Food, 1234),
            (Category::Home, 1),
            (Category::Travel, 999),
            (Category::Food, 7),
            (Category::Home, 250),
            (Category::Work, 0),
        ]
        .into_iter()
        .map(|(category, cents)| Expense::new(june(2), category, Money::from_cents(cents)))
        .collect();

        let summary =
            MonthlySummary::from_expenses(month(), Money::from_cents(500), &expenses, june(2));

        let by_category: Money = summary.categories.iter().map(|c| c.total).sum();
        let entered: Money = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(by_category, entered);
        assert_eq!(summary.total_spent, entered);

        let shares: f64 = summary.categories.iter().map(|c| c.percent_of_spent).sum();
        assert!((shares - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let expenses = vec![expense(Category::Shopping, 1500)];
        let summary =
            MonthlySummary::from_expenses(month(), Money::from_cents(100_000), &expenses, june(10));

        assert_eq!(summary.remaining, Money::from_cents(-50_000));
        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining_percent, -50.0);
    }

    #[test]
    fn test_largest_amounts_do_not_overflow() {
        let largest = Money::parse("999999999999.99").unwrap();
        let expenses: Vec<Expense> = (0..1000)
            .map(|i| Expense::new(june(1), Category::ALL[i % 12], largest))
            .collect();

        let summary = MonthlySummary::from_expenses(month(), largest, &expenses, june(10));

        assert_eq!(summary.total_spent.cents(), largest.cents() * 1000);
        assert_eq!(summary.remaining.cents(), -largest.cents() * 999);
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_zero_budget_has_zero_percentages() {
        let expenses = vec![expense(Category::Food, 10)];
        let summary = MonthlySummary::from_expenses(month(), Money::zero(), &expenses, june(10));

        assert_eq!(summary.categories[0].percent_of_budget, 0.0);
        assert_eq!(summary.categories[0].percent_of_spent, 100.0);
        assert_eq!(summary.remaining_percent, 0.0);
    }

    #[test]
    fn test_daily_allowance() {
        let summary =
            MonthlySummary::from_expenses(month(), Money::from_cents(100_000), &[], june(10));
        assert_eq!(summary.days_left, 20);
        assert_eq!(summary.daily_allowance, Money::from_cents(5_000));

        let last_day =
            MonthlySummary::from_expenses(month(), Money::from_cents(100_000), &[], june(30));
        assert_eq!(last_day.days_left, 0);
        assert_eq!(last_day.daily_allowance, Money::zero());
    }

    #[test]
    fn test_generate_reads_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        storage.ledger.append(&expense(Category::Health, 40)).unwrap();
        storage.ledger.append(&expense(Category::Health, 60)).unwrap();

        let summary =
            MonthlySummary::generate(&storage, month(), Money::from_cents(20_000), june(15))
                .unwrap();

        assert!(!summary.is_empty());
        assert_eq!(summary.total_for(Category::Health), Money::from_cents(10_000));
        assert_eq!(summary.total_for(Category::Food), Money::zero());
        assert_eq!(summary.remaining, Money::from_cents(10_000));
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn test_generate_on_missing_ledger_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        let summary =
            MonthlySummary::generate(&storage, month(), Money::from_cents(20_000), june(15))
                .unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.remaining, Money::from_cents(20_000));
    }
}
