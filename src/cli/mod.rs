//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod history;
pub mod session;
pub mod summary;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_categories_command, handle_list_command, AddArgs};
pub use history::handle_history_command;
pub use session::run_session;
pub use summary::handle_summary_command;

use chrono::{Duration, Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthKey;

/// Parse a month argument, defaulting to the current month
///
/// Accepts "2025-06", "current"/"this" and "last"/"prev".
pub fn parse_month(arg: Option<&str>, today: NaiveDate) -> ExpenseResult<MonthKey> {
    let current = MonthKey::from_date(today);

    match arg.map(|s| s.trim().to_lowercase()) {
        None => Ok(current),
        Some(s) => match s.as_str() {
            "" | "current" | "this" => Ok(current),
            "last" | "prev" | "previous" => Ok(current.prev()),
            _ => s.parse(),
        },
    }
}

/// Parse a date argument, defaulting to today
///
/// Accepts "YYYY-MM-DD", "today" and "yesterday".
pub fn parse_date(arg: Option<&str>, today: NaiveDate) -> ExpenseResult<NaiveDate> {
    match arg.map(|s| s.trim().to_lowercase()) {
        None => Ok(today),
        Some(s) => match s.as_str() {
            "today" => Ok(today),
            "yesterday" => Ok(today - Duration::days(1)),
            _ => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| ExpenseError::invalid_date(s.clone())),
        },
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_parse_month() {
        let june_key = MonthKey::new(2025, 6).unwrap();
        assert_eq!(parse_month(None, june(4)).unwrap(), june_key);
        assert_eq!(parse_month(Some("current"), june(4)).unwrap(), june_key);
        assert_eq!(parse_month(Some("last"), june(4)).unwrap(), june_key.prev());
        assert_eq!(
            parse_month(Some("2024-12"), june(4)).unwrap(),
            MonthKey::new(2024, 12).unwrap()
        );
        assert!(parse_month(Some("someday"), june(4)).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None, june(4)).unwrap(), june(4));
        assert_eq!(parse_date(Some("yesterday"), june(4)).unwrap(), june(3));
        assert_eq!(parse_date(Some("2025-06-01"), june(4)).unwrap(), june(1));

        let err = parse_date(Some("06/01/2025"), june(4)).unwrap_err();
        assert!(err.is_parse());
    }
}
