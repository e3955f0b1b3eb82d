//! Budget service
//!
//! Resolves the budget for a month: the stored value when there is one,
//! otherwise last month's value (if the user accepts it) or a freshly
//! entered one.

use std::io::{BufRead, Write};

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey, MonthlyBudget};
use crate::prompt::Prompter;
use crate::storage::Storage;

/// Where a resolved budget came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSource {
    /// Already stored for the month
    Stored,
    /// Carried over from the previous month
    Reused,
    /// Typed in by the user
    Entered,
}

/// A budget together with its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBudget {
    pub budget: MonthlyBudget,
    pub source: BudgetSource,
}

/// Service for monthly budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// The stored budget for a month, if any
    pub fn get(&self, month: MonthKey) -> ExpenseResult<Option<MonthlyBudget>> {
        Ok(self
            .storage
            .budgets
            .load(month)?
            .map(|amount| MonthlyBudget::new(month, amount)))
    }

    /// Store a budget for a month, overwriting any previous value
    pub fn set(&self, month: MonthKey, amount: Money) -> ExpenseResult<MonthlyBudget> {
        if amount.is_negative() {
            return Err(ExpenseError::Validation("Budget must be positive.".into()));
        }

        let before = self.get(month)?;
        let budget = MonthlyBudget::new(month, amount);

        self.storage.budgets.save(month, amount)?;

        match before {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                month.to_string(),
                &before,
                &budget,
                Some(format!("budget: {} -> {}", before.amount, amount)),
            )?,
            None => self.storage.log_create(
                EntityType::Budget,
                month.to_string(),
                &budget,
                Some(format!("budget: {}", amount)),
            )?,
        }

        Ok(budget)
    }

    /// Load the month's budget, asking the user for one if none is stored
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        month: MonthKey,
        prompter: &mut Prompter<R, W>,
    ) -> ExpenseResult<ResolvedBudget> {
        if let Some(budget) = self.get(month)? {
            return Ok(ResolvedBudget {
                budget,
                source: BudgetSource::Stored,
            });
        }

        let symbol = &self.settings.currency_symbol;

        if self.settings.reuse_previous_budget {
            if let Some(previous) = self.get(month.prev())? {
                prompter.say(format!("🗓️  {} has begun.", month.friendly()))?;
                prompter.say(format!(
                    "Last month's budget was {}.",
                    previous.amount.format_with_symbol(symbol)
                ))?;

                if prompter.confirm("Continue with the same budget? (y/n): ")? {
                    let budget = self.set(month, previous.amount)?;
                    return Ok(ResolvedBudget {
                        budget,
                        source: BudgetSource::Reused,
                    });
                }
            }
        }

        let amount = prompter.ask_amount(
            &format!("💵 Enter budget for {} ({}): ", month.friendly(), symbol),
            "Budget must be positive.",
        )?;
        let budget = self.set(month, amount)?;

        Ok(ResolvedBudget {
            budget,
            source: BudgetSource::Entered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage, settings)
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn june() -> MonthKey {
        MonthKey::new(2025, 6).unwrap()
    }

    #[test]
    fn test_resolve_prompts_and_persists() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);
        let mut p = prompter("lots\n-10\n1000\n");

        let resolved = service.resolve(june(), &mut p).unwrap();

        assert_eq!(resolved.source, BudgetSource::Entered);
        assert_eq!(resolved.budget.amount, Money::from_cents(100_000));
        assert_eq!(storage.budgets.load(june()).unwrap(), Some(Money::from_cents(100_000)));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Enter budget for June 2025 (₹)"));
        assert!(out.contains("Invalid number. Try again."));
        assert!(out.contains("Budget must be positive."));
    }

    #[test]
    fn test_resolve_returns_stored_value_without_prompting() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);
        service.set(june(), Money::from_cents(50_000)).unwrap();

        let mut p = prompter("");
        let resolved = service.resolve(june(), &mut p).unwrap();

        assert_eq!(resolved.source, BudgetSource::Stored);
        assert_eq!(resolved.budget.amount, Money::from_cents(50_000));
        assert!(p.into_output().is_empty());
    }

    #[test]
    fn test_resolve_offers_previous_month() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);
        service.set(june().prev(), Money::from_cents(75_000)).unwrap();

        let mut p = prompter("y\n");
        let resolved = service.resolve(june(), &mut p).unwrap();

        assert_eq!(resolved.source, BudgetSource::Reused);
        assert_eq!(resolved.budget.amount, Money::from_cents(75_000));
        assert_eq!(storage.budgets.load(june()).unwrap(), Some(Money::from_cents(75_000)));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("June 2025 has begun."));
        assert!(out.contains("Last month's budget was ₹750.00."));
    }

    #[test]
    fn test_declining_previous_month_asks_for_new_value() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);
        service.set(june().prev(), Money::from_cents(75_000)).unwrap();

        let mut p = prompter("n\n900\n");
        let resolved = service.resolve(june(), &mut p).unwrap();

        assert_eq!(resolved.source, BudgetSource::Entered);
        assert_eq!(resolved.budget.amount, Money::from_cents(90_000));
    }

    #[test]
    fn test_reuse_disabled_skips_offer() {
        let (_temp, storage, _) = setup();
        let settings = Settings {
            reuse_previous_budget: false,
            ..Settings::default()
        };
        let service = BudgetService::new(&storage, &settings);
        service.set(june().prev(), Money::from_cents(75_000)).unwrap();

        let mut p = prompter("300\n");
        let resolved = service.resolve(june(), &mut p).unwrap();

        assert_eq!(resolved.budget.amount, Money::from_cents(30_000));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(!out.contains("Last month's budget"));
    }

    #[test]
    fn test_set_overwrites_and_audits() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);

        service.set(june(), Money::from_cents(100_000)).unwrap();
        service.set(june(), Money::from_cents(120_000)).unwrap();

        assert_eq!(
            service.get(june()).unwrap().map(|b| b.amount),
            Some(Money::from_cents(120_000))
        );

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].summary.as_deref(), Some("budget: 1000.00 -> 1200.00"));
    }

    #[test]
    fn test_set_rejects_negative() {
        let (_temp, storage, settings) = setup();
        let service = BudgetService::new(&storage, &settings);

        let err = service.set(june(), Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.budgets.load(june()).unwrap(), None);
    }
}
