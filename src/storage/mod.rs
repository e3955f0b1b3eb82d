//! Storage layer for the expense tracker
//!
//! Flat per-month files: one CSV ledger and one plain-text budget per month,
//! both created lazily on first use. Mutations are mirrored to the audit log.

pub mod budgets;
pub mod file_io;
pub mod ledger;

pub use budgets::BudgetStore;
pub use file_io::{read_text_optional, write_text_atomic};
pub use ledger::{Ledger, LedgerStore};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;

/// Main storage coordinator that provides access to the stores
pub struct Storage {
    pub budgets: BudgetStore,
    pub ledger: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            budgets: BudgetStore::new(paths.clone()),
            ledger: LedgerStore::new(paths),
            audit,
        })
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        month: impl Into<String>,
        entity: &T,
        summary: Option<String>,
    ) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(entity_type, month, entity, summary)),
            None => Ok(()),
        }
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        month: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => {
                logger.log(&AuditEntry::update(entity_type, month, before, after, summary))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths.clone(), &settings).unwrap();

        storage
            .log_create(EntityType::Budget, "2025-06", &1, None)
            .unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
