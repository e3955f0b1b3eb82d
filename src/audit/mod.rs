//! Audit logging for the expense tracker
//!
//! Budget and expense mutations are recorded in an append-only log with the
//! value before and after the change.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity type,
//!   month and optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as JSON lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Expense, "2025-06", &expense, None);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
