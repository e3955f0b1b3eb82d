//! Audit history command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit log entries
pub fn handle_history_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
