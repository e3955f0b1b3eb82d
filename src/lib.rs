//! Expense Tracker - monthly expense logging from the terminal
//!
//! This library provides the core functionality of the expense tracker. It
//! keeps one budget and one ledger per calendar month and reports spending
//! by category against the budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, months, expenses)
//! - `storage`: Per-month budget and CSV ledger files
//! - `audit`: Audit logging of budget and expense changes
//! - `services`: Budget resolution and expense recording
//! - `reports`: Monthly spending summary
//! - `display`: Terminal formatting and the text pie chart
//! - `prompt`: Interactive input
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod prompt;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
