//! expense-cli - single-user command-line expense tracker
//!
//! Records dated expenses to a flat `date|category|amount|description` text
//! file, lists them, deletes by position and totals them by category.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money and the expense record with its line format
//! - `storage`: The `RecordStore` trait and its file and in-memory backends
//! - `services`: Add, list, delete and summarize
//! - `reports`: Spending aggregation
//! - `audit`: Append-only audit log of adds and deletes
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::services::ExpenseService;
//! use expense_cli::storage::ExpenseRepository;
//!
//! let repo = ExpenseRepository::new("expenses.txt".into());
//! let service = ExpenseService::new(&repo);
//! service.add("12.50", "food", "Lunch")?;
//! let summary = service.summarize()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
