//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_deleted, format_expense_table, format_summary};
