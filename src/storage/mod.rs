//! Storage layer for the expense tracker
//!
//! The expenses file is the only source of truth. Every operation reads a fresh
//! snapshot through [`RecordStore::load`]; nothing is cached between calls.

pub mod expenses;
pub mod file_io;
pub mod memory;

pub use expenses::ExpenseRepository;
pub use file_io::{append_line, read_lines, write_lines_atomic};
pub use memory::MemoryStore;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Backing store for expense records
pub trait RecordStore {
    /// Read every well-formed record, in file order
    fn load(&self) -> ExpenseResult<Vec<Expense>>;

    /// Replace the full set of records
    fn save(&self, records: &[Expense]) -> ExpenseResult<()>;

    /// Add one record after the existing ones
    fn append(&self, record: &Expense) -> ExpenseResult<()>;
}
