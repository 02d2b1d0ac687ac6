//! Expense repository for the flat text file
//!
//! Manages loading and saving expenses to `expenses.txt`, one
//! `date|category|amount|description` line per record.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{append_line, read_lines, write_lines_atomic};
use super::RecordStore;

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for ExpenseRepository {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let lines = read_lines(&self.path)?;
        let mut expenses = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            match Expense::from_line(line, index + 1)? {
                Some(expense) => expenses.push(expense),
                None => debug!("Skipping malformed line {} in {}", index + 1, self.path.display()),
            }
        }

        debug!("Loaded {} expenses from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    fn save(&self, records: &[Expense]) -> ExpenseResult<()> {
        debug!("Rewriting {} with {} expenses", self.path.display(), records.len());
        write_lines_atomic(&self.path, records.iter().map(Expense::to_line))
    }

    fn append(&self, record: &Expense) -> ExpenseResult<()> {
        debug!("Appending expense to {}", self.path.display());
        append_line(&self.path, &record.to_line())
    }
}
