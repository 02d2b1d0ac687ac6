//! In-memory record store
//!
//! Same contract as the file repository without touching disk.

use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::RecordStore;

/// Record store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Expense>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    pub fn with_records(records: Vec<Expense>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let records = self.records.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.clone())
    }

    fn save(&self, records: &[Expense]) -> ExpenseResult<()> {
        let mut data = self.records.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = records.to_vec();
        Ok(())
    }

    fn append(&self, record: &Expense) -> ExpenseResult<()> {
        let mut data = self.records.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(record.clone());
        Ok(())
    }
}
