//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was appended
    Create,
    /// Expense was removed by position
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => f.pad("CREATE"),
            Operation::Delete => f.pad("DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based position of a deleted expense; appends never read the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Description of the expense, for quick scanning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The expense before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for an appended expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position: None,
            entity_name: entity_name(expense),
            before: None,
            after: serde_json::to_value(expense).ok(),
        }
    }

    /// Create a new audit entry for a deleted expense
    pub fn delete(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position: Some(position),
            entity_name: entity_name(expense),
            before: serde_json::to_value(expense).ok(),
            after: None,
        }
    }

    /// One-line summary for terminal output
    pub fn summary_line(&self) -> String {
        let position = self
            .position
            .map(|p| format!("#{}", p))
            .unwrap_or_default();
        format!(
            "{} {:<6} {:<5} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            position,
            self.entity_name.as_deref().unwrap_or("(no description)")
        )
    }
}

fn entity_name(expense: &Expense) -> Option<String> {
    if expense.description.is_empty() {
        None
    } else {
        Some(expense.description.clone())
    }
}
