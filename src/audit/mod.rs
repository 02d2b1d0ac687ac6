//! Audit logging for the expense tracker
//!
//! Records every add and delete with a snapshot of the affected expense in an
//! append-only JSONL file.
//!
//! - `AuditEntry`: timestamp, operation, position and the expense snapshot.
//! - `AuditLogger`: appends entries and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&expense))?;
//! logger.log(&AuditEntry::delete(2, &removed))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
