//! CLI command handlers
//!
//! One-shot subcommands live in `expense` and `config`, the interactive menu
//! in `shell`.

pub mod config;
pub mod expense;
pub mod shell;

pub use config::handle_config_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use shell::Shell;

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::services::ExpenseService;
use crate::storage::ExpenseRepository;

/// Everything a command needs, resolved once at startup
pub struct CliContext {
    pub paths: ExpensePaths,
    pub settings: Settings,
    pub repository: ExpenseRepository,
    pub audit: Option<AuditLogger>,
}

impl CliContext {
    /// Resolve the expenses file and audit log from paths, settings and an
    /// optional `--file` override
    pub fn new(paths: ExpensePaths, settings: Settings, file_override: Option<PathBuf>) -> Self {
        let repository =
            ExpenseRepository::new(settings.resolve_expenses_file(&paths, file_override));
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            paths,
            settings,
            repository,
            audit,
        }
    }

    /// Expense service wired to this context's store and audit log
    pub fn service(&self) -> ExpenseService<'_, ExpenseRepository> {
        let service = ExpenseService::new(&self.repository);
        match &self.audit {
            Some(logger) => service.with_audit(logger),
            None => service,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let ctx = CliContext::new(paths.clone(), Settings::default(), None);
        assert_eq!(ctx.repository.path(), paths.expenses_file());
        assert!(ctx.audit.is_some());

        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let override_path = temp_dir.path().join("other.txt");
        let ctx = CliContext::new(paths, settings, Some(override_path.clone()));
        assert_eq!(ctx.repository.path(), override_path);
        assert!(ctx.audit.is_none());
    }
}
