//! Expense CLI commands
//!
//! One-shot versions of the menu operations plus audit history.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::display::{format_deleted, format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::DATE_FORMAT;

use super::CliContext;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List all expenses with their IDs
    #[command(alias = "view")]
    List,
    /// Delete an expense by the ID shown in `list`
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Show totals by category
    Summary,
    /// Show recent adds and deletes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CliContext, cmd: ExpenseCommands) -> ExpenseResult<()> {
    let service = ctx.service();
    let symbol = ctx.currency_symbol();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let expense = match date {
                Some(date) => {
                    let date = parse_date(&date)?;
                    service.add_on(date, &amount, &category, &description)?
                }
                None => service.add(&amount, &category, &description)?,
            };
            println!(
                "Expense saved: {} {} {}",
                expense.date.format(DATE_FORMAT),
                expense.category,
                expense.amount.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_table(&expenses, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete_by_input(&id)?;
            println!("{}", format_deleted(&removed, symbol));
        }

        ExpenseCommands::Summary => {
            let summary = service.summarize()?;
            print!("{}", format_summary(&summary, symbol));
            if summary.is_empty() {
                println!();
            }
        }

        ExpenseCommands::History { limit } => {
            // Read even when auditing is switched off, so old history stays visible
            let logger = AuditLogger::new(ctx.paths.audit_log());
            let entries = logger.read_recent(limit)?;

            if entries.is_empty() {
                println!("No audit history.");
                return Ok(());
            }

            for entry in &entries {
                println!("{}", entry.summary_line());
            }
        }
    }

    Ok(())
}

fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::storage::RecordStore;
    use tempfile::TempDir;

    fn create_test_context() -> (TempDir, CliContext) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = CliContext::new(paths, Settings::default(), None);
        (temp_dir, ctx)
    }

    #[test]
    fn test_add_with_date() {
        let (_temp_dir, ctx) = create_test_context();

        handle_expense_command(
            &ctx,
            ExpenseCommands::Add {
                amount: "7.25".into(),
                category: "books".into(),
                description: "Paperback".into(),
                date: Some("2023-12-24".into()),
            },
        )
        .unwrap();

        let stored = ctx.repository.load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].date, NaiveDate::from_ymd_opt(2023, 12, 24).unwrap());
        assert_eq!(stored[0].category, "Books");
    }

    #[test]
    fn test_add_with_bad_date() {
        let (_temp_dir, ctx) = create_test_context();

        let result = handle_expense_command(
            &ctx,
            ExpenseCommands::Add {
                amount: "1".into(),
                category: "x".into(),
                description: String::new(),
                date: Some("24/12/2023".into()),
            },
        );

        assert!(matches!(result, Err(ExpenseError::Validation(_))));
        assert!(!ctx.repository.path().exists());
    }

    #[test]
    fn test_delete_invalid_id() {
        let (_temp_dir, ctx) = create_test_context();

        let result = handle_expense_command(&ctx, ExpenseCommands::Delete { id: "1".into() });
        assert!(matches!(
            result,
            Err(ExpenseError::InvalidPosition { position: 1, count: 0 })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
    }
}
