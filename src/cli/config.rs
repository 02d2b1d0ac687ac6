//! `config` command: show resolved paths and settings, or update them

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};

use super::CliContext;

/// Handle the config command
///
/// With `currency` set, the new symbol is written to the settings file and
/// nothing else is printed.
pub fn handle_config_command(ctx: &CliContext, currency: Option<String>) -> ExpenseResult<()> {
    if let Some(symbol) = currency {
        let settings = set_currency(ctx, &symbol)?;
        println!(
            "Currency symbol set to '{}' in {}",
            settings.currency_symbol,
            ctx.paths.settings_file().display()
        );
        return Ok(());
    }

    let audit = AuditLogger::new(ctx.paths.audit_log());

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", ctx.paths.base_dir().display());
    println!("Settings file:  {}", ctx.paths.settings_file().display());
    println!("Expenses file:  {}", ctx.repository.path().display());
    println!(
        "Audit log:      {} ({} entries)",
        audit.path().display(),
        audit.entry_count()?
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", ctx.settings.currency_symbol);
    println!("  Audit enabled:   {}", ctx.settings.audit_enabled);

    Ok(())
}

/// Persist a new currency symbol and return the saved settings
pub fn set_currency(ctx: &CliContext, symbol: &str) -> ExpenseResult<Settings> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ExpenseError::validation("Currency symbol cannot be empty"));
    }

    let settings = Settings {
        currency_symbol: symbol.to_string(),
        ..ctx.settings.clone()
    };
    settings.save(&ctx.paths)?;

    Ok(settings)
}
