use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_config_command, handle_expense_command, CliContext, ExpenseCommands, Shell,
};
use expense_cli::config::{ExpensePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Command-line expense tracker",
    long_about = "Records dated expenses to a plain text file, lists them, deletes \
                  them by ID and totals spending by category. Run without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Expenses file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_CLI_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "menu")]
    Shell,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config {
        /// Set the currency symbol used when displaying amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings, cli.file);

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut shell = Shell::new(
                ctx.service(),
                ctx.currency_symbol(),
                stdin.lock(),
                io::stdout(),
            );
            shell.run()?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&ctx, cmd)?;
        }
        Some(Commands::Config { currency }) => {
            handle_config_command(&ctx, currency)?;
        }
    }

    Ok(())
}
