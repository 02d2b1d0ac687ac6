//! Interactive menu loop
//!
//! Reads choices line by line and dispatches to [`ExpenseService`]. Operation
//! errors are printed and the loop keeps going; end of input exits.

use std::io::{BufRead, Write};

use crate::display::{format_deleted, format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::RecordStore;

const MENU: &str = "\n=== EXPENSE TRACKER ===\n\
1. Add Expense\n\
2. View History\n\
3. Delete Expense\n\
4. Show Summary\n\
5. Exit";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Summary,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection ("1" through "5")
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Summary),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive shell over any input and output
pub struct Shell<'a, S: RecordStore + ?Sized, R, W> {
    service: ExpenseService<'a, S>,
    currency_symbol: &'a str,
    input: R,
    output: W,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(
        service: ExpenseService<'a, S>,
        currency_symbol: &'a str,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            currency_symbol,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose (1-5): ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::View) => self.view()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Summary) => self.summary()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid option.")?,
            }
        }

        Ok(())
    }

    /// Consume the shell and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn add(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n--- Add New Expense ---")?;

        let amount = self.prompt("Enter Amount: ")?.unwrap_or_default();
        if let Err(e) = ExpenseService::<S>::parse_amount(&amount) {
            writeln!(self.output, "{}", e)?;
            return Ok(());
        }

        let category = self.prompt("Enter Category: ")?.unwrap_or_default();
        let description = self.prompt("Description: ")?.unwrap_or_default();

        match self.service.add(&amount, &category, &description) {
            Ok(_) => writeln!(self.output, "Expense saved!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn view(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n--- Your Expenditure History ---")?;
        match self.service.list() {
            Ok(expenses) => writeln!(
                self.output,
                "{}",
                format_expense_table(&expenses, self.currency_symbol)
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n--- Delete an Expense ---")?;

        let expenses = match self.service.list() {
            Ok(expenses) => expenses,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        if expenses.is_empty() {
            writeln!(self.output, "No expenses to delete.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "{}",
            format_expense_table(&expenses, self.currency_symbol)
        )?;

        let id = self
            .prompt("\nEnter the ID of the expense to delete: ")?
            .unwrap_or_default();

        match self.service.delete_by_input(&id) {
            Ok(removed) => writeln!(
                self.output,
                "{}",
                format_deleted(&removed, self.currency_symbol)
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn summary(&mut self) -> ExpenseResult<()> {
        match self.service.summarize() {
            Ok(summary) => {
                writeln!(self.output)?;
                write!(self.output, "{}", format_summary(&summary, self.currency_symbol))?;
                if summary.is_empty() {
                    writeln!(self.output)?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
