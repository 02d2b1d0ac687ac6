//! Expense service
//!
//! Business logic for adding, listing, deleting and summarizing expenses.
//! Every call works on a fresh snapshot from the store; positions handed to
//! [`ExpenseService::delete`] are only meaningful against the listing the
//! caller showed immediately before.

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::reports::SpendingSummary;
use crate::storage::RecordStore;

/// Largest amount accepted for a single expense ($1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Service for expense management
pub struct ExpenseService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    audit: Option<&'a AuditLogger>,
}

impl<'a, S: RecordStore + ?Sized> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self { store, audit: None }
    }

    /// Record adds and deletes in the given audit log
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Parse user input as a strictly positive amount
    pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
        let amount = Money::parse(input)
            .map_err(|_| ExpenseError::validation("Please enter a valid number"))?;

        if !amount.is_positive() {
            return Err(ExpenseError::validation("Amount must be positive"));
        }

        if amount > MAX_AMOUNT {
            return Err(ExpenseError::validation(format!(
                "Amount must not exceed {}",
                MAX_AMOUNT
            )));
        }

        Ok(amount)
    }

    /// Add an expense dated today
    pub fn add(&self, amount: &str, category: &str, description: &str) -> ExpenseResult<Expense> {
        self.add_on(Local::now().date_naive(), amount, category, description)
    }

    /// Add an expense with an explicit date
    ///
    /// Appends a single line; existing records are never read or rewritten.
    pub fn add_on(
        &self,
        date: NaiveDate,
        amount: &str,
        category: &str,
        description: &str,
    ) -> ExpenseResult<Expense> {
        let amount = Self::parse_amount(amount)?;
        let expense = Expense::new(date, category, amount, description);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.store.append(&expense)?;
        info!("Added {} expense of {}", expense.category, expense.amount);

        self.record(AuditEntry::create(&expense));

        Ok(expense)
    }

    /// List all expenses in stored order; position N is index N-1
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }

    /// Parse user input as a listing position
    pub fn parse_position(input: &str) -> ExpenseResult<i64> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| ExpenseError::validation("Please enter a valid integer ID"))
    }

    /// Delete the expense at a 1-based position and return it
    pub fn delete(&self, position: usize) -> ExpenseResult<Expense> {
        self.delete_at(position as i128)
    }

    /// Delete using raw user input for the position
    pub fn delete_by_input(&self, input: &str) -> ExpenseResult<Expense> {
        let position = Self::parse_position(input)?;
        self.delete_at(i128::from(position))
    }

    fn delete_at(&self, position: i128) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;
        let count = expenses.len();

        let index = usize::try_from(position)
            .ok()
            .filter(|p| (1..=count).contains(p))
            .map(|p| p - 1)
            .ok_or(ExpenseError::InvalidPosition { position, count })?;

        let removed = expenses.remove(index);
        self.store.save(&expenses)?;
        info!("Deleted expense #{} ({})", position, removed.description);

        self.record(AuditEntry::delete(index + 1, &removed));

        Ok(removed)
    }

    /// Summarize all expenses
    pub fn summarize(&self) -> ExpenseResult<SpendingSummary> {
        let expenses = self.store.load()?;
        SpendingSummary::from_expenses(&expenses)
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            // The expenses file is already updated; a missing audit line isn't fatal
            if let Err(e) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", e);
            }
        }
    }
}
