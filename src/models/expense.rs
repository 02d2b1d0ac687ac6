//! Expense model
//!
//! One dated expense entry and its single-line storage form
//! `date|category|amount|description`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Field separator in the expenses file
pub const DELIMITER: char = '|';

/// Replaces the delimiter in user-supplied text
pub const DELIMITER_PLACEHOLDER: char = '-';

/// Date format used in the expenses file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the expense was recorded
    pub date: NaiveDate,

    /// Normalized category label
    pub category: String,

    /// Amount spent (positive)
    pub amount: Money,

    /// Free-text description, never containing the delimiter
    pub description: String,
}

impl Expense {
    /// Create a new expense, normalizing category and description
    pub fn new(
        date: NaiveDate,
        category: &str,
        amount: Money,
        description: &str,
    ) -> Self {
        Self {
            date,
            category: Self::normalize_category(category),
            amount,
            description: Self::sanitize_description(description),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Normalize a category label: trimmed, first letter uppercase, rest lowercase
    ///
    /// "food", "FOOD" and " Food " all become "Food".
    pub fn normalize_category(category: &str) -> String {
        let cleaned = Self::sanitize_description(category);
        let mut chars = cleaned.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Trim text, replace every delimiter with the placeholder and fold line
    /// breaks into spaces so the record stays on one line
    pub fn sanitize_description(text: &str) -> String {
        text.trim()
            .chars()
            .map(|c| match c {
                DELIMITER => DELIMITER_PLACEHOLDER,
                '\n' | '\r' => ' ',
                other => other,
            })
            .collect()
    }

    /// Serialize to one line of the expenses file (without the newline)
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount.to_decimal_string(),
            self.description,
            d = DELIMITER,
        )
    }

    /// Parse one line of the expenses file
    ///
    /// Returns `Ok(None)` for lines that don't have exactly four fields; those
    /// are dropped by the loader. A four-field line whose date or amount can't
    /// be parsed is a `CorruptRecord` error carrying `line_number`.
    pub fn from_line(line: &str, line_number: usize) -> ExpenseResult<Option<Self>> {
        let parts: Vec<&str> = line.trim().split(DELIMITER).collect();
        if parts.len() != 4 {
            return Ok(None);
        }

        let date = NaiveDate::parse_from_str(parts[0].trim(), DATE_FORMAT).map_err(|_| {
            ExpenseError::CorruptRecord {
                line: line_number,
                reason: format!("invalid date '{}'", parts[0]),
            }
        })?;

        let amount = Money::parse(parts[2]).map_err(|_| ExpenseError::CorruptRecord {
            line: line_number,
            reason: format!("invalid amount '{}'", parts[2]),
        })?;

        Ok(Some(Self {
            date,
            category: parts[1].to_string(),
            amount,
            description: parts[3].to_string(),
        }))
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_new_normalizes_fields() {
        let expense = Expense::new(
            date("2024-03-05"),
            "  gROCERIES ",
            Money::from_cents(1299),
            "  milk | eggs  ",
        );

        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.description, "milk - eggs");
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(Expense::normalize_category("food"), "Food");
        assert_eq!(Expense::normalize_category("FOOD"), "Food");
        assert_eq!(Expense::normalize_category("dining out"), "Dining out");
        assert_eq!(Expense::normalize_category("a|b"), "A-b");
        assert_eq!(Expense::normalize_category("   "), "");
        assert_eq!(Expense::normalize_category("éclair"), "Éclair");
    }

    #[test]
    fn test_sanitize_line_breaks() {
        assert_eq!(Expense::sanitize_description("line one\nline two"), "line one line two");
        assert_eq!(Expense::sanitize_description("a\r\nb|c"), "a  b-c");
        assert_eq!(Expense::normalize_category("home\noffice"), "Home office");

        let expense = Expense::new(
            date("2024-01-15"),
            "food",
            Money::from_cents(500),
            "tea\n2024-01-01|Fake|999.00|extra",
        );
        let line = expense.to_line();
        assert!(!line.contains('\n'));
        assert_eq!(Expense::from_line(&line, 1).unwrap(), Some(expense));
    }

    #[test]
    fn test_to_line() {
        let expense = Expense::new(date("2024-01-15"), "food", Money::from_cents(1050), "Lunch");
        assert_eq!(expense.to_line(), "2024-01-15|Food|10.50|Lunch");
    }

    #[test]
    fn test_from_line() {
        let expense = Expense::from_line("2024-01-15|Food|10.50|Lunch\n", 1)
            .unwrap()
            .unwrap();

        assert_eq!(expense.date, date("2024-01-15"));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, Money::from_cents(1050));
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_from_line_accepts_float_amounts() {
        let expense = Expense::from_line("2024-01-15|Food|12.0|Pizza", 1)
            .unwrap()
            .unwrap();
        assert_eq!(expense.amount, Money::from_cents(1200));
    }

    #[test]
    fn test_from_line_empty_description() {
        let expense = Expense::from_line("2024-01-15|Food|3.00|", 1).unwrap().unwrap();
        assert_eq!(expense.description, "");
    }

    #[test]
    fn test_wrong_field_count_is_skipped() {
        assert!(Expense::from_line("2024-01-01|Food|10.00", 1).unwrap().is_none());
        assert!(Expense::from_line("2024-01-01|Food|10.00|a|b", 1).unwrap().is_none());
        assert!(Expense::from_line("", 1).unwrap().is_none());
    }

    #[test]
    fn test_bad_amount_is_corrupt() {
        let err = Expense::from_line("2024-01-01|Food|ten|Lunch", 3).unwrap_err();
        assert!(matches!(err, ExpenseError::CorruptRecord { line: 3, .. }));
    }

    #[test]
    fn test_bad_date_is_corrupt() {
        let err = Expense::from_line("yesterday|Food|10.00|Lunch", 2).unwrap_err();
        assert!(matches!(err, ExpenseError::CorruptRecord { line: 2, .. }));
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(date("2024-01-01"), "Food", Money::from_cents(1), "");
        assert!(expense.validate().is_ok());

        expense.amount = Money::zero();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
    }
}
