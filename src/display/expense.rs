//! Expense display formatting
//!
//! Formats expense listings and spending summaries for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::SpendingSummary;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table with 1-based IDs
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No records found.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        id: i + 1,
        date: e.date.format("%Y-%m-%d").to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency_symbol),
        description: e.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the grand total and per-category breakdown
pub fn format_summary(summary: &SpendingSummary, currency_symbol: &str) -> String {
    if summary.is_empty() {
        return "No data to summarize.".to_string();
    }

    let mut output = String::new();
    output.push_str("--- Financial Summary ---\n");
    output.push_str(&format!(
        "Grand Total: {}\n",
        summary.grand_total.format_with_symbol(currency_symbol)
    ));
    output.push_str("\n--- Breakdown by Category ---\n");

    for category in &summary.categories {
        output.push_str(&format!(
            "{:<15}: {}\n",
            category.category,
            category.total.format_with_symbol(currency_symbol)
        ));
    }

    output
}

/// Confirmation line after a delete
pub fn format_deleted(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "Deleted: {} ({})",
        expense.description,
        expense.amount.format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expenses() -> Vec<Expense> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        vec![
            Expense::new(day, "Food", Money::from_cents(1000), "Groceries"),
            Expense::new(day, "Food", Money::from_cents(500), "Snack"),
            Expense::new(day, "Transport", Money::from_cents(300), "Bus"),
        ]
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No records found.");
    }

    #[test]
    fn test_table_contents() {
        let table = format_expense_table(&expenses(), "$");
        let lines: Vec<_> = table.lines().collect();

        assert!(lines[0].contains("ID"));
        assert!(lines[0].contains("Description"));
        assert!(table.contains("$10.00"));
        assert!(table.contains("$3.00"));
        assert!(table.contains("2024-01-15"));
        // Header, separator and one line per row
        assert_eq!(lines.len(), 5);
        assert!(lines[4].contains("Bus"));
        assert!(lines[4].trim_start().starts_with('3'));
    }

    #[test]
    fn test_table_uses_currency_symbol() {
        let table = format_expense_table(&expenses(), "€");
        assert!(table.contains("€5.00"));
    }

    #[test]
    fn test_summary_output() {
        let summary = SpendingSummary::from_expenses(&expenses()).unwrap();
        let output = format_summary(&summary, "$");

        assert!(output.contains("Grand Total: $18.00"));
        assert!(output.contains("Food           : $15.00"));
        assert!(output.contains("Transport      : $3.00"));
        assert!(output.find("Food").unwrap() < output.find("Transport").unwrap());
    }

    #[test]
    fn test_empty_summary() {
        let summary = SpendingSummary::from_expenses(&[]).unwrap();
        assert_eq!(format_summary(&summary, "$"), "No data to summarize.");
    }

    #[test]
    fn test_deleted_line() {
        let e = &expenses()[1];
        assert_eq!(format_deleted(e, "$"), "Deleted: Snack ($5.00)");
    }
}
