//! Spending summary
//!
//! Grand total plus per-category totals, with categories in the order they
//! first appear in the snapshot.

use std::collections::HashMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label as stored
    pub category: String,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
}

/// Spending summary over a snapshot of expenses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpendingSummary {
    /// Sum of every amount
    pub grand_total: Money,
    /// Per-category totals in first-encountered order
    pub categories: Vec<CategoryTotal>,
    /// Number of expenses summarized
    pub expense_count: usize,
}

impl SpendingSummary {
    /// Aggregate a snapshot of expenses
    ///
    /// Fails when a total no longer fits in a `Money`.
    pub fn from_expenses(expenses: &[Expense]) -> ExpenseResult<Self> {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut grand_total = Money::zero();

        for expense in expenses {
            grand_total = add_amounts(grand_total, expense.amount)?;

            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Money::zero(),
                    count: 0,
                });
                categories.len() - 1
            });

            let entry = &mut categories[slot];
            entry.total = add_amounts(entry.total, expense.amount)?;
            entry.count += 1;
        }

        Ok(Self {
            grand_total,
            categories,
            expense_count: expenses.len(),
        })
    }

    /// True when there was nothing to summarize
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Look up the total for a category
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

fn add_amounts(total: Money, amount: Money) -> ExpenseResult<Money> {
    total.checked_add(amount).ok_or_else(|| {
        ExpenseError::Storage("Stored amounts add up to more than can be totaled".into())
    })
}
