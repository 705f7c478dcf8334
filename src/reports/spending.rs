//! Spending by category
//!
//! Breaks expenses down by category for the category chart. Income is
//! ignored entirely.

use std::collections::HashMap;

use crate::models::{Category, Money, Transaction};

/// Expenses of one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    /// Total spent (positive)
    pub total: Money,
    /// Number of expense transactions
    pub count: usize,
    /// Percentage of all expenses, `None` when there were no expenses
    pub percentage: Option<f64>,
}

/// The category chart series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    /// Largest total first; ties in category order
    pub categories: Vec<CategorySpending>,
    /// Sum of every expense in the breakdown
    pub total: Money,
}

impl CategoryBreakdown {
    /// Aggregate the expense transactions by category
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let entry = by_category
                .entry(txn.category)
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total += txn.amount;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (spent, count))| CategorySpending {
                category,
                total: spent,
                count,
                percentage: spent.ratio_of(total).map(|r| r * 100.0),
            })
            .collect();

        // Most spending first
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self { categories, total }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<&CategorySpending> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Top `limit` categories by spending
    pub fn top(&self, limit: usize) -> &[CategorySpending] {
        &self.categories[..limit.min(self.categories.len())]
    }
}
