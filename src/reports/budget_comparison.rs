//! Budget vs. actual spending
//!
//! Pairs each category's budget for the filter period with what was actually
//! spent in that period. Spending is measured over the month/year selection
//! only; the category selector narrows which rows are shown.

use crate::models::{Category, FilterState, Money, Period, Transaction};
use crate::storage::BudgetStore;

/// A row of the budget comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetComparisonRow {
    pub category: Category,
    /// Budget limit for the period, zero if none was set
    pub budget: Money,
    /// Expenses in the period
    pub spent: Money,
}

impl BudgetComparisonRow {
    /// Budget left over (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Spent as a fraction of budget, `None` when no budget was set
    pub fn utilization(&self) -> Option<f64> {
        self.spent.ratio_of(self.budget)
    }
}

/// The budget comparison chart series
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetComparison {
    pub period: Period,
    /// Rows in category order
    pub rows: Vec<BudgetComparisonRow>,
}

impl BudgetComparison {
    pub fn generate(
        transactions: &[Transaction],
        budgets: &BudgetStore,
        filter: &FilterState,
    ) -> Self {
        let period = filter.period();
        let rows = Category::ALL
            .iter()
            .copied()
            .filter(|category| filter.category.matches(*category))
            .filter_map(|category| {
                let budget = budgets.limit_for(category, &period).unwrap_or_default();
                let spent: Money = transactions
                    .iter()
                    .filter(|t| t.is_expense() && t.category == category && period.contains(t.date))
                    .map(|t| t.amount)
                    .sum();

                if budget.is_zero() && spent.is_zero() {
                    None
                } else {
                    Some(BudgetComparisonRow {
                        category,
                        budget,
                        spent,
                    })
                }
            })
            .collect();

        Self { period, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_budget(&self) -> Money {
        self.rows.iter().map(|r| r.budget).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.rows.iter().map(|r| r.spent).sum()
    }

    /// Rows where spending exceeded the budget
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetComparisonRow> {
        self.rows.iter().filter(|r| r.is_over_budget())
    }

    /// Largest budget or spent value, for chart scaling
    pub fn max_value(&self) -> Money {
        self.rows
            .iter()
            .flat_map(|r| [r.budget, r.spent])
            .max()
            .unwrap_or_default()
    }
}
