//! Monthly totals
//!
//! Groups transactions by calendar month and keeps the most recent months
//! for the monthly chart.

use std::collections::BTreeMap;

use crate::models::{Money, MonthKey, Transaction};

/// Number of months shown by the monthly chart
pub const MONTHLY_WINDOW: usize = 6;

/// Income and expenses of one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: MonthKey,
    /// Short label, e.g. "Jan 2024"
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyTotals {
    fn new(month: MonthKey) -> Self {
        Self {
            month,
            label: month.label(),
            income: Money::zero(),
            expenses: Money::zero(),
        }
    }

    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// The monthly chart series
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyReport {
    /// Ascending by month, at most [`MONTHLY_WINDOW`] entries
    pub months: Vec<MonthlyTotals>,
    /// Income across the shown months
    pub total_income: Money,
    /// Expenses across the shown months
    pub total_expenses: Money,
}

impl MonthlyReport {
    /// Aggregate transactions into the last [`MONTHLY_WINDOW`] months present
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self::generate_with_window(transactions, MONTHLY_WINDOW)
    }

    /// Aggregate keeping at most `window` of the latest months
    pub fn generate_with_window(transactions: &[Transaction], window: usize) -> Self {
        let mut by_month: BTreeMap<MonthKey, MonthlyTotals> = BTreeMap::new();

        for txn in transactions {
            let key = txn.month_key();
            let entry = by_month
                .entry(key)
                .or_insert_with(|| MonthlyTotals::new(key));
            if txn.is_income() {
                entry.income += txn.amount;
            } else {
                entry.expenses += txn.amount;
            }
        }

        let skip = by_month.len().saturating_sub(window);
        let months: Vec<MonthlyTotals> = by_month.into_values().skip(skip).collect();
        let total_income = months.iter().map(|m| m.income).sum();
        let total_expenses = months.iter().map(|m| m.expenses).sum();

        Self {
            months,
            total_income,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Largest single income or expense bar, for chart scaling
    pub fn max_value(&self) -> Money {
        self.months
            .iter()
            .flat_map(|m| [m.income, m.expenses])
            .max()
            .unwrap_or_default()
    }
}
