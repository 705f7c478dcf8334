//! Dashboard snapshot
//!
//! Every derived view of one (transactions, budgets, filter) state, built in
//! a single pass. Renderers read only from a snapshot and never from the
//! stores directly.

use crate::models::{Category, FilterState, Transaction};
use crate::storage::Storage;

use super::budget_comparison::BudgetComparison;
use super::filter::filter_transactions;
use super::monthly::MonthlyReport;
use super::spending::CategoryBreakdown;
use super::summary::SummaryTotals;

/// Number of transactions in the recent list by default
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Identifies the inputs a snapshot was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    pub transactions_revision: u64,
    pub budgets_revision: u64,
    pub filter: FilterState,
    pub recent_limit: usize,
}

impl SnapshotKey {
    pub fn new(storage: &Storage, filter: FilterState, recent_limit: usize) -> Self {
        let (transactions_revision, budgets_revision) = storage.revision();
        Self {
            transactions_revision,
            budgets_revision,
            filter,
            recent_limit,
        }
    }
}

/// Immutable bundle of all derived dashboard data
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub filter: FilterState,
    /// Filtered transactions, most recent first
    pub transactions: Vec<Transaction>,
    /// The first few filtered transactions
    pub recent: Vec<Transaction>,
    pub summary: SummaryTotals,
    pub monthly: MonthlyReport,
    pub categories: CategoryBreakdown,
    pub budget_comparison: BudgetComparison,
    /// Years present in the whole store, ascending
    pub available_years: Vec<i32>,
    /// Categories present in the whole store
    pub available_categories: Vec<Category>,
}

impl DashboardSnapshot {
    /// Derive every view from the stores and a filter
    pub fn build(storage: &Storage, filter: FilterState, recent_limit: usize) -> Self {
        let all = storage.transactions.all();
        let transactions = filter_transactions(all, &filter);
        let recent = transactions.iter().take(recent_limit).cloned().collect();

        Self {
            filter,
            recent,
            summary: SummaryTotals::from_transactions(&transactions),
            monthly: MonthlyReport::generate(&transactions),
            categories: CategoryBreakdown::generate(&transactions),
            budget_comparison: BudgetComparison::generate(all, &storage.budgets, &filter),
            available_years: storage.transactions.years(),
            available_categories: storage.transactions.categories(),
            transactions,
        }
    }

    /// Whether the filter left nothing to show
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
