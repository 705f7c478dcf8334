//! Reports module for finviz
//!
//! The derivation pipeline: pure functions from transactions, budgets and a
//! filter to the filtered list, summary totals and chart-ready series.

pub mod budget_comparison;
pub mod filter;
pub mod monthly;
pub mod snapshot;
pub mod spending;
pub mod summary;

pub use budget_comparison::{BudgetComparison, BudgetComparisonRow};
pub use filter::filter_transactions;
pub use monthly::{MonthlyReport, MonthlyTotals, MONTHLY_WINDOW};
pub use snapshot::{DashboardSnapshot, SnapshotKey, DEFAULT_RECENT_LIMIT};
pub use spending::{CategoryBreakdown, CategorySpending};
pub use summary::SummaryTotals;
