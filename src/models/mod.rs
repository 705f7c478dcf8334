//! Core data models for finviz
//!
//! This module contains the data structures of the personal-finance domain:
//! transactions, categories, budgets, periods and the dashboard filter.

pub mod budget;
pub mod category;
pub mod filter;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetKey, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use filter::FilterState;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{month_name, MonthKey, Period, Selection};
pub use transaction::{
    Transaction, TransactionDraft, TransactionKind, TransactionValidationError,
};
