//! Transaction filtering

use crate::models::{FilterState, Transaction};

/// Transactions passing every selector of `filter`, in their original order
pub fn filter_transactions(transactions: &[Transaction], filter: &FilterState) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}
