//! Storage layer for finviz
//!
//! Session-scoped, in-memory stores. Nothing here touches the disk: the
//! ledger starts empty (or seeded with demo data) and is gone on exit.

pub mod budgets;
pub mod transactions;

pub use budgets::BudgetStore;
pub use transactions::TransactionStore;

/// Coordinator that owns both stores
#[derive(Debug, Clone, Default)]
pub struct Storage {
    pub transactions: TransactionStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined revision of both stores, used as a cache key
    pub fn revision(&self) -> (u64, u64) {
        (self.transactions.revision(), self.budgets.revision())
    }

    /// Check if the session has recorded anything yet
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}
