//! In-memory transaction store
//!
//! Holds the session's transactions, most recent first. Every successful
//! mutation bumps the revision so derived views can tell when to rebuild.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Category, Transaction, TransactionDraft, TransactionId};

/// Ordered collection of transactions for one session
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    revision: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction at the front of the list
    pub fn add(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = Transaction::from_draft(draft);
        self.transactions.insert(0, txn.clone());
        self.revision += 1;
        txn
    }

    /// Replace the fields of an existing transaction in place
    ///
    /// Returns `None` without touching the store if the id is unknown.
    pub fn update(&mut self, id: TransactionId, draft: TransactionDraft) -> Option<Transaction> {
        let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "update skipped: transaction not found");
            return None;
        };
        txn.apply(draft);
        let updated = txn.clone();
        self.revision += 1;
        Some(updated)
    }

    /// Remove a transaction, returning it if it existed
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            debug!(%id, "remove skipped: transaction not found");
            return None;
        };
        self.revision += 1;
        Some(self.transactions.remove(index))
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions, most recent first
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct years present, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.transactions.iter().map(|t| t.year()).collect();
        years.into_iter().collect()
    }

    /// Distinct categories present, in category order
    pub fn categories(&self) -> Vec<Category> {
        let categories: BTreeSet<Category> =
            self.transactions.iter().map(|t| t.category).collect();
        categories.into_iter().collect()
    }

    /// Counter bumped on every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn draft(desc: &str, y: i32, m: u32, category: Category) -> TransactionDraft {
        TransactionDraft::expense(
            Money::from_whole(25),
            NaiveDate::from_ymd_opt(y, m, 15).unwrap(),
            desc,
            category,
        )
    }

    #[test]
    fn test_add_prepends() {
        let mut store = TransactionStore::new();
        store.add(draft("first", 2024, 1, Category::Food));
        store.add(draft("second", 2024, 2, Category::Food));

        let descriptions: Vec<&str> = store.all().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["second", "first"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_update_preserves_position() {
        let mut store = TransactionStore::new();
        let a = store.add(draft("a", 2024, 1, Category::Food));
        store.add(draft("b", 2024, 1, Category::Food));

        let mut changed = a.to_draft();
        changed.description = "a2".into();
        changed.kind = TransactionKind::Income;
        let updated = store.update(a.id, changed).unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(store.all()[1].description, "a2");
        assert!(store.get(a.id).unwrap().is_income());
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = TransactionStore::new();
        store.add(draft("a", 2024, 1, Category::Food));
        let before = store.all().to_vec();
        let revision = store.revision();

        assert!(store
            .update(TransactionId::new(), draft("x", 2024, 1, Category::Food))
            .is_none());
        assert_eq!(store.all(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_remove() {
        let mut store = TransactionStore::new();
        let a = store.add(draft("a", 2024, 1, Category::Food));

        assert!(store.remove(TransactionId::new()).is_none());
        assert_eq!(store.remove(a.id).map(|t| t.id), Some(a.id));
        assert!(store.is_empty());
        assert!(store.remove(a.id).is_none());
    }

    #[test]
    fn test_add_update_remove_restores_store() {
        let mut store = TransactionStore::new();
        store.add(draft("kept", 2023, 6, Category::Utilities));
        let before = store.all().to_vec();

        let added = store.add(draft("temp", 2024, 1, Category::Food));
        store.update(added.id, draft("temp2", 2024, 2, Category::Shopping));
        store.remove(added.id);

        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_years_and_categories_are_sorted_and_distinct() {
        let mut store = TransactionStore::new();
        store.add(draft("a", 2024, 1, Category::Shopping));
        store.add(draft("b", 2022, 1, Category::Food));
        store.add(draft("c", 2024, 3, Category::Food));

        assert_eq!(store.years(), vec![2022, 2024]);
        assert_eq!(store.categories(), vec![Category::Food, Category::Shopping]);
    }
}
