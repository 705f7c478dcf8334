//! In-memory budget store
//!
//! One limit per (category, period) key. Saving an existing key overwrites
//! it; budgets are never deleted during a session.

use std::collections::HashMap;

use crate::models::{Budget, BudgetKey, Category, Money, Period};

/// Budget limits keyed by category and period
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    limits: HashMap<BudgetKey, Money>,
    revision: u64,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the limit for a category in a period
    pub fn save(&mut self, category: Category, period: Period, limit: Money) -> Budget {
        let key = BudgetKey::new(category, period);
        self.limits.insert(key, limit);
        self.revision += 1;
        Budget::new(key, limit)
    }

    pub fn get(&self, key: &BudgetKey) -> Option<Money> {
        self.limits.get(key).copied()
    }

    /// Limit for a category in exactly this period, if one was saved
    pub fn limit_for(&self, category: Category, period: &Period) -> Option<Money> {
        self.get(&BudgetKey::new(category, *period))
    }

    /// All budgets, sorted by key
    pub fn iter(&self) -> Vec<Budget> {
        let mut budgets: Vec<Budget> = self
            .limits
            .iter()
            .map(|(key, limit)| Budget::new(*key, *limit))
            .collect();
        budgets.sort_by_key(|b| b.key);
        budgets
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Counter bumped on every save
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
