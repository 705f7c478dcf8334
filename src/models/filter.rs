//! Dashboard filter state
//!
//! Three independent selectors, each either "All" or one concrete value.
//! Any combination resolves to a (possibly empty) subset of the store.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::period::{month_name, Period, Selection};
use super::transaction::Transaction;

/// Current month/year/category selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub month: Selection<u32>,
    pub year: Selection<i32>,
    pub category: Selection<Category>,
}

impl FilterState {
    /// The unfiltered state (All/All/All)
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a month (1-12)
    pub fn month(mut self, month: u32) -> Self {
        self.month = Selection::Only(month);
        self
    }

    /// Restrict to a year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Selection::Only(year);
        self
    }

    /// Restrict to a category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Selection::Only(category);
        self
    }

    /// The month/year part of the filter
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.month.is_all() && self.year.is_all() && self.category.is_all()
    }

    /// Whether a transaction passes every selector
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.period().contains(txn.date) && self.category.matches(txn.category)
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = match self.month {
            Selection::All => "All".to_string(),
            Selection::Only(m) => month_name(m).to_string(),
        };
        write!(
            f,
            "Month: {}  Year: {}  Category: {}",
            month, self.year, self.category
        )
    }
}
