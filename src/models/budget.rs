//! Budget model
//!
//! A budget is a spending limit for one category within a period. The period
//! is whatever month/year selection was active when it was saved, so a
//! budget set while the year selector reads "All" covers every year.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::period::Period;

/// Identity of a budget: one slot per category per period
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BudgetKey {
    pub category: Category,
    pub period: Period,
}

impl BudgetKey {
    pub fn new(category: Category, period: Period) -> Self {
        Self { category, period }
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.category, self.period)
    }
}

/// A saved budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub key: BudgetKey,
    pub limit: Money,
}

impl Budget {
    pub fn new(key: BudgetKey, limit: Money) -> Self {
        Self { key, limit }
    }

    pub fn category(&self) -> Category {
        self.key.category
    }

    pub fn period(&self) -> Period {
        self.key.period
    }

    /// Validate the limit entered by a user
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit(limit) => {
                write!(f, "Budget cannot be negative (got {})", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
