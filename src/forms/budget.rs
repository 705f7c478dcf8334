//! Budget form
//!
//! A category selector and an amount. Submitting with either left empty does
//! nothing; the budget is saved against whatever period the dashboard filter
//! currently shows.

use tracing::warn;

use crate::models::{Budget, BudgetKey, Category, Money, Period};

use super::input::TextField;

/// State of the budget form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: Option<Category>,
    pub amount: TextField,
    error: Option<String>,
}

impl BudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with the category pre-selected
    pub fn for_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category = Some(match (self.category, forward) {
            (Some(c), true) => c.next(),
            (Some(c), false) => c.prev(),
            (None, true) => Category::ALL[0],
            (None, false) => Category::ALL[Category::ALL.len() - 1],
        });
    }

    /// Validate and return the category and limit to save
    ///
    /// Returns `None` silently when the category or amount is missing, and
    /// `None` with an error message when the amount is invalid. On success
    /// the amount is cleared and the category kept.
    pub fn submit(&mut self) -> Option<(Category, Money)> {
        let category = self.category?;
        if self.amount.is_blank() {
            return None;
        }

        let limit = match Money::parse(self.amount.value()) {
            Ok(limit) => limit,
            Err(e) => {
                warn!(error = %e, "budget form rejected");
                self.error = Some(e.to_string());
                return None;
            }
        };

        // Period is irrelevant to the sign check
        let candidate = Budget::new(BudgetKey::new(category, Period::all_time()), limit);
        if let Err(e) = candidate.validate() {
            warn!(error = %e, "budget form rejected");
            self.error = Some(e.to_string());
            return None;
        }

        self.error = None;
        self.amount.clear();
        Some((category, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_ignored() {
        let mut form = BudgetForm::new();
        form.amount.set("200");
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), None);

        let mut form = BudgetForm::for_category(Category::Food);
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_submit_clears_amount_keeps_category() {
        let mut form = BudgetForm::for_category(Category::Food);
        form.amount.set("200");

        assert_eq!(form.submit(), Some((Category::Food, Money::from_whole(200))));
        assert_eq!(form.amount.value(), "");
        assert_eq!(form.category, Some(Category::Food));
    }

    #[test]
    fn test_invalid_amounts_rejected_inline() {
        let mut form = BudgetForm::for_category(Category::Food);
        form.amount.set("lots");
        assert_eq!(form.submit(), None);
        assert!(form.error().is_some());
        assert_eq!(form.amount.value(), "lots");

        form.amount.set("-10");
        assert_eq!(form.submit(), None);
        assert!(form.error().unwrap().contains("cannot be negative"));

        form.amount.set("10");
        assert!(form.submit().is_some());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_amount_above_limit_rejected_inline() {
        let mut form = BudgetForm::for_category(Category::Food);
        form.amount.set("50000000000000000");
        assert_eq!(form.submit(), None);
        assert!(form.error().unwrap().contains("too large"));

        form.amount.set("1000000000000");
        assert_eq!(form.submit(), Some((Category::Food, Money::MAX)));
    }

    #[test]
    fn test_zero_budget_allowed() {
        let mut form = BudgetForm::for_category(Category::Others);
        form.amount.set("0");
        assert_eq!(form.submit(), Some((Category::Others, Money::zero())));
    }

    #[test]
    fn test_cycle_category() {
        let mut form = BudgetForm::new();
        form.cycle_category(false);
        assert_eq!(form.category, Some(Category::Others));
        form.cycle_category(true);
        assert_eq!(form.category, Some(Category::Food));
    }
}
