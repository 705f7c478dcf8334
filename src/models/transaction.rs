//! Transaction model
//!
//! A transaction records one income or expense event. The amount is always
//! stored positive; the direction comes from `kind`.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::period::MonthKey;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Sign character used in notices and lists
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Everything a user enters for a transaction; the form payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        kind: TransactionKind,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category,
            kind,
        }
    }

    /// Shorthand for an expense draft
    pub fn expense(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self::new(amount, date, description, category, TransactionKind::Expense)
    }

    /// Shorthand for an income draft
    pub fn income(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self::new(amount, date, description, category, TransactionKind::Income)
    }

    /// Check the invariants every stored transaction holds
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Always positive; see `kind`
    pub amount: Money,

    pub date: NaiveDate,

    pub description: String,

    pub category: Category,

    #[serde(default)]
    pub kind: TransactionKind,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with a fresh id from a draft
    pub fn from_draft(draft: TransactionDraft) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
            kind: draft.kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the user-editable fields, keeping id and creation time
    pub fn apply(&mut self, draft: TransactionDraft) {
        self.amount = draft.amount;
        self.date = draft.date;
        self.description = draft.description;
        self.category = draft.category;
        self.kind = draft.kind;
        self.updated_at = Utc::now();
    }

    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount,
            date: self.date,
            description: self.description.clone(),
            category: self.category,
            kind: self.kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Amount with sign and currency symbol, e.g. "+₹100.00"
    pub fn format_amount(&self, symbol: &str) -> String {
        format!("{}{}", self.kind.sign(), self.amount.format_with_symbol(symbol))
    }

}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{} ({})",
            self.date, self.description, self.kind.sign(), self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", Money::MAX, amount)
            }
            Self::EmptyDescription => write!(f, "Description is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft::expense(
            Money::from_cents(10000),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Groceries",
            Category::Food,
        )
    }

    #[test]
    fn test_from_draft() {
        let txn = Transaction::from_draft(draft());
        assert_eq!(txn.amount.cents(), 10000);
        assert!(txn.is_expense());
        assert_eq!(txn.created_at, txn.updated_at);
        assert_eq!(txn.month_key(), MonthKey::new(2024, 1));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut txn = Transaction::from_draft(draft());
        let id = txn.id;
        let created = txn.created_at;

        let mut changed = draft();
        changed.description = "Dinner".into();
        changed.kind = TransactionKind::Income;
        txn.apply(changed.clone());

        assert_eq!(txn.id, id);
        assert_eq!(txn.created_at, created);
        assert_eq!(txn.to_draft(), changed);
        assert!(txn.is_income());
    }

    #[test]
    fn test_format_amount() {
        let expense = Transaction::from_draft(draft());
        assert_eq!(expense.format_amount("₹"), "-₹100.00");

        let mut income_draft = draft();
        income_draft.kind = TransactionKind::Income;
        let income = Transaction::from_draft(income_draft);
        assert_eq!(income.format_amount("₹"), "+₹100.00");
    }

    #[test]
    fn test_validation() {
        assert!(draft().validate().is_ok());

        let mut zero = draft();
        zero.amount = Money::zero();
        assert_eq!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut huge = draft();
        huge.amount = Money::MAX + Money::from_cents(1);
        assert_eq!(
            huge.validate(),
            Err(TransactionValidationError::AmountTooLarge(huge.amount))
        );

        let mut blank = draft();
        blank.description = "   ".into();
        assert_eq!(
            blank.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_kind_default_and_toggle() {
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Expense.toggle(), TransactionKind::Income);
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::from_draft(draft());
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"expense\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
