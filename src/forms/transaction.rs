//! Transaction form
//!
//! Field state and validation for creating and editing a transaction. The
//! form knows nothing about rendering; the TUI dialogs and views drive it.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{
    Category, Money, MoneyParseError, Transaction, TransactionDraft, TransactionId,
    TransactionKind,
};

use super::input::TextField;

pub const AMOUNT_ERROR: &str = "Amount must be greater than 0";
pub const AMOUNT_TOO_LARGE_ERROR: &str = "Amount must not exceed 1,000,000,000,000.00";
pub const DATE_REQUIRED_ERROR: &str = "Date is required";
pub const DATE_FORMAT_ERROR: &str = "Date must be in YYYY-MM-DD format";
pub const DESCRIPTION_ERROR: &str = "Description is required";
pub const CATEGORY_ERROR: &str = "Category is required";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Whether the form creates a new transaction or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TransactionId),
}

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    Date,
    Description,
    Kind,
    Category,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Kind,
            Self::Kind => Self::Category,
            Self::Category => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Kind => Self::Description,
            Self::Category => Self::Kind,
        }
    }

    /// Whether the field takes typed text
    pub fn is_text(self) -> bool {
        matches!(self, Self::Amount | Self::Date | Self::Description)
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub amount: Option<&'static str>,
    pub date: Option<&'static str>,
    pub description: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.category.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Amount => self.amount,
            FormField::Date => self.date,
            FormField::Description => self.description,
            FormField::Category => self.category,
            FormField::Kind => None,
        }
    }

    /// Number of failing fields
    pub fn count(&self) -> usize {
        [self.amount, self.date, self.description, self.category]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// A successfully validated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub mode: FormMode,
    pub draft: TransactionDraft,
}

/// State of the transaction form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub mode: FormMode,
    pub focus: FormField,
    pub amount: TextField,
    pub date: TextField,
    pub description: TextField,
    pub kind: TransactionKind,
    pub category: Option<Category>,
    errors: FieldErrors,
}

impl TransactionForm {
    /// An empty create-mode form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            focus: FormField::default(),
            amount: TextField::new(),
            date: TextField::with_content(today.format(DATE_INPUT_FORMAT).to_string()),
            description: TextField::new(),
            kind: TransactionKind::default(),
            category: None,
            errors: FieldErrors::default(),
        }
    }

    /// An edit-mode form pre-filled from an existing transaction
    pub fn for_edit(txn: &Transaction) -> Self {
        Self {
            mode: FormMode::Edit(txn.id),
            focus: FormField::default(),
            amount: TextField::with_content(txn.amount.to_string()),
            date: TextField::with_content(txn.date.format(DATE_INPUT_FORMAT).to_string()),
            description: TextField::with_content(txn.description.clone()),
            kind: txn.kind,
            category: Some(txn.category),
            errors: FieldErrors::default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The text field under focus, if the focused field takes text
    pub fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Amount => Some(&mut self.amount),
            FormField::Date => Some(&mut self.date),
            FormField::Description => Some(&mut self.description),
            FormField::Kind | FormField::Category => None,
        }
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    /// Step the category selector; from "none selected" it lands on the first
    /// (or last) category
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = Some(match (self.category, forward) {
            (Some(c), true) => c.next(),
            (Some(c), false) => c.prev(),
            (None, true) => Category::ALL[0],
            (None, false) => Category::ALL[Category::ALL.len() - 1],
        });
    }

    /// Check every field, returning the draft or all failures
    pub fn validate(&self) -> Result<TransactionDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let amount = match Money::parse(self.amount.value()) {
            Ok(amount) if amount.is_positive() => Some(amount),
            Err(MoneyParseError::Overflow(_)) => {
                errors.amount = Some(AMOUNT_TOO_LARGE_ERROR);
                None
            }
            _ => {
                errors.amount = Some(AMOUNT_ERROR);
                None
            }
        };

        let date_text = self.date.value().trim();
        let date = if date_text.is_empty() {
            errors.date = Some(DATE_REQUIRED_ERROR);
            None
        } else {
            let parsed = NaiveDate::parse_from_str(date_text, DATE_INPUT_FORMAT).ok();
            if parsed.is_none() {
                errors.date = Some(DATE_FORMAT_ERROR);
            }
            parsed
        };

        if self.description.is_blank() {
            errors.description = Some(DESCRIPTION_ERROR);
        }
        if self.category.is_none() {
            errors.category = Some(CATEGORY_ERROR);
        }

        match (amount, date, self.category) {
            (Some(amount), Some(date), Some(category)) if errors.is_empty() => {
                Ok(TransactionDraft::new(
                    amount,
                    date,
                    self.description.value().trim(),
                    category,
                    self.kind,
                ))
            }
            _ => Err(errors),
        }
    }

    /// Validate and, on success, emit the draft
    ///
    /// Failures are kept for display and nothing is emitted. A successful
    /// create resets the form; a successful edit keeps the submitted values.
    pub fn submit(&mut self, today: NaiveDate) -> Option<FormSubmission> {
        match self.validate() {
            Ok(draft) => {
                let submission = FormSubmission {
                    mode: self.mode,
                    draft,
                };
                self.errors = FieldErrors::default();
                if self.mode == FormMode::Create {
                    self.reset(today);
                }
                Some(submission)
            }
            Err(errors) => {
                warn!(failures = errors.count(), "transaction form rejected");
                self.errors = errors;
                None
            }
        }
    }

    /// Back to an empty create-mode form
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn filled() -> TransactionForm {
        let mut form = TransactionForm::new(today());
        form.amount.set("100");
        form.description.set("Groceries");
        form.category = Some(Category::Food);
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = TransactionForm::new(today());
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.date.value(), "2024-03-15");
        assert_eq!(form.amount.value(), "");
        assert_eq!(form.kind, TransactionKind::Expense);
        assert_eq!(form.category, None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = TransactionForm::new(today());
        form.date.clear();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.amount, Some(AMOUNT_ERROR));
        assert_eq!(errors.date, Some(DATE_REQUIRED_ERROR));
        assert_eq!(errors.description, Some(DESCRIPTION_ERROR));
        assert_eq!(errors.category, Some(CATEGORY_ERROR));
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for bad in ["0", "-5", "abc", "1.234"] {
            let mut form = filled();
            form.amount.set(bad);
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.amount, Some(AMOUNT_ERROR), "input {:?}", bad);
            assert_eq!(errors.count(), 1);
        }
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let mut form = filled();
        form.amount.set("1000000000000");
        assert!(form.validate().is_ok());

        form.amount.set("50000000000000000");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.amount, Some(AMOUNT_TOO_LARGE_ERROR));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn test_bad_date_format() {
        let mut form = filled();
        form.date.set("15/03/2024");
        assert_eq!(form.validate().unwrap_err().date, Some(DATE_FORMAT_ERROR));
    }

    #[test]
    fn test_whitespace_description_rejected() {
        let mut form = filled();
        form.description.set("   ");
        assert_eq!(
            form.validate().unwrap_err().description,
            Some(DESCRIPTION_ERROR)
        );
    }

    #[test]
    fn test_failed_submit_keeps_values_and_errors() {
        let mut form = filled();
        form.category = None;

        assert!(form.submit(today()).is_none());
        assert_eq!(form.errors().get(FormField::Category), Some(CATEGORY_ERROR));
        assert_eq!(form.amount.value(), "100");
    }

    #[test]
    fn test_create_submit_emits_and_resets() {
        let mut form = filled();
        form.description.set("  Groceries  ");
        form.toggle_kind();

        let submission = form.submit(today()).unwrap();
        assert_eq!(submission.mode, FormMode::Create);
        assert_eq!(submission.draft.amount, Money::from_whole(100));
        assert_eq!(submission.draft.description, "Groceries");
        assert_eq!(submission.draft.kind, TransactionKind::Income);

        assert_eq!(form, TransactionForm::new(today()));
    }

    #[test]
    fn test_edit_submit_keeps_values() {
        let txn = Transaction::from_draft(filled().validate().unwrap());
        let mut form = TransactionForm::for_edit(&txn);
        assert!(form.is_edit());
        assert_eq!(form.amount.value(), "100.00");
        assert_eq!(form.date.value(), "2024-03-15");

        form.description.set("Dinner");
        let submission = form.submit(today()).unwrap();
        assert_eq!(submission.mode, FormMode::Edit(txn.id));
        assert_eq!(submission.draft.description, "Dinner");
        assert_eq!(form.description.value(), "Dinner");
        assert_eq!(form.mode, FormMode::Edit(txn.id));
    }

    #[test]
    fn test_errors_clear_after_success() {
        let mut form = filled();
        form.amount.set("0");
        form.submit(today());
        assert!(!form.errors().is_empty());

        form.amount.set("5");
        assert!(form.submit(today()).is_some());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_field_navigation_and_category_cycle() {
        let mut form = TransactionForm::new(today());
        form.prev_field();
        assert_eq!(form.focus, FormField::Category);
        assert!(form.focused_text_mut().is_none());
        form.next_field();
        assert_eq!(form.focus, FormField::Amount);
        assert!(form.focused_text_mut().is_some());

        form.cycle_category(true);
        assert_eq!(form.category, Some(Category::Food));
        form.cycle_category(false);
        assert_eq!(form.category, Some(Category::Others));
    }
}
