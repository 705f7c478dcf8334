//! Form state and validation
//!
//! Rendering-free form models shared by the TUI dialogs and views.

pub mod budget;
pub mod input;
pub mod transaction;

pub use budget::BudgetForm;
pub use input::TextField;
pub use transaction::{FieldErrors, FormField, FormMode, FormSubmission, TransactionForm};
