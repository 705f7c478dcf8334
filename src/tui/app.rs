//! Application state for the TUI
//!
//! The App owns the ledger and all view state: which screen is showing,
//! open dialogs, form buffers and the selected row. Handlers call the
//! methods here; views only read.

use chrono::NaiveDate;
use ratatui::widgets::TableState;
use tracing::debug;

use crate::config::settings::Settings;
use crate::forms::{BudgetForm, FormMode, TransactionForm};
use crate::models::{Transaction, TransactionDraft, TransactionId};
use crate::services::Ledger;

use super::widgets::NotificationQueue;

/// Every month, for the month selector
const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    AddTransaction,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    EditTransaction,
    Budget,
    ConfirmDelete(TransactionId),
    Help,
}

/// Main application state
pub struct App {
    pub ledger: Ledger<NotificationQueue>,

    /// chrono format for dates in the transaction list
    pub date_format: String,

    /// Date new transactions default to
    pub today: NaiveDate,

    pub should_quit: bool,
    pub active_view: ActiveView,
    pub active_dialog: ActiveDialog,

    /// Create-mode form behind the Add Transaction view
    pub add_form: TransactionForm,

    /// Edit-mode form while the edit dialog is open
    pub edit_form: Option<TransactionForm>,

    pub budget_form: BudgetForm,

    /// Selection in the dashboard transaction list
    pub table_state: TableState,
}

impl App {
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        let notifications = NotificationQueue::new(settings.notification_secs);
        Self {
            ledger: Ledger::with_settings(notifications, settings),
            date_format: settings.date_format.clone(),
            today,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            add_form: TransactionForm::new(today),
            edit_form: None,
            budget_form: BudgetForm::new(),
            table_state: TableState::default(),
        }
    }

    /// Add transactions without notices and select the newest
    pub fn seed(&mut self, drafts: Vec<TransactionDraft>) {
        self.ledger.seed(drafts);
        self.clamp_selection();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        debug!(?view, "switching view");
        self.active_view = view;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    // Selection

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// The transaction under the cursor in the filtered list
    pub fn selected_transaction(&self) -> Option<Transaction> {
        let snapshot = self.ledger.snapshot();
        self.selected_index()
            .and_then(|i| snapshot.transactions.get(i).cloned())
    }

    pub fn move_down(&mut self) {
        let len = self.ledger.snapshot().transactions.len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().map_or(0, |i| (i + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        let len = self.ledger.snapshot().transactions.len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(next));
    }

    /// Keep the selection inside the filtered list after it changes
    fn clamp_selection(&mut self) {
        let len = self.ledger.snapshot().transactions.len();
        let selected = match (len, self.selected_index()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    // Filters

    pub fn cycle_month(&mut self, forward: bool) {
        let month = self.ledger.filter().month.cycle(&MONTHS, forward);
        self.ledger.set_month(month);
        self.clamp_selection();
    }

    pub fn cycle_year(&mut self, forward: bool) {
        let years = self.ledger.snapshot().available_years.clone();
        let year = self.ledger.filter().year.cycle(&years, forward);
        self.ledger.set_year(year);
        self.clamp_selection();
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.ledger.snapshot().available_categories.clone();
        let category = self.ledger.filter().category.cycle(&categories, forward);
        self.ledger.set_category(category);
        self.clamp_selection();
    }

    pub fn reset_filter(&mut self) {
        self.ledger.reset_filter();
        self.clamp_selection();
    }

    // Transactions

    /// Submit the add form; on success the form is cleared for the next entry
    pub fn submit_add_form(&mut self) {
        if let Some(submission) = self.add_form.submit(self.today) {
            self.ledger.add_transaction(submission.draft);
            self.clamp_selection();
        }
    }

    /// Open the edit dialog for the selected transaction
    pub fn start_edit(&mut self) {
        if let Some(txn) = self.selected_transaction() {
            self.edit_form = Some(TransactionForm::for_edit(&txn));
            self.open_dialog(ActiveDialog::EditTransaction);
        }
    }

    /// Submit the edit dialog; it closes once the form validates
    pub fn submit_edit_form(&mut self) {
        let Some(form) = self.edit_form.as_mut() else {
            return;
        };
        let Some(submission) = form.submit(self.today) else {
            return;
        };
        if let FormMode::Edit(id) = submission.mode {
            self.ledger.update_transaction(id, submission.draft);
        }
        self.cancel_edit();
        self.clamp_selection();
    }

    /// Drop the edit form and return to the dashboard
    pub fn cancel_edit(&mut self) {
        self.edit_form = None;
        self.close_dialog();
    }

    /// Ask before deleting the selected transaction
    pub fn request_delete(&mut self) {
        if let Some(txn) = self.selected_transaction() {
            self.open_dialog(ActiveDialog::ConfirmDelete(txn.id));
        }
    }

    pub fn confirm_delete(&mut self) {
        if let ActiveDialog::ConfirmDelete(id) = self.active_dialog {
            self.ledger.remove_transaction(id);
        }
        self.close_dialog();
        self.clamp_selection();
    }

    // Budgets

    /// Open the budget dialog, pre-selecting the selected row's category
    pub fn open_budget_dialog(&mut self) {
        if self.budget_form.category.is_none() {
            if let Some(txn) = self.selected_transaction() {
                self.budget_form = BudgetForm::for_category(txn.category);
            }
        }
        self.open_dialog(ActiveDialog::Budget);
    }

    /// Save the budget for the period currently shown, closing on success
    pub fn submit_budget_form(&mut self) {
        if let Some((category, limit)) = self.budget_form.submit() {
            self.ledger.save_budget_for_current_period(category, limit);
            self.close_dialog();
        }
    }

    // Notifications

    pub fn tick(&mut self) {
        self.ledger.notifier_mut().remove_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Selection};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn app() -> App {
        App::new(&Settings::default(), today())
    }

    fn expense(day: u32, description: &str, category: Category) -> TransactionDraft {
        TransactionDraft::expense(
            Money::from_whole(10),
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            description,
            category,
        )
    }

    #[test]
    fn test_seed_selects_first_row_without_notices() {
        let mut app = app();
        app.seed(vec![expense(1, "Tea", Category::Food)]);
        assert_eq!(app.selected_index(), Some(0));
        assert!(app.ledger.notifier().is_empty());
    }

    #[test]
    fn test_add_form_submission() {
        let mut app = app();
        app.switch_view(ActiveView::AddTransaction);
        app.add_form.amount.set("250");
        app.add_form.description.set("Books");
        app.add_form.category = Some(Category::Education);
        app.submit_add_form();

        let snapshot = app.ledger.snapshot();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.summary.expenses, Money::from_whole(250));
        assert_eq!(app.add_form.amount.value(), "");
        assert_eq!(app.active_view, ActiveView::AddTransaction);
        assert_eq!(app.ledger.notifier().len(), 1);
    }

    #[test]
    fn test_invalid_add_form_changes_nothing() {
        let mut app = app();
        app.submit_add_form();
        assert!(app.ledger.snapshot().transactions.is_empty());
        assert!(!app.add_form.errors().is_empty());
    }

    #[test]
    fn test_edit_round_trip() {
        let mut app = app();
        app.seed(vec![expense(1, "Tea", Category::Food)]);

        app.start_edit();
        assert_eq!(app.active_dialog, ActiveDialog::EditTransaction);
        let form = app.edit_form.as_mut().unwrap();
        form.description.set("Green tea");
        app.submit_edit_form();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(app.edit_form.is_none());
        assert_eq!(app.ledger.snapshot().transactions[0].description, "Green tea");
    }

    #[test]
    fn test_cancel_edit_keeps_transaction() {
        let mut app = app();
        app.seed(vec![expense(1, "Tea", Category::Food)]);
        app.start_edit();
        app.edit_form.as_mut().unwrap().description.set("Coffee");
        app.cancel_edit();

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.snapshot().transactions[0].description, "Tea");
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = app();
        app.seed(vec![
            expense(1, "Tea", Category::Food),
            expense(2, "Bus", Category::Transportation),
        ]);
        app.move_down();
        app.request_delete();
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));
        assert_eq!(app.ledger.snapshot().transactions.len(), 2);

        app.confirm_delete();
        let snapshot = app.ledger.snapshot();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(app.selected_index(), Some(0));
        assert!(app.ledger.notifier().current().unwrap().notice.is_destructive());
    }

    #[test]
    fn test_filter_cycling_uses_available_values() {
        let mut app = app();
        app.seed(vec![
            expense(1, "Tea", Category::Food),
            expense(2, "Bus", Category::Transportation),
        ]);

        app.cycle_month(true);
        assert_eq!(app.ledger.filter().month, Selection::Only(1));
        app.cycle_month(false);
        app.cycle_month(false);
        assert_eq!(app.ledger.filter().month, Selection::Only(12));

        app.cycle_year(true);
        assert_eq!(app.ledger.filter().year, Selection::Only(2024));

        app.reset_filter();
        app.cycle_category(true);
        assert_eq!(app.ledger.filter().category, Selection::Only(Category::Food));
        assert_eq!(app.ledger.snapshot().transactions.len(), 1);
    }

    #[test]
    fn test_empty_filter_result_clears_selection() {
        let mut app = app();
        app.seed(vec![expense(1, "Tea", Category::Food)]);
        app.cycle_month(true);
        assert_eq!(app.selected_index(), None);
        assert_eq!(app.selected_transaction(), None);
    }

    #[test]
    fn test_budget_saved_for_current_period() {
        let mut app = app();
        app.seed(vec![expense(1, "Tea", Category::Food)]);
        app.ledger
            .set_filter(crate::models::FilterState::all().month(3).year(2024));

        app.open_budget_dialog();
        assert_eq!(app.budget_form.category, Some(Category::Food));
        app.budget_form.amount.set("200");
        app.submit_budget_form();

        assert!(!app.has_dialog());
        let rows = &app.ledger.snapshot().budget_comparison.rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].budget, Money::from_whole(200));
        assert_eq!(rows[0].spent, Money::from_whole(10));
    }
}
