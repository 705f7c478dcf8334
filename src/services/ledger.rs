//! Ledger controller
//!
//! The single owner of session state: both stores, the filter, and the
//! latest [`DashboardSnapshot`]. Every mutation goes through here, and each
//! one is followed by an explicit refresh so readers always see derived data
//! that matches the stores.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::models::{
    Budget, Category, FilterState, Money, Period, Selection, Transaction, TransactionDraft,
    TransactionId,
};
use crate::reports::{DashboardSnapshot, SnapshotKey, DEFAULT_RECENT_LIMIT};
use crate::storage::Storage;

use super::notify::{Notice, Notifier};

/// Default currency symbol for notices and reports
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Application state and the operations that change it
pub struct Ledger<N: Notifier> {
    storage: Storage,
    filter: FilterState,
    notifier: N,
    currency_symbol: String,
    recent_limit: usize,
    snapshot: Rc<DashboardSnapshot>,
    snapshot_key: SnapshotKey,
}

impl<N: Notifier> Ledger<N> {
    /// Create an empty ledger
    pub fn new(notifier: N) -> Self {
        let storage = Storage::new();
        let filter = FilterState::all();
        let snapshot_key = SnapshotKey::new(&storage, filter, DEFAULT_RECENT_LIMIT);
        let snapshot = Rc::new(DashboardSnapshot::build(&storage, filter, DEFAULT_RECENT_LIMIT));

        Self {
            storage,
            filter,
            notifier,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            snapshot,
            snapshot_key,
        }
    }

    /// Create an empty ledger using display settings from the configuration
    pub fn with_settings(notifier: N, settings: &Settings) -> Self {
        let mut ledger = Self::new(notifier);
        ledger.currency_symbol = settings.currency_symbol.clone();
        ledger.recent_limit = settings.recent_limit;
        ledger.refresh();
        ledger
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// The latest derived views
    pub fn snapshot(&self) -> Rc<DashboardSnapshot> {
        Rc::clone(&self.snapshot)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Record a new transaction
    ///
    /// Drafts that fail validation are logged and dropped without a notice.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Option<Transaction> {
        if let Err(e) = draft.validate() {
            warn!(error = %e, "transaction rejected");
            return None;
        }
        let txn = self.storage.transactions.add(draft);
        info!(id = %txn.id, category = %txn.category, kind = %txn.kind, "transaction added");

        let description = self.describe(&txn);
        self.notifier.notify(Notice::new("Transaction added", description));
        self.refresh();
        Some(txn)
    }

    /// Replace an existing transaction's fields
    ///
    /// Unknown ids and invalid drafts are ignored and produce no notice.
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Option<Transaction> {
        if let Err(e) = draft.validate() {
            warn!(%id, error = %e, "transaction update rejected");
            return None;
        }
        let txn = self.storage.transactions.update(id, draft)?;
        info!(id = %txn.id, "transaction updated");

        let description = self.describe(&txn);
        self.notifier.notify(Notice::new("Transaction updated", description));
        self.refresh();
        Some(txn)
    }

    /// Remove a transaction
    ///
    /// Unknown ids are ignored and produce no notice.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let txn = self.storage.transactions.remove(id)?;
        info!(id = %txn.id, "transaction deleted");

        self.notifier.notify(Notice::destructive(
            "Transaction deleted",
            format!("{} has been removed", txn.description),
        ));
        self.refresh();
        Some(txn)
    }

    /// Add transactions without notices, e.g. demo data at startup
    ///
    /// Invalid drafts are skipped; the count covers only stored ones.
    pub fn seed(&mut self, drafts: impl IntoIterator<Item = TransactionDraft>) -> usize {
        let mut count = 0;
        for draft in drafts {
            if let Err(e) = draft.validate() {
                warn!(error = %e, "seed transaction skipped");
                continue;
            }
            self.storage.transactions.add(draft);
            count += 1;
        }
        info!(count, "ledger seeded");
        self.refresh();
        count
    }

    /// Set or overwrite a budget for an explicit period
    pub fn save_budget(&mut self, category: Category, period: Period, limit: Money) -> Budget {
        let budget = self.storage.budgets.save(category, period, limit);
        info!(%category, %period, %limit, "budget saved");
        self.refresh();
        budget
    }

    /// Set or overwrite a budget for the period currently selected
    pub fn save_budget_for_current_period(&mut self, category: Category, limit: Money) -> Budget {
        self.save_budget(category, self.filter.period(), limit)
    }

    /// Replace the whole filter
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refresh();
    }

    pub fn set_month(&mut self, month: Selection<u32>) {
        self.set_filter(FilterState { month, ..self.filter });
    }

    pub fn set_year(&mut self, year: Selection<i32>) {
        self.set_filter(FilterState { year, ..self.filter });
    }

    pub fn set_category(&mut self, category: Selection<Category>) {
        self.set_filter(FilterState { category, ..self.filter });
    }

    /// Back to All/All/All
    pub fn reset_filter(&mut self) {
        self.set_filter(FilterState::all());
    }

    /// Notice text for a transaction, e.g. "+₹100.00 - Salary"
    fn describe(&self, txn: &Transaction) -> String {
        format!("{} - {}", txn.format_amount(&self.currency_symbol), txn.description)
    }

    /// Rebuild the snapshot if any input changed since the last build
    fn refresh(&mut self) {
        let key = SnapshotKey::new(&self.storage, self.filter, self.recent_limit);
        if key == self.snapshot_key {
            debug!("snapshot up to date");
            return;
        }

        self.snapshot = Rc::new(DashboardSnapshot::build(
            &self.storage,
            self.filter,
            self.recent_limit,
        ));
        self.snapshot_key = key;
        debug!(
            transactions = self.snapshot.transactions.len(),
            filter = %self.filter,
            "snapshot rebuilt"
        );
    }
}
