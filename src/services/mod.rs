//! Service layer for finviz
//!
//! The ledger controller owns the session state and routes every mutation
//! through the stores, the notifier and a snapshot refresh.

pub mod ledger;
pub mod notify;

pub use ledger::{Ledger, DEFAULT_CURRENCY_SYMBOL};
pub use notify::{LogNotifier, Notice, NoticeVariant, Notifier, SilentNotifier};
