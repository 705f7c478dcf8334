//! User-facing notices
//!
//! The ledger reports the outcome of each mutation as a [`Notice`] handed
//! to a [`Notifier`]. Delivery is fire-and-forget: the ledger never waits
//! for or inspects the result.

use std::fmt;

use tracing::{info, warn};

/// Visual style of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Used for removals
    Destructive,
}

/// A short message about something that just happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Receives notices from the ledger
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Records every notice, in order
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Writes notices to the tracing log; used by the non-interactive CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Default => info!(title = %notice.title, "{}", notice.description),
            NoticeVariant::Destructive => warn!(title = %notice.title, "{}", notice.description),
        }
    }
}

/// Drops every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _notice: Notice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut recorder: Vec<Notice> = Vec::new();
        recorder.notify(Notice::new("first", "a"));
        recorder.notify(Notice::destructive("second", "b"));

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder[0].variant, NoticeVariant::Default);
        assert!(recorder[1].is_destructive());
        assert_eq!(recorder[1].to_string(), "second: b");
    }

    #[test]
    fn test_other_notifiers_accept_notices() {
        LogNotifier.notify(Notice::new("Transaction added", "+₹1.00 - Tea"));
        SilentNotifier.notify(Notice::destructive("Transaction deleted", "Tea has been removed"));
    }
}
