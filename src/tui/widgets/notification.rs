//! Toast notification widget
//!
//! The TUI's [`Notifier`]: ledger notices are queued as toasts and dropped
//! once they have been on screen long enough.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::services::{Notice, NoticeVariant, Notifier};

/// How long a toast stays up unless configured otherwise
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

/// A notice with its display deadline
#[derive(Debug, Clone)]
pub struct Notification {
    pub notice: Notice,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(notice: Notice, duration: Duration) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn color(&self) -> Color {
        match self.notice.variant {
            NoticeVariant::Default => Color::Green,
            NoticeVariant::Destructive => Color::Red,
        }
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.color();
        let notice = &self.notification.notice;

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", notice.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(notice.description.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display, oldest first
#[derive(Debug)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_SECS)
    }
}

impl NotificationQueue {
    /// A queue whose toasts last `secs` seconds
    pub fn new(secs: u64) -> Self {
        Self {
            notifications: Vec::new(),
            duration: Duration::from_secs(secs),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// The notification to display, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notice: Notice) {
        let notification = Notification::new(notice, self.duration);
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_queues_in_order() {
        let mut queue = NotificationQueue::default();
        assert!(queue.is_empty());

        queue.notify(Notice::new("Transaction added", "+₹1.00 - Tea"));
        queue.notify(Notice::destructive("Transaction deleted", "Tea has been removed"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().notice.title, "Transaction added");
        assert_eq!(queue.current().unwrap().color(), Color::Green);
    }

    #[test]
    fn test_destructive_notices_are_red() {
        let mut queue = NotificationQueue::default();
        queue.notify(Notice::destructive("Transaction deleted", "Tea has been removed"));
        assert_eq!(queue.current().unwrap().color(), Color::Red);
    }

    #[test]
    fn test_notifications_expire() {
        let mut queue = NotificationQueue::new(3);
        queue.notify(Notice::new("Transaction added", "+₹1.00 - Tea"));

        let created = queue.current().unwrap().created_at;
        queue.remove_expired_at(created + Duration::from_secs(2));
        assert_eq!(queue.len(), 1);

        queue.remove_expired_at(created + Duration::from_secs(3));
        assert!(queue.is_empty());
    }
}
