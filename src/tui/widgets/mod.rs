//! Reusable widgets for the TUI

pub mod charts;
pub mod input;
pub mod notification;

pub use notification::{Notification, NotificationQueue, NotificationWidget};
