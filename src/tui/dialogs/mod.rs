//! Dialogs drawn over the dashboard

pub mod budget;
pub mod confirm;
pub mod help;
pub mod transaction;
