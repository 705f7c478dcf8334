//! Terminal User Interface
//!
//! An interactive dashboard built on ratatui and crossterm: filter bar,
//! summary cards, text bar charts and the transaction list, plus a
//! full-screen add form and dialogs for editing, budgets and deletes.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
