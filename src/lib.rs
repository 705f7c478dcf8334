//! finviz - Terminal personal-finance visualizer
//!
//! This library provides the core of the finviz application: an in-memory
//! ledger of income and expense transactions with per-category budgets, and
//! a derivation pipeline that turns them into filtered lists, summary totals
//! and chart-ready series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, filters)
//! - `storage`: Session-scoped in-memory stores
//! - `reports`: The derivation pipeline and dashboard snapshot
//! - `services`: The ledger controller and notices
//! - `forms`: Transaction and budget form validation
//! - `display`: Plain-text rendering for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use finviz::models::{Category, Money, TransactionDraft};
//! use finviz::services::{Ledger, Notice};
//!
//! let mut ledger = Ledger::new(Vec::<Notice>::new());
//! ledger.add_transaction(TransactionDraft::expense(
//!     Money::from_whole(100),
//!     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     "Groceries",
//!     Category::Food,
//! ));
//! assert_eq!(ledger.snapshot().summary.expenses, Money::from_whole(100));
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinanceError, FinanceResult};
