//! Display formatting for terminal output
//!
//! Text rendering of dashboard snapshots, plus the formatting helpers and
//! placeholder messages shared with the TUI.

pub mod dashboard;
pub mod report;

pub use dashboard::render_dashboard;
pub use report::{
    format_bar, format_date, format_optional_percentage, format_percentage, truncate,
};

/// Shown instead of an empty monthly chart
pub const NO_MONTHLY_DATA: &str = "No data to display";

/// Shown instead of an empty category chart
pub const NO_CATEGORY_DATA: &str = "No category data yet";

/// Shown instead of an empty budget comparison
pub const NO_BUDGET_DATA: &str = "No budget data available. Set a budget to view comparison.";

/// Shown instead of an empty transaction list
pub const NO_TRANSACTIONS: &str = "No transactions found";
