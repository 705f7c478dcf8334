//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the plain-text dashboard and the TUI widgets.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::models::Money;

/// Fallback when the configured date format is not a valid strftime string
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Percentage or a dash when there is none
pub fn format_optional_percentage(pct: Option<f64>) -> String {
    pct.map(format_percentage).unwrap_or_else(|| "-".to_string())
}

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    let filled = match value.ratio_of(max_value) {
        Some(ratio) if ratio > 0.0 => ((ratio * width as f64).round() as usize).min(width),
        _ => 0,
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a date with a configured strftime string
///
/// An invalid format falls back to ISO dates instead of failing mid-render.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    let format = if valid { format } else { FALLBACK_DATE_FORMAT };
    date.format(format).to_string()
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
