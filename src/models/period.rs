//! Calendar periods and selections
//!
//! `Selection` is the "All or one value" choice used by the filter bar and
//! by budget keys. `MonthKey` identifies one calendar month and sorts
//! chronologically. `Period` pairs a year and a month selection.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Either every value ("All") or exactly one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether `value` passes this selection
    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == value,
        }
    }

    pub fn value(&self) -> Option<T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(*v),
        }
    }

    /// Step through `[All, options...]`, wrapping at both ends
    ///
    /// A current value missing from `options` steps to the first (or last)
    /// option so the selector always lands on something listed.
    pub fn cycle(&self, options: &[T], forward: bool) -> Self {
        let position = match self {
            Self::All => Some(0),
            Self::Only(v) => options.iter().position(|o| o == v).map(|i| i + 1),
        };
        let len = options.len() + 1;
        let next = match (position, forward) {
            (Some(p), true) => (p + 1) % len,
            (Some(p), false) => (p + len - 1) % len,
            (None, true) => 1.min(len - 1),
            (None, false) => len - 1,
        };
        if next == 0 {
            Self::All
        } else {
            Self::Only(options[next - 1])
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Only(v),
            None => Self::All,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(v) => write!(f, "{}", v),
        }
    }
}

/// One calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Short chart label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        let name = month_name(self.month);
        format!("{} {}", &name[..3.min(name.len())], self.year)
    }

    pub fn prev(&self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// A year/month selection; the period a filter or budget refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Period {
    pub year: Selection<i32>,
    pub month: Selection<u32>,
}

impl Period {
    pub fn new(year: Selection<i32>, month: Selection<u32>) -> Self {
        Self { year, month }
    }

    /// Every date
    pub fn all_time() -> Self {
        Self::default()
    }

    /// A single calendar month
    pub fn month(year: i32, month: u32) -> Self {
        Self::new(Selection::Only(year), Selection::Only(month))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year.matches(date.year()) && self.month.matches(date.month())
    }

    /// Human-readable label, e.g. "January 2024" or "All time"
    pub fn label(&self) -> String {
        match (self.year, self.month) {
            (Selection::All, Selection::All) => "All time".to_string(),
            (Selection::Only(y), Selection::All) => format!("All of {}", y),
            (Selection::All, Selection::Only(m)) => format!("{} (every year)", month_name(m)),
            (Selection::Only(y), Selection::Only(m)) => format!("{} {}", month_name(m), y),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
