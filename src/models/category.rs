//! Spending categories
//!
//! Categories form a closed set shared by transactions and budgets, so a
//! budget lookup can always find the category it was saved for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transaction or budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Education,
    Shopping,
    Others,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::Shopping,
        Category::Others,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Others => "Others",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category, wrapping around (used by selectors)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive; "other" and "transport" are accepted as aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        let alias = match needle.as_str() {
            "other" => Some(Self::Others),
            "transport" => Some(Self::Transportation),
            _ => None,
        };
        alias
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.name().to_lowercase() == needle)
            })
            .ok_or_else(|| CategoryParseError(s.trim().to_string()))
    }
}

/// Returned when text does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" HEALTHCARE ".parse::<Category>().unwrap(), Category::Healthcare);
        assert_eq!("other".parse::<Category>().unwrap(), Category::Others);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError("Rent".into()));
        assert!(err.to_string().contains("Food, Transportation"));
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Category::Food.next(), Category::Transportation);
        assert_eq!(Category::Others.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Others);
    }

    #[test]
    fn test_order_follows_display_list() {
        let mut shuffled = vec![Category::Others, Category::Food, Category::Shopping];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Food, Category::Shopping, Category::Others]
        );
    }
}
