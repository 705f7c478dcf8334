//! Money type for transaction amounts and budget limits
//!
//! Amounts are stored as integer minor units (paise, cents) so that every
//! total in the dashboard is exact: `balance == income - expenses` holds
//! without rounding drift.
//!
//! Parsed amounts are capped at [`Money::MAX`] and arithmetic saturates, so
//! summing many large amounts clamps instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols accepted (and ignored) when parsing user input
const KNOWN_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// A monetary amount in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input (one trillion units)
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create an amount from minor units
    ///
    /// # Examples
    /// ```
    /// use finviz::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units
    pub const fn from_whole(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Minor-unit remainder (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude is within [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        self.0.saturating_abs() <= Self::MAX.0
    }

    /// This amount as a fraction of `total`
    ///
    /// Returns `None` when `total` is zero, so callers never divide by zero.
    pub fn ratio_of(&self, total: Money) -> Option<f64> {
        if total.is_zero() {
            None
        } else {
            Some(self.0 as f64 / total.0 as f64)
        }
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts "10", "10.5", "10.50", ".75", "1,250.00" and an optional
    /// leading sign or currency symbol ("₹10.50", "-$3"). More than two
    /// decimal places is rejected rather than silently rounded, as is
    /// anything above [`Money::MAX`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        if input.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };
        let rest = rest.trim_start_matches(|c| KNOWN_SYMBOLS.contains(&c)).trim();
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let (whole_str, frac_str) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits.as_str(), ""),
        };

        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if !whole_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if frac_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str
                .parse()
                .map_err(|_| MoneyParseError::Overflow(s.to_string()))?
        };
        let frac: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().unwrap_or(0) * 10,
            _ => frac_str.parse::<i64>().unwrap_or(0),
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .filter(|c| *c <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::Overflow(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, sign first ("-₹10.50")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.whole().abs(), self.fraction())
        } else {
            format!("{}{}.{:02}", symbol, self.whole(), self.fraction())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.whole().abs(), self.fraction())
        } else {
            write!(f, "{}.{:02}", self.whole(), self.fraction())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooPrecise(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is empty"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            Self::TooPrecise(s) => write!(f, "At most two decimal places allowed: {}", s),
            Self::Overflow(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
