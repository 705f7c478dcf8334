//! Transaction identifiers
//!
//! Ids are random UUIDs, which is all the session needs: uniqueness for as
//! long as the process runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for transaction ids
const PREFIX: &str = "txn-";

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an id from its full UUID form, with or without the prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.trim();
        let s = s.strip_prefix(PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<TransactionId> = (0..1000).map(|_| TransactionId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_display_is_short() {
        let display = TransactionId::new().to_string();
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let plain = TransactionId::parse(raw).unwrap();
        let prefixed: TransactionId = format!("txn-{}", raw).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), raw);
    }
}
