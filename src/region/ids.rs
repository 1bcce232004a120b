//! Region identifiers.
//!
//! Ids are assigned by whoever owns the region collection, and arrive on the
//! wire either as JSON integers or as strings. Both forms are kept as-is so
//! that writing a region back out reproduces the original id exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A region identifier: either an integer or a string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionId {
    Int(i64),
    Str(String),
}

impl RegionId {
    /// Returns true if this id matches the textual form `text`.
    ///
    /// Used by the CLI, where ids are always typed as strings: `7` matches
    /// both `RegionId::Int(7)` and `RegionId::Str("7")`.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            RegionId::Int(id) => text.parse::<i64>().is_ok_and(|parsed| parsed == *id),
            RegionId::Str(id) => id == text,
        }
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionId::Int(id) => write!(f, "RegionId({})", id),
            RegionId::Str(id) => write!(f, "RegionId({:?})", id),
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionId::Int(id) => write!(f, "{}", id),
            RegionId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for RegionId {
    fn from(id: i64) -> Self {
        RegionId::Int(id)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        RegionId::Str(id.to_string())
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        RegionId::Str(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_deserializes_both_forms() {
        let int: RegionId = serde_json::from_str("42").unwrap();
        let text: RegionId = serde_json::from_str("\"r-42\"").unwrap();
        assert_eq!(int, RegionId::Int(42));
        assert_eq!(text, RegionId::Str("r-42".into()));
    }

    #[test]
    fn test_id_serializes_unchanged() {
        assert_eq!(serde_json::to_string(&RegionId::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&RegionId::from("abc")).unwrap(),
            "\"abc\""
        );
    }

    #[test]
    fn test_id_matches_text() {
        assert!(RegionId::Int(7).matches("7"));
        assert!(!RegionId::Int(7).matches("07x"));
        assert!(RegionId::from("7").matches("7"));
        assert!(!RegionId::from("a").matches("b"));
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RegionId::Int(1));
        set.insert(RegionId::from("1"));
        set.insert(RegionId::Int(1)); // duplicate
        assert_eq!(set.len(), 2);
    }
}
