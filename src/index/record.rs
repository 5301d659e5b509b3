//! Placement records and their case-insensitive identity key.

use serde::{Deserialize, Serialize};

/// A named placement and the location prefixes it is active under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub name: String,
    pub locations: Vec<String>,
}

impl PlacementRecord {
    pub fn new(name: impl Into<String>, locations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            locations,
        }
    }

    /// Case-insensitive identity of this record.
    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    /// Returns true if any registered location is a literal prefix of `location`.
    ///
    /// Matching is case-sensitive and ignores path segment boundaries, so
    /// `/ru` is active under `/ruble` as well as `/ru/svrd`. An empty
    /// registered location only matches the empty query.
    pub fn is_active_in(&self, location: &str) -> bool {
        self.locations.iter().any(|registered| {
            if registered.is_empty() {
                location.is_empty()
            } else {
                location.starts_with(registered.as_str())
            }
        })
    }
}

/// Case-folded placement name used as the snapshot key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    /// Folds each character independently, with no final-sigma context rule.
    pub fn new(name: &str) -> Self {
        Self(name.chars().flat_map(char::to_lowercase).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(locations: &[&str]) -> PlacementRecord {
        PlacementRecord::new("A", locations.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_literal_prefix_match() {
        let r = record(&["/ru"]);
        assert!(r.is_active_in("/ru"));
        assert!(r.is_active_in("/ru/svrd"));
        assert!(r.is_active_in("/rub"));
        assert!(!r.is_active_in("/r"));
        assert!(!r.is_active_in("/RU/svrd"));
        assert!(!r.is_active_in(""));
    }

    #[test]
    fn test_any_location_suffices() {
        let r = record(&["/kz", "/ru/msk"]);
        assert!(r.is_active_in("/ru/msk/center"));
        assert!(r.is_active_in("/kz/almaty"));
        assert!(!r.is_active_in("/ru/svrd"));
    }

    #[test]
    fn test_empty_location_only_matches_empty_query() {
        let r = record(&[""]);
        assert!(r.is_active_in(""));
        assert!(!r.is_active_in("/ru"));
    }

    #[test]
    fn test_name_key_folds_case() {
        assert_eq!(NameKey::new("Крутая Реклама"), NameKey::new("крутая реклама"));
        assert_eq!(record(&[]).key(), NameKey::new("a"));
        assert_ne!(NameKey::new("a"), NameKey::new("b"));
    }

    #[test]
    fn test_name_key_ignores_final_sigma() {
        assert_eq!(NameKey::new("ΟΔΟΣ"), NameKey::new("οδοσ"));
        assert_eq!(NameKey::new("ΟΔΟΣ"), NameKey::new("Οδοσ"));
    }
}
