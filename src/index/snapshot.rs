//! One immutable generation of the placement set.

use std::collections::HashMap;
use std::sync::Arc;

use super::record::{NameKey, PlacementRecord};

/// Immutable placement set keyed by case-folded name.
///
/// Built in full before it is published and never mutated afterwards.
/// Queries hold an `Arc` to the generation they started against, so a
/// superseded snapshot lives until its last reader drops it.
#[derive(Debug, Default)]
pub struct PlacementSnapshot {
    version: u64,
    by_name: HashMap<NameKey, Arc<PlacementRecord>>,
    /// Installation order, used for listing.
    order: Vec<Arc<PlacementRecord>>,
}

impl PlacementSnapshot {
    /// Build a snapshot from records in input order.
    ///
    /// The first record for a case-insensitive name wins; later duplicates
    /// are dropped silently.
    pub fn build(version: u64, records: impl IntoIterator<Item = PlacementRecord>) -> Self {
        let mut by_name = HashMap::new();
        let mut order = Vec::new();

        for record in records {
            let key = record.key();
            if by_name.contains_key(&key) {
                tracing::debug!(name = %record.name, "Dropping duplicate placement name");
                continue;
            }
            let record = Arc::new(record);
            by_name.insert(key, record.clone());
            order.push(record);
        }

        Self {
            version,
            by_name,
            order,
        }
    }

    /// Generation number assigned when this snapshot was built.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Arc<PlacementRecord>> {
        self.by_name.get(&NameKey::new(name))
    }

    /// Records in installation order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<PlacementRecord>> {
        self.order.iter()
    }

    /// Records active at `location`, scanning the whole generation.
    pub fn matching(&self, location: &str) -> Vec<Arc<PlacementRecord>> {
        self.order
            .iter()
            .filter(|record| record.is_active_in(location))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, location: &str) -> PlacementRecord {
        PlacementRecord::new(name, vec![location.to_string()])
    }

    #[test]
    fn test_first_occurrence_wins() {
        let snapshot = PlacementSnapshot::build(1, vec![rec("X", "/a"), rec("x", "/b")]);
        assert_eq!(snapshot.len(), 1);

        let kept = snapshot.get("x").unwrap();
        assert_eq!(kept.name, "X");
        assert_eq!(kept.locations, vec!["/a".to_string()]);
        assert!(Arc::ptr_eq(kept, snapshot.get("X").unwrap()));
    }

    #[test]
    fn test_greek_names_differing_in_case_dedup() {
        let snapshot = PlacementSnapshot::build(1, vec![rec("ΟΔΟΣ", "/a"), rec("οδοσ", "/b")]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("οδοσ").unwrap().name, "ΟΔΟΣ");
    }

    #[test]
    fn test_order_preserved() {
        let snapshot = PlacementSnapshot::build(
            3,
            vec![rec("b", "/b"), rec("a", "/a"), rec("B", "/c"), rec("c", "/c")],
        );
        let names: Vec<_> = snapshot.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(snapshot.version(), 3);
    }

    #[test]
    fn test_matching_on_empty_snapshot() {
        let snapshot = PlacementSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.matching("/ru").is_empty());
        assert!(snapshot.matching("").is_empty());
    }
}
