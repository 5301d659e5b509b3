//! Shared holder of the current placement snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use super::record::PlacementRecord;
use super::snapshot::PlacementSnapshot;
use crate::error::PlacementError;

/// Placement index with atomic bulk replacement and lock-free reads.
///
/// Readers load the current snapshot pointer once and work against that
/// generation only. Writers build a complete replacement off to the side
/// and publish it with a single pointer swap; racing reloads resolve as
/// last-swap-wins.
#[derive(Debug)]
pub struct PlacementIndex {
    current: ArcSwap<PlacementSnapshot>,
    next_version: AtomicU64,
}

impl PlacementIndex {
    /// Create an index holding an empty generation.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(PlacementSnapshot::default()),
            next_version: AtomicU64::new(1),
        }
    }

    /// Replace the entire placement set and return the installed record count.
    ///
    /// Duplicate names (case-insensitive) keep their first occurrence.
    pub fn replace_all(&self, records: impl IntoIterator<Item = PlacementRecord>) -> usize {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let snapshot = PlacementSnapshot::build(version, records);
        let count = snapshot.len();

        self.current.store(Arc::new(snapshot));

        tracing::debug!(version, count, "Placement snapshot installed");
        count
    }

    /// Find every record with a location that prefixes `location`.
    ///
    /// An absent location is rejected. No matches, or an empty index, yield
    /// an empty result rather than an error. Result order is unspecified.
    pub fn search(&self, location: Option<&str>) -> Result<Vec<Arc<PlacementRecord>>, PlacementError> {
        let location = location
            .ok_or_else(|| PlacementError::invalid_input("Location parameter is required."))?;

        let snapshot = self.current.load();
        Ok(snapshot.matching(location))
    }

    /// Pin the current generation.
    pub fn snapshot(&self) -> Arc<PlacementSnapshot> {
        self.current.load_full()
    }

    /// Number of records in the current generation.
    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Version of the current generation; 0 until the first reload.
    pub fn version(&self) -> u64 {
        self.current.load().version()
    }
}

impl Default for PlacementIndex {
    fn default() -> Self {
        Self::new()
    }
}
