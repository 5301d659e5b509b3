//! Boundary operations over the placement index.
//!
//! # Responsibilities
//! - Reject empty feeds and absent locations
//! - Run the feed parser and log skipped lines
//! - Install parsed records into the index
//! - Record load and search metrics
//!
//! # Design Decisions
//! - The service owns an explicit `Arc<PlacementIndex>`; there is no global state
//! - Loads are serialized through a mutex so reloads land in request order;
//!   searches never take it

use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::Serialize;

use crate::error::PlacementError;
use crate::feed::{self, ParseOutcome};
use crate::index::{PlacementIndex, PlacementRecord};
use crate::observability::metrics;

/// Summary of one successful feed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Distinct records installed.
    pub loaded: usize,
    /// Well-formed lines parsed, duplicates included.
    pub parsed: usize,
    /// Malformed lines skipped.
    pub skipped: usize,
    /// Snapshot version that was installed.
    pub version: u64,
}

impl LoadReport {
    /// Human-readable success message.
    pub fn message(&self) -> String {
        format!("Successfully loaded {} ad placements from file.", self.loaded)
    }
}

/// Placement service: load feeds, answer location queries.
#[derive(Debug)]
pub struct PlacementService {
    index: Arc<PlacementIndex>,
    load_lock: Mutex<()>,
    last_load: arc_swap::ArcSwapOption<LoadReport>,
}

impl PlacementService {
    pub fn new(index: Arc<PlacementIndex>) -> Self {
        Self {
            index,
            load_lock: Mutex::new(()),
            last_load: arc_swap::ArcSwapOption::empty(),
        }
    }

    /// The underlying index.
    pub fn index(&self) -> &Arc<PlacementIndex> {
        &self.index
    }

    /// Report of the most recent successful load, if any.
    pub fn last_load(&self) -> Option<Arc<LoadReport>> {
        self.last_load.load_full()
    }

    /// Parse `feed_text` and atomically replace the placement set with it.
    pub fn load(&self, feed_text: &str) -> Result<LoadReport, PlacementError> {
        if feed_text.trim().is_empty() {
            tracing::warn!("Load received empty feed content");
            metrics::record_load("rejected", 0, 0);
            return Err(PlacementError::invalid_input(
                "File content cannot be null or empty.",
            ));
        }

        let ParseOutcome { records, skipped } = feed::parse(feed_text);
        for line in &skipped {
            tracing::warn!(
                line_number = line.line_number,
                raw = %line.raw,
                reason = %line.reason,
                "Skipping invalid feed line"
            );
        }

        let parsed = records.len();
        let report = {
            // A poisoned lock only means an earlier load panicked; the index
            // itself is never left half-written.
            let _guard = self.load_lock.lock().unwrap_or_else(|e| e.into_inner());
            let loaded = self.index.replace_all(records);
            let report = LoadReport {
                loaded,
                parsed,
                skipped: skipped.len(),
                version: self.index.version(),
            };
            self.last_load.store(Some(Arc::new(report.clone())));
            report
        };

        metrics::record_load("success", report.skipped, report.loaded);
        tracing::info!(
            loaded = report.loaded,
            parsed,
            skipped = report.skipped,
            version = report.version,
            "Placement feed loaded"
        );
        Ok(report)
    }

    /// Records active at `location`, sorted by name for stable output.
    pub fn search(&self, location: Option<&str>) -> Result<Vec<PlacementRecord>, PlacementError> {
        let start = Instant::now();
        let found = self.index.search(location).inspect_err(|_| {
            tracing::warn!("Search received no location parameter");
        })?;

        let mut matches: Vec<PlacementRecord> =
            found.iter().map(|record| PlacementRecord::clone(record)).collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));

        metrics::record_search(matches.len(), start);
        tracing::info!(
            location = location.unwrap_or_default(),
            matches = matches.len(),
            "Placement search completed"
        );
        Ok(matches)
    }
}
