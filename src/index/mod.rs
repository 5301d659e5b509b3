//! Placement index subsystem.
//!
//! # Data Flow
//! ```text
//! Reload:
//!     Vec<PlacementRecord> (parsed feed)
//!     → snapshot.rs (dedup by case-folded name, first wins)
//!     → store.rs (single atomic swap of Arc<PlacementSnapshot>)
//!
//! Query:
//!     location
//!     → store.rs (load current Arc once)
//!     → snapshot.rs (linear scan, any-prefix match per record)
//!     → matching records
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable once published; reloads are full replacements
//! - Readers never block writers and writers never block readers (ArcSwap)
//! - Matching is literal string prefix, not path-segment aware
//! - Old generations are freed when the last in-flight query drops them

pub mod record;
pub mod snapshot;
pub mod store;

pub use record::{NameKey, PlacementRecord};
pub use snapshot::PlacementSnapshot;
pub use store::PlacementIndex;
