//! Placement feed subsystem.
//!
//! # Data Flow
//! ```text
//! feed text (HTTP body or file on disk)
//!     → source.rs (read file, startup and hot reload)
//!     → parser.rs (lines → PlacementRecord + SkippedLine diagnostics)
//!     → service layer installs records into the index
//!
//! On file change:
//!     watcher.rs detects modify/create
//!     → source.rs reads the file
//!     → service load (full replacement)
//! ```
//!
//! # Design Decisions
//! - Malformed lines are data-quality events, not errors
//! - Parser is pure and deterministic
//! - A failed reload keeps the previously installed placements

pub mod parser;
pub mod source;
pub mod watcher;

pub use parser::{parse, ParseOutcome, SkipReason, SkippedLine};
pub use source::{read_feed_file, FeedSourceError};
pub use watcher::FeedWatcher;
