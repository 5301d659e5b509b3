//! Ad placement service library.
//!
//! Loads a flat feed of named placements with location prefixes and answers
//! "which placements are active at this location?" queries against an
//! atomically swapped, immutable snapshot.

pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod index;
pub mod service;

pub mod admin;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use error::PlacementError;
pub use http::HttpServer;
pub use index::{PlacementIndex, PlacementRecord};
pub use lifecycle::Shutdown;
pub use service::{LoadReport, PlacementService};
