//! Error taxonomy shared by the index and its boundary layer.
//!
//! Malformed feed lines are not errors: the parser reports them as
//! [`crate::feed::SkippedLine`] diagnostics next to the parsed records.

use thiserror::Error;

/// Errors surfaced by placement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// A caller precondition was violated (empty feed, absent location).
    #[error("{0}")]
    InvalidInput(String),

    /// Unexpected failure while parsing or indexing.
    #[error("{0}")]
    Internal(String),
}

impl PlacementError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(cause.to_string())
    }

    /// True for errors the caller can fix by changing its request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
