//! Response handling and transformation.
//!
//! # Responsibilities
//! - Map placement errors to HTTP status codes
//! - Attach the failing operation to server-side error messages
//!
//! # Design Decisions
//! - `InvalidInput` → 400 with the plain-text message
//! - `Internal` → 500 with the cause attached, never retried here

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::PlacementError;

/// A placement error tagged with the operation that produced it.
#[derive(Debug)]
pub struct ApiError {
    operation: &'static str,
    error: PlacementError,
}

impl ApiError {
    pub fn loading(error: PlacementError) -> Self {
        Self {
            operation: "loading",
            error,
        }
    }

    pub fn searching(error: PlacementError) -> Self {
        Self {
            operation: "searching",
            error,
        }
    }

    pub fn status(&self) -> StatusCode {
        if self.error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn body(&self) -> String {
        match &self.error {
            PlacementError::InvalidInput(message) => message.clone(),
            PlacementError::Internal(cause) => {
                format!("Error {} ad placements: {}", self.operation, cause)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!(operation = self.operation, error = %self.error, "Request failed");
        }
        (self.status(), self.body()).into_response()
    }
}
