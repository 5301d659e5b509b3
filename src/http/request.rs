//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Propagate the ID back on the response
//! - Open a tracing span carrying the ID
//! - Decode uploaded feed bodies

use axum::http::{header, HeaderMap, HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::error::PlacementError;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns an `x-request-id` when the client sent none.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Request ID of `request`, or `"unknown"` before the ID layer ran.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span for one HTTP request, used by the trace layer.
pub fn make_request_span<B>(request: &Request<B>) -> tracing::Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Extract feed text from an upload body.
///
/// A JSON string literal sent as `application/json` is unwrapped; any other
/// body is taken verbatim.
pub fn decode_feed_body(headers: &HeaderMap, body: &[u8]) -> Result<String, PlacementError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false);

    if is_json {
        if let Ok(text) = serde_json::from_slice::<String>(body) {
            return Ok(text);
        }
    }

    std::str::from_utf8(body)
        .map(str::to_owned)
        .map_err(|_| PlacementError::invalid_input("File content must be valid UTF-8."))
}
