//! Placement API handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::PlacementError;
use crate::http::request::decode_feed_body;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::index::PlacementRecord;
use crate::observability::metrics;
use crate::service::LoadReport;

pub const LOAD_ROUTE: &str = "/api/v1.0/AdPlacements/LoadFromFile";
pub const SEARCH_ROUTE: &str = "/api/v1.0/AdPlacements/Search";

/// Replace all placements with the uploaded feed.
pub async fn load_placements(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, ApiError> {
    tracing::info!(bytes = body.len(), "Load placements called");

    let result: Result<LoadReport, PlacementError> = async {
        let feed_text = decode_feed_body(&headers, &body)?;
        let service = state.service.clone();
        // Parsing a large feed is CPU-bound; keep it off the async workers.
        tokio::task::spawn_blocking(move || service.load(&feed_text))
            .await
            .map_err(PlacementError::internal)?
    }
    .await;

    match result {
        Ok(report) => {
            metrics::record_request(LOAD_ROUTE, 200);
            Ok(report.message())
        }
        Err(e) => {
            let err = ApiError::loading(e);
            metrics::record_request(LOAD_ROUTE, err.status().as_u16());
            Err(err)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub location: Option<String>,
}

/// Placements active at the queried location.
pub async fn search_placements(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlacementRecord>>, ApiError> {
    match state.service.search(params.location.as_deref()) {
        Ok(matches) => {
            metrics::record_request(SEARCH_ROUTE, 200);
            Ok(Json(matches))
        }
        Err(e) => {
            let err = ApiError::searching(e);
            metrics::record_request(SEARCH_ROUTE, err.status().as_u16());
            Err(err)
        }
    }
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    "ok"
}
