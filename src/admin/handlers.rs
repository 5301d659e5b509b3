use axum::{
    extract::State,
    Json,
};
use serde::Serialize;
use crate::http::server::AppState;
use crate::index::PlacementRecord;
use crate::service::LoadReport;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub snapshot_version: u64,
    pub placements: usize,
    pub last_load: Option<LoadReport>,
}

#[derive(Serialize)]
pub struct SnapshotListing {
    pub snapshot_version: u64,
    pub placements: Vec<PlacementRecord>,
}

pub async fn get_status(
    State(state): State<AppState>,
) -> Json<SystemStatus> {
    let snapshot = state.service.index().snapshot();

    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        snapshot_version: snapshot.version(),
        placements: snapshot.len(),
        last_load: state.service.last_load().map(|r| LoadReport::clone(&r)),
    })
}

pub async fn get_placements(
    State(state): State<AppState>,
) -> Json<SnapshotListing> {
    // Pin one generation so the listing is never torn by a reload.
    let snapshot = state.service.index().snapshot();

    Json(SnapshotListing {
        snapshot_version: snapshot.version(),
        placements: snapshot.records().map(|r| PlacementRecord::clone(r)).collect(),
    })
}
