/// Catalog API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tonearm_core::Track;

#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
    pub total: usize,
}

/// GET /api/tracks
///
/// Builds the catalog fresh on every call; only folder-art paths are
/// remembered between requests.
pub async fn list_tracks(State(app_state): State<AppState>) -> Result<Json<TracksResponse>> {
    let builder = Arc::clone(&app_state.catalog);
    let root = Arc::clone(&app_state.music_dir);

    // the build is synchronous and sequential by contract; keep it off
    // the async workers
    let tracks = tokio::task::spawn_blocking(move || builder.build(&root))
        .await
        .map_err(|e| ServerError::Internal(format!("catalog build task failed: {e}")))??;

    let total = tracks.len();
    Ok(Json(TracksResponse { tracks, total }))
}
