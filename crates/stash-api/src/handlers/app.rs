//! Operational handlers: backend status and collection counts.

use axum::Json;
use axum::extract::State;

use stash_core::traits::cache::CacheProvider;

use crate::dto::response::{StatsResponse, StatusResponse};
use crate::state::AppState;

/// GET /status
///
/// Reports cache and document-store liveness. Probe failures read as
/// `false` rather than erroring the endpoint.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let redis = state.cache.health_check().await.unwrap_or(false);
    let db = state.users.health_check().await.unwrap_or(false);

    Json(StatusResponse { redis, db })
}

/// GET /stats
///
/// Count failures read as zero so the endpoint stays available.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let users = state.users.count().await.unwrap_or(0);
    let files = state.files.count().await.unwrap_or(0);

    Json(StatsResponse { users, files })
}
