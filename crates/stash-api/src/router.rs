//! Route definitions for the Stash HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    Router::new()
        .merge(app_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(file_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Operational endpoints: liveness and counts.
fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::app::status))
        .route("/stats", get(handlers::app::stats))
}

/// Session endpoints: token issue and revoke.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/connect", get(handlers::auth::connect))
        .route("/disconnect", get(handlers::auth::disconnect))
}

/// Registration and profile.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/users/me", get(handlers::user::me))
}

/// File hierarchy and content.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::create_file))
        .route("/files", get(handlers::file::list_files))
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}/publish", put(handlers::file::publish_file))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish_file))
        .route("/files/{id}/data", get(handlers::file::get_file_data))
}
