//! Session handlers: login over basic auth, logout over the token.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};

use stash_core::error::AppError;

use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /connect
///
/// Exchanges a `Basic` Authorization header for a session token.
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Unauthorized"))?;

    let user = state.verifier.verify(header).await?;
    let token = state.sessions.create(user.id).await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /disconnect
///
/// Revokes the session the request authenticated with. The gate rejects
/// unknown tokens before this runs, so revocation here always targets a
/// live session.
pub async fn disconnect(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.sessions.revoke(&auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}
