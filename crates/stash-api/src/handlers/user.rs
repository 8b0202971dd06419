//! User handlers: registration and profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CreateUserRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.user_service.register(req.email, req.password).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_me(auth.user_id).await?;
    Ok(Json(user.into()))
}
