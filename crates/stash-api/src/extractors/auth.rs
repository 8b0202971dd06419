//! Access gate — resolves the `X-Token` header to a user identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stash_core::error::AppError;
use stash_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the session token.
const TOKEN_HEADER: &str = "x-token";

/// Extracted authenticated user context available in handlers.
///
/// Routes that require auth take this extractor; a missing or
/// unresolvable token rejects the request with 401 before the handler
/// runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Optional variant of [`AuthUser`] for routes where anonymous access is
/// allowed (public content reads). Yields `None` instead of rejecting.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

/// Resolve the token header against the session manager.
async fn resolve_context(parts: &Parts, state: &AppState) -> Result<Option<RequestContext>, AppError> {
    let Some(token) = parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
    else {
        return Ok(None);
    };

    match state.sessions.resolve(token).await? {
        Some(user_id) => Ok(Some(RequestContext::new(user_id, token.to_string()))),
        None => Ok(None),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_context(parts, state).await? {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => Err(AppError::authentication("Unauthorized").into()),
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_context(parts, state).await?))
    }
}
