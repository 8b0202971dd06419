//! File handlers: creation, metadata, listing, visibility, content.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use stash_core::types::pagination::Page;

use crate::dto::request::{CreateFileRequest, ListFilesQuery};
use crate::dto::response::FileResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// POST /files
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileResponse>), ApiError> {
    let file = state
        .file_service
        .create_file(auth.user_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(file.into())))
}

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state.file_service.get_file(auth.user_id, id).await?;
    Ok(Json(file.into()))
}

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state
        .file_service
        .list_files(auth.user_id, query.parent_id, Page::new(query.page))
        .await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

/// PUT /files/{id}/publish
pub async fn publish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state
        .file_service
        .set_visibility(auth.user_id, id, true)
        .await?;
    Ok(Json(file.into()))
}

/// PUT /files/{id}/unpublish
pub async fn unpublish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state
        .file_service
        .set_visibility(auth.user_id, id, false)
        .await?;
    Ok(Json(file.into()))
}

/// GET /files/{id}/data
///
/// Serves raw content bytes with a content type guessed from the file
/// name. Anonymous requests are allowed; visibility rules live in the
/// service.
pub async fn get_file_data(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let requester_id = auth.0.map(|ctx| ctx.user_id);
    let content = state.file_service.get_content(requester_id, id).await?;

    let mime = mime_guess::from_path(&content.name).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], content.data).into_response())
}
