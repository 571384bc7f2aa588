//! Ad media routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
    routing::delete,
};
use serde::Deserialize;
use tracing::info;

use shanyrak_core::storage::{MediaUpload, StorageConfig};
use shanyrak_shared::{AppError, JwtService};

use super::{ad_service, protected};
use crate::{AppState, Store, error::ApiError, middleware::AuthUser};

/// Files accepted per upload before the body limit cuts in.
const MAX_FILES_PER_UPLOAD: u64 = 10;

/// Creates the media deletion route. Upload lives on the ad path, see
/// [`super::ads::routes`].
pub fn routes<S: Store>(jwt: &Arc<JwtService>) -> Router<AppState<S>> {
    Router::new().route(
        "/shanyrak/{ad_id}/media",
        protected(jwt, delete(delete_media::<S>)),
    )
}

/// Body limit for uploads, sized from the configured per-file maximum.
pub(crate) fn upload_body_limit<S>(state: &AppState<S>) -> DefaultBodyLimit {
    let per_file = state
        .storage
        .as_ref()
        .map_or(StorageConfig::DEFAULT_MAX_FILE_SIZE, |s| s.config().max_file_size);
    let limit = per_file.saturating_mul(MAX_FILES_PER_UPLOAD);
    DefaultBodyLimit::max(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Request body for media deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteMediaRequest {
    /// Public URLs to remove.
    pub media: Vec<String>,
}

fn invalid_multipart(err: &MultipartError) -> ApiError {
    AppError::Validation(err.body_text()).into()
}

/// POST `/shanyrak/{ad_id}`
///
/// Every multipart field carrying a filename is treated as a file; other
/// fields are ignored.
pub(crate) async fn upload_media<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path(ad_id): Path<String>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| invalid_multipart(&e))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.map_err(|e| invalid_multipart(&e))?;

        files.push(MediaUpload {
            filename,
            content_type,
            data,
        });
    }

    let urls = ad_service(&state)
        .upload_media(&ad_id, files, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, count = urls.len(), "Media uploaded");
    Ok(StatusCode::OK)
}

/// DELETE `/shanyrak/{ad_id}/media`
async fn delete_media<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path(ad_id): Path<String>,
    Json(payload): Json<DeleteMediaRequest>,
) -> Result<StatusCode, ApiError> {
    ad_service(&state)
        .delete_media(&ad_id, &payload.media, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, count = payload.media.len(), "Media deleted");
    Ok(StatusCode::OK)
}
