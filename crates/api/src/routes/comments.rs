//! Ad comment routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use shanyrak_core::ad::Comment;
use shanyrak_shared::JwtService;

use super::{ad_service, protected};
use crate::{AppState, Store, error::ApiError, middleware::AuthUser};

/// Creates the comment routes.
pub fn routes<S: Store>(jwt: &Arc<JwtService>) -> Router<AppState<S>> {
    Router::new()
        .route(
            "/shanyrak/{ad_id}/comments",
            get(get_comments::<S>).merge(protected(jwt, post(add_comment::<S>))),
        )
        .route(
            "/shanyrak/{ad_id}/comments/{comment_id}",
            protected(jwt, patch(update_comment::<S>).delete(delete_comment::<S>)),
        )
}

/// Query carrying the comment text.
#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    /// Comment text.
    pub comment_content: String,
}

/// Response listing the comments of an ad.
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    /// Comments, oldest first.
    pub comments: Vec<Comment>,
}

/// POST `/shanyrak/{ad_id}/comments?comment_content=...`
async fn add_comment<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path(ad_id): Path<String>,
    Query(query): Query<CommentQuery>,
) -> Result<StatusCode, ApiError> {
    let comment_id = ad_service(&state)
        .add_comment(&ad_id, &query.comment_content, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, comment_id = %comment_id, "Comment added");
    Ok(StatusCode::OK)
}

/// GET `/shanyrak/{ad_id}/comments`
async fn get_comments<S: Store>(
    State(state): State<AppState<S>>,
    Path(ad_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let comments = ad_service(&state).get_comments(&ad_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

/// PATCH `/shanyrak/{ad_id}/comments/{comment_id}?comment_content=...`
async fn update_comment<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path((ad_id, comment_id)): Path<(String, String)>,
    Query(query): Query<CommentQuery>,
) -> Result<StatusCode, ApiError> {
    ad_service(&state)
        .update_comment(&ad_id, &comment_id, &query.comment_content, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, comment_id = %comment_id, "Comment updated");
    Ok(StatusCode::OK)
}

/// DELETE `/shanyrak/{ad_id}/comments/{comment_id}`
async fn delete_comment<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path((ad_id, comment_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    ad_service(&state)
        .delete_comment(&ad_id, &comment_id, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, comment_id = %comment_id, "Comment deleted");
    Ok(StatusCode::OK)
}
