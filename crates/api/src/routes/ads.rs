//! Ad lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use serde::Serialize;
use tracing::info;

use shanyrak_core::ad::{Ad, AdData};

use super::{ad_service, media, protected};
use crate::{AppState, Store, error::ApiError, middleware::AuthUser};

/// Creates the ad routes.
///
/// `POST /shanyrak/{ad_id}` is the media upload and shares its path with
/// the ad itself.
pub fn routes<S: Store>(state: &AppState<S>) -> Router<AppState<S>> {
    let jwt = &state.jwt_service;
    let upload = post(media::upload_media::<S>).layer(media::upload_body_limit(state));

    Router::new()
        .route("/shanyrak/", protected(jwt, post(create_ad::<S>)))
        .route("/shanyrak", protected(jwt, post(create_ad::<S>)))
        .route(
            "/shanyrak/{ad_id}",
            get(get_ad::<S>).merge(protected(
                jwt,
                patch(update_ad::<S>).delete(delete_ad::<S>).merge(upload),
            )),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for ad creation.
#[derive(Debug, Serialize)]
pub struct CreateAdResponse {
    /// Generated ad ID.
    pub id: String,
}

/// Public view of an ad.
#[derive(Debug, Serialize)]
pub struct AdResponse {
    /// Client-writable fields.
    #[serde(flatten)]
    pub data: AdData,
    /// Public media URLs.
    pub media: Vec<String>,
    /// Owner ID.
    pub user_id: String,
    /// Created at timestamp (ISO 8601).
    pub created_at: String,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            data: ad.data,
            media: ad.media,
            user_id: ad.user_id,
            created_at: ad.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/shanyrak/`
async fn create_ad<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Json(payload): Json<AdData>,
) -> Result<Json<CreateAdResponse>, ApiError> {
    let id = ad_service(&state)
        .create_ad(payload, auth.user_id())
        .await?;

    info!(ad_id = %id, user_id = %auth.user_id(), "Ad created");
    Ok(Json(CreateAdResponse { id }))
}

/// GET `/shanyrak/{ad_id}`
async fn get_ad<S: Store>(
    State(state): State<AppState<S>>,
    Path(ad_id): Path<String>,
) -> Result<Json<AdResponse>, ApiError> {
    let ad = ad_service(&state).get_ad(&ad_id).await?;
    Ok(Json(ad.into()))
}

/// PATCH `/shanyrak/{ad_id}`
async fn update_ad<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path(ad_id): Path<String>,
    Json(payload): Json<AdData>,
) -> Result<StatusCode, ApiError> {
    ad_service(&state)
        .update_ad(&ad_id, payload, auth.user_id())
        .await?;

    info!(ad_id = %ad_id, "Ad updated");
    Ok(StatusCode::OK)
}

/// DELETE `/shanyrak/{ad_id}`
async fn delete_ad<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Path(ad_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ad_service(&state).delete_ad(&ad_id, auth.user_id()).await?;

    info!(ad_id = %ad_id, "Ad deleted");
    Ok(StatusCode::OK)
}
