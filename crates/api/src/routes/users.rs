//! Account routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::patch,
};
use tracing::info;

use shanyrak_core::account::{AccountService, UserProfile};
use shanyrak_shared::JwtService;

use super::protected;
use crate::{AppState, Store, error::ApiError, middleware::AuthUser};

/// Creates the account routes.
pub fn routes<S: Store>(jwt: &Arc<JwtService>) -> Router<AppState<S>> {
    Router::new().route(
        "/auth/users/me",
        protected(
            jwt,
            patch(patch_my_account::<S>).post(patch_my_account::<S>),
        ),
    )
}

/// PATCH `/auth/users/me`
async fn patch_my_account<S: Store>(
    State(state): State<AppState<S>>,
    auth: AuthUser,
    Json(payload): Json<UserProfile>,
) -> Result<Json<UserProfile>, ApiError> {
    let service = AccountService::new(Arc::clone(&state.store));
    let profile = service.patch_profile(auth.user_id(), payload).await?;

    info!(user_id = %auth.user_id(), "Account updated");
    Ok(Json(profile))
}
