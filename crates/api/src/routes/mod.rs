//! API route definitions.

use std::sync::Arc;

use axum::{Router, middleware, routing::MethodRouter};

use shanyrak_core::ad::AdService;
use shanyrak_shared::JwtService;

use crate::{AppState, Store, middleware::auth_middleware};

pub mod ads;
pub mod comments;
pub mod health;
pub mod media;
pub mod users;

/// Creates the API router. Public and protected methods share paths, so
/// authentication is attached per method router.
pub fn api_routes_with_state<S: Store>(state: &AppState<S>) -> Router<AppState<S>> {
    let jwt = &state.jwt_service;

    Router::new()
        .merge(health::routes())
        .merge(users::routes(jwt))
        .merge(ads::routes(state))
        .merge(media::routes(jwt))
        .merge(comments::routes(jwt))
}

/// Require a valid bearer token for every method in `method_router`.
fn protected<S: Store>(
    jwt: &Arc<JwtService>,
    method_router: MethodRouter<AppState<S>>,
) -> MethodRouter<AppState<S>> {
    method_router.route_layer(middleware::from_fn_with_state(
        Arc::clone(jwt),
        auth_middleware,
    ))
}

/// Ad service for one request, with storage attached when configured.
fn ad_service<S: Store>(state: &AppState<S>) -> AdService<S> {
    let service = AdService::new(Arc::clone(&state.store));
    match &state.storage {
        Some(storage) => service.with_storage(Arc::clone(storage)),
        None => service,
    }
}
