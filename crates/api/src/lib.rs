//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for ads, media, comments, and accounts
//! - Authentication middleware
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{Router, http::header::AUTHORIZATION};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use shanyrak_core::account::UserRepository;
use shanyrak_core::ad::AdRepository;
use shanyrak_core::storage::StorageService;
use shanyrak_shared::JwtService;

/// Persistence backing every route.
pub trait Store: AdRepository + UserRepository + 'static {}

impl<T> Store for T where T: AdRepository + UserRepository + 'static {}

/// Application state shared across handlers.
pub struct AppState<S> {
    /// Ad and user persistence.
    pub store: Arc<S>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Storage service for ad media (optional).
    pub storage: Option<Arc<StorageService>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            jwt_service: Arc::clone(&self.jwt_service),
            storage: self.storage.clone(),
        }
    }
}

/// Creates the main application router.
///
/// Every request gets an `x-request-id`; bearer tokens are kept out of
/// trace output.
pub fn create_router<S: Store>(state: AppState<S>) -> Router {
    routes::api_routes_with_state(&state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new([AUTHORIZATION]))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
