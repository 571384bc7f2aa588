//! Router test helpers over the in-memory store and memory storage.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shanyrak_core::storage::{StorageConfig, StorageProvider, StorageService};
use shanyrak_core::testing::InMemoryStore;
use shanyrak_shared::{JwtConfig, JwtService};

use crate::{AppState, create_router};

pub(crate) const MEDIA_BASE: &str = "http://cdn.local";

pub(crate) struct TestApp {
    pub state: AppState<InMemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let storage = StorageService::from_config(StorageConfig::new(
            StorageProvider::Memory,
            MEDIA_BASE,
        ))
        .expect("memory storage");
        Self::with_storage(Some(Arc::new(storage)))
    }

    pub fn without_storage() -> Self {
        Self::with_storage(None)
    }

    fn with_storage(storage: Option<Arc<StorageService>>) -> Self {
        let jwt_service = JwtService::new(&JwtConfig {
            secret: "router-test-secret".to_string(),
            ..JwtConfig::default()
        })
        .expect("jwt service");

        Self {
            state: AppState {
                store: Arc::new(InMemoryStore::new()),
                jwt_service: Arc::new(jwt_service),
                storage,
            },
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    pub fn token(&self, user_id: &str) -> String {
        self.state
            .jwt_service
            .generate_access_token(user_id)
            .expect("should generate token")
    }

    /// Create the sample flat as `user_id` and return its ID.
    pub async fn create_ad(&self, user_id: &str) -> String {
        let token = self.token(user_id);
        let (status, body) = send(
            self.router(),
            json_request(Method::POST, "/shanyrak/", Some(&token), flat_json()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "create failed: {body}");
        body["id"].as_str().expect("id in response").to_string()
    }
}

pub(crate) fn flat_json() -> Value {
    json!({
        "type": "flat",
        "price": 50000,
        "address": "1 Main St",
        "area": 40,
        "rooms_count": 2,
        "description": "cozy"
    })
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub(crate) fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body (`Null` when empty).
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}
