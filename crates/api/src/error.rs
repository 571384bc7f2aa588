//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use shanyrak_core::account::AccountError;
use shanyrak_core::ad::AdError;
use shanyrak_shared::AppError;

/// Handler error rendered as `{error, message}`.
#[derive(Debug)]
pub enum ApiError {
    /// Domain or adapter failure.
    App(AppError),
    /// A media route was called but no object storage is configured.
    StorageNotConfigured,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<AdError> for ApiError {
    fn from(err: AdError) -> Self {
        match err {
            AdError::StorageNotConfigured => Self::StorageNotConfigured,
            other => Self::App(other.into()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        Self::App(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::StorageNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "storage_not_configured",
                    "message": "File storage is not configured"
                })),
            )
                .into_response(),
            Self::App(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = if err.is_client_error() {
                    err.message().to_string()
                } else {
                    error!(error = %err, "Request failed");
                    "An error occurred".to_string()
                };

                (
                    status,
                    Json(json!({ "error": err.error_code(), "message": message })),
                )
                    .into_response()
            }
        }
    }
}
