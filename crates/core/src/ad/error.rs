//! Ad error types.

use thiserror::Error;

use shanyrak_shared::AppError;

use crate::storage::StorageError;

/// Ad operation errors.
#[derive(Debug, Error)]
pub enum AdError {
    /// Ad not found.
    #[error("ad not found: {0}")]
    NotFound(String),

    /// Ad exists but has no comments.
    #[error("no comments for ad: {0}")]
    NoComments(String),

    /// No comment with this ID written by the requester.
    #[error("comment {comment_id} not found on ad {ad_id}")]
    CommentNotFound {
        /// Ad ID.
        ad_id: String,
        /// Comment ID.
        comment_id: String,
    },

    /// Requester does not own the ad.
    #[error("user {user_id} does not own ad {ad_id}")]
    NotOwner {
        /// Ad ID.
        ad_id: String,
        /// Requesting user.
        user_id: String,
    },

    /// Two files in one upload map to the same storage key.
    #[error("duplicate media file name: {0}")]
    DuplicateMedia(String),

    /// Media operation without configured object storage.
    #[error("object storage is not configured")]
    StorageNotConfigured,

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl AdError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<AdError> for AppError {
    fn from(err: AdError) -> Self {
        match err {
            AdError::NotFound(_) => Self::NotFound("Ad not found".to_string()),
            AdError::NoComments(_) => Self::NotFound("Comments not found".to_string()),
            AdError::CommentNotFound { .. } => Self::NotFound("Comment not found".to_string()),
            AdError::NotOwner { .. } => {
                Self::Forbidden("Only the owner can modify this ad".to_string())
            }
            AdError::DuplicateMedia(name) => {
                Self::Validation(format!("duplicate media file name: {name}"))
            }
            AdError::StorageNotConfigured => {
                Self::ExternalService("object storage is not configured".to_string())
            }
            AdError::Storage(e) if e.is_rejected_upload() => Self::Validation(e.to_string()),
            AdError::Storage(e) => Self::ExternalService(e.to_string()),
            AdError::Repository(msg) => Self::Database(msg),
        }
    }
}
