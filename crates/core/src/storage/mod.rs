//! Object storage for ad media using Apache OpenDAL.
//!
//! Supported backends:
//! - S3-compatible: AWS S3, Cloudflare R2, MinIO, DigitalOcean Spaces
//! - Local filesystem (development only)
//! - In-process memory (tests only)
//!
//! Every stored object is reachable at `{public_base_url}/{key}`; that URL is
//! what ads keep in their `media` list, and [`StorageService::key_from_url`]
//! maps it back when media is deleted.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{MediaUpload, StorageService};
