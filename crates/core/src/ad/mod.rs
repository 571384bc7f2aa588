//! Ads and their embedded comments.
//!
//! This module provides business logic for listings including:
//! - Ad creation, lookup, update, and deletion
//! - Media upload and removal through object storage
//! - Comments scoped to their author

mod error;
mod service;
mod types;

pub use error::AdError;
pub use service::{AdRepository, AdService};
pub use types::{Ad, AdData, Comment};
