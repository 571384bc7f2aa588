//! Shared configuration, errors, and authentication for Shanyrak.
//!
//! This crate provides common types used across all other crates:
//! - Application configuration (server, database, JWT, object storage)
//! - Application-wide error type with HTTP status mapping
//! - JWT claims and the token service used by the auth middleware

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

#[cfg(test)]
mod error_tests;

pub use auth::Claims;
pub use config::{AppConfig, JwtConfig, StorageProvider, StorageSettings};
pub use error::AppError;
pub use jwt::{JwtError, JwtService};
