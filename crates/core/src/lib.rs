//! Core business logic for Shanyrak.
//!
//! This crate contains the listing domain with ZERO web or database
//! dependencies. Persistence is reached through the repository traits that
//! the db crate implements.
//!
//! # Modules
//!
//! - `ad` - Ads, embedded comments, and media references
//! - `account` - Profile fields of the authenticated user
//! - `storage` - Object storage for ad media (OpenDAL)

pub mod account;
pub mod ad;
pub mod storage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
