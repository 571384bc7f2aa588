//! Profile fields of the authenticated user.
//!
//! Identity itself comes from the token; this module only overwrites the
//! contact fields stored in the users collection.

mod service;

pub use service::{AccountError, AccountService, UserProfile, UserRepository};
