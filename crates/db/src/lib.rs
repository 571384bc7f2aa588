//! Database layer backed by MongoDB.
//!
//! This crate provides:
//! - BSON document shapes for the `ads` and `users` collections
//! - [`MongoStore`], implementing the core repository traits

pub mod documents;
pub mod repositories;

pub use repositories::MongoStore;

use mongodb::{Client, Database};
use tracing::info;

/// Errors raised while opening the database.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The driver rejected the connection string or could not reach the server.
    #[error("database connection failed: {0}")]
    Connection(#[from] mongodb::error::Error),
}

/// Establishes a connection and returns a handle to `db_name`.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server does
/// not answer a ping.
pub async fn connect(database_url: &str, db_name: &str) -> Result<Database, DbError> {
    let client = Client::with_uri_str(database_url).await?;
    let database = client.database(db_name);
    database.run_command(mongodb::bson::doc! { "ping": 1 }).await?;

    info!(database = %db_name, "Connected to MongoDB");
    Ok(database)
}
