//! Shanyrak API Server
//!
//! Main entry point for the Shanyrak classifieds service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use shanyrak_api::{AppState, create_router};
use shanyrak_core::storage::{StorageConfig, StorageService};
use shanyrak_db::{MongoStore, connect};
use shanyrak_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // LOG_FORMAT=json for structured output in deployed environments
    let fmt_layer = if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shanyrak=debug,tower_http=debug".into()),
        )
        .with(fmt_layer)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database.url, &config.database.name).await?;
    let store = MongoStore::new(&db);

    let jwt_service = JwtService::new(&config.jwt).context("Invalid JWT configuration")?;

    let storage = match config.storage {
        Some(settings) => {
            let service = StorageService::from_config(StorageConfig::from(settings))
                .context("Failed to initialize object storage")?;
            info!(provider = service.provider_name(), "Object storage configured");
            Some(Arc::new(service))
        }
        None => {
            warn!("Object storage not configured, media endpoints disabled");
            None
        }
    };

    let state = AppState {
        store: Arc::new(store),
        jwt_service: Arc::new(jwt_service),
        storage,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
