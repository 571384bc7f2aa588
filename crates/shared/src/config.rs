//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
    /// Object storage configuration. Media endpoints are disabled without it.
    #[serde(default)]
    pub storage: Option<StorageSettings>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string.
    pub url: String,
    /// Database name holding the `ads` and `users` collections.
    #[serde(default = "default_database_name")]
    pub name: String,
}

fn default_database_name() -> String {
    "shanyrak".to_string()
}

/// JWT configuration.
///
/// Loaded once at startup and handed to [`crate::JwtService`].
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Signing algorithm name (HMAC family only).
    #[serde(default = "default_jwt_algorithm")]
    pub algorithm: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_jwt_expiry")]
    pub expiry_secs: u64,
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_jwt_expiry() -> u64 {
    10_800 // 3 hours
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            algorithm: default_jwt_algorithm(),
            expiry_secs: default_jwt_expiry(),
        }
    }
}

/// Object storage provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: AWS S3, Cloudflare R2, MinIO, DigitalOcean Spaces.
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Region.
        region: String,
    },
    /// Local filesystem (development only).
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// In-process memory (tests only).
    Memory,
}

impl StorageProvider {
    /// Provider name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }
}

/// Object storage settings as read from configuration sources.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Storage backend.
    pub provider: StorageProvider,
    /// Base URL under which stored objects are publicly reachable.
    pub public_base_url: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default)]
    pub max_file_size: Option<u64>,
    /// Accepted MIME types for media uploads.
    #[serde(default)]
    pub allowed_mime_types: Option<Vec<String>>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `SHANYRAK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SHANYRAK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment_with_defaults() {
        temp_env::with_vars(
            [
                ("SHANYRAK__DATABASE__URL", Some("mongodb://localhost:27017")),
                ("SHANYRAK__JWT__SECRET", Some("env-secret")),
                ("RUN_MODE", Some("config-test-nonexistent")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");

                assert_eq!(config.database.url, "mongodb://localhost:27017");
                assert_eq!(config.database.name, "shanyrak");
                assert_eq!(config.jwt.secret, "env-secret");
                assert_eq!(config.jwt.algorithm, "HS256");
                assert_eq!(config.jwt.expiry_secs, 10_800);
                assert_eq!(config.server.port, 8080);
                assert!(config.storage.is_none());
            },
        );
    }

    #[test]
    fn test_load_fails_without_database_url() {
        temp_env::with_vars(
            [
                ("SHANYRAK__DATABASE__URL", None::<&str>),
                ("SHANYRAK__JWT__SECRET", Some("env-secret")),
                ("RUN_MODE", Some("config-test-nonexistent")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_storage_provider_deserializes_tagged() {
        let settings: StorageSettings = serde_json::from_value(serde_json::json!({
            "provider": { "type": "local_fs", "root": "/var/lib/shanyrak" },
            "public_base_url": "http://localhost:8080/media"
        }))
        .expect("valid settings");

        assert_eq!(
            settings.provider,
            StorageProvider::LocalFs {
                root: PathBuf::from("/var/lib/shanyrak")
            }
        );
        assert!(settings.max_file_size.is_none());

        let memory: StorageProvider =
            serde_json::from_value(serde_json::json!({ "type": "memory" })).expect("valid");
        assert_eq!(memory, StorageProvider::Memory);
    }
}
