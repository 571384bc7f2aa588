//! Storage configuration types.

pub use shanyrak_shared::StorageProvider;
use shanyrak_shared::StorageSettings;

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Base URL that stored keys are appended to.
    pub public_base_url: String,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Allowed MIME types for upload.
    pub allowed_mime_types: Vec<String>,
}

impl StorageConfig {
    /// Default max file size: 10MB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

    /// Create a new storage config with default limits.
    #[must_use]
    pub fn new(provider: StorageProvider, public_base_url: impl Into<String>) -> Self {
        Self {
            provider,
            public_base_url: public_base_url.into(),
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: Self::default_mime_types(),
        }
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set allowed MIME types.
    #[must_use]
    pub fn with_allowed_mime_types(mut self, types: Vec<String>) -> Self {
        self.allowed_mime_types = types;
        self
    }

    /// Default allowed MIME types for ad media.
    #[must_use]
    pub fn default_mime_types() -> Vec<String> {
        vec![
            "image/png".to_string(),
            "image/jpeg".to_string(),
            "image/gif".to_string(),
            "image/webp".to_string(),
        ]
    }

    /// Check if a MIME type is allowed.
    #[must_use]
    pub fn is_mime_type_allowed(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|t| t == mime_type)
    }
}

impl From<StorageSettings> for StorageConfig {
    fn from(settings: StorageSettings) -> Self {
        let mut config = Self::new(settings.provider, settings.public_base_url);
        if let Some(max) = settings.max_file_size {
            config = config.with_max_file_size(max);
        }
        if let Some(types) = settings.allowed_mime_types {
            config = config.with_allowed_mime_types(types);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = StorageConfig::new(StorageProvider::Memory, "http://cdn.local");
        assert_eq!(config.max_file_size, StorageConfig::DEFAULT_MAX_FILE_SIZE);
        assert!(config.is_mime_type_allowed("image/jpeg"));
        assert!(!config.is_mime_type_allowed("application/pdf"));
    }

    #[test]
    fn test_from_settings_overrides_limits() {
        let settings = StorageSettings {
            provider: StorageProvider::Memory,
            public_base_url: "http://cdn.local".to_string(),
            max_file_size: Some(2048),
            allowed_mime_types: Some(vec!["video/mp4".to_string()]),
        };

        let config = StorageConfig::from(settings);
        assert_eq!(config.max_file_size, 2048);
        assert!(config.is_mime_type_allowed("video/mp4"));
        assert!(!config.is_mime_type_allowed("image/png"));
    }

    #[test]
    fn test_from_settings_keeps_defaults() {
        let settings = StorageSettings {
            provider: StorageProvider::Memory,
            public_base_url: "http://cdn.local".to_string(),
            max_file_size: None,
            allowed_mime_types: None,
        };

        let config = StorageConfig::from(settings);
        assert_eq!(config.max_file_size, StorageConfig::DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.allowed_mime_types, StorageConfig::default_mime_types());
    }
}
