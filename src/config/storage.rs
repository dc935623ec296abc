//! Photo storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Photo storage configuration (local filesystem)
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded photos are stored
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Public URL path under which photos are served
    #[serde(default = "default_public_base_path")]
    pub public_base_path: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.is_empty() {
            return Err(ValidationError::InvalidUploadDir);
        }
        if self.public_base_path.is_empty() || !self.public_base_path.starts_with('/') {
            return Err(ValidationError::InvalidUploadDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_base_path: default_public_base_path(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_base_path() -> String {
    "/api/uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.upload_dir, "./uploads");
        assert_eq!(config.public_base_path, "/api/uploads");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_upload_dir() {
        let config = StorageConfig {
            upload_dir: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_relative_public_path() {
        let config = StorageConfig {
            public_base_path: "api/uploads".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
