//! Filesystem storage adapter for listing photos

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{ImageStorage, StorageError, StoredImage};

/// Maximum accepted upload size, in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Filesystem-based photo storage
///
/// Stores uploaded images under a configurable directory with generated
/// names: {upload_dir}/{uuid}.{ext}. Served back under a configurable
/// public base path.
pub struct LocalImageStorage {
    upload_dir: PathBuf,
    public_base_path: String,
}

impl LocalImageStorage {
    /// Create new filesystem storage rooted at the given upload directory.
    pub fn new(upload_dir: impl AsRef<Path>, public_base_path: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.as_ref().to_path_buf(),
            public_base_path: public_base_path.into(),
        }
    }

    /// Reject names that could escape the upload directory.
    fn validate_file_name(name: &str) -> Result<(), StorageError> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name.contains("..")
            || name.starts_with('.')
        {
            return Err(StorageError::InvalidPath(name.to_string()));
        }
        Ok(())
    }

    fn normalize_extension(extension: &str) -> Result<String, StorageError> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ext)
        } else {
            Err(StorageError::UnsupportedFormat(extension.to_string()))
        }
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, data: &[u8], extension: &str) -> Result<StoredImage, StorageError> {
        let ext = Self::normalize_extension(extension)?;

        if data.len() > MAX_IMAGE_BYTES {
            return Err(StorageError::TooLarge {
                max_bytes: MAX_IMAGE_BYTES,
            });
        }

        fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))?;

        let file_name = format!("{}.{}", Uuid::new_v4().simple(), ext);
        let file_path = self.upload_dir.join(&file_name);

        // Write to a temporary file then rename (atomic on Unix)
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, data)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to rename file: {}", e)))?;

        let url = format!(
            "{}/{}",
            self.public_base_path.trim_end_matches('/'),
            file_name
        );

        Ok(StoredImage { file_name, url })
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        Self::validate_file_name(file_name)?;

        let file_path = self.upload_dir.join(file_name);
        if !file_path.exists() {
            return Err(StorageError::NotFound(file_name.to_string()));
        }

        fs::read(&file_path)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to read file: {}", e)))
    }

    async fn delete(&self, file_name: &str) -> Result<bool, StorageError> {
        Self::validate_file_name(file_name)?;

        let file_path = self.upload_dir.join(file_name);
        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to delete file: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> LocalImageStorage {
        LocalImageStorage::new(dir.path(), "/api/uploads")
    }

    #[tokio::test]
    async fn test_store_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let stored = storage.store(&data, "jpg").await.unwrap();

        assert!(stored.file_name.ends_with(".jpg"));
        assert!(stored.url.starts_with("/api/uploads/"));

        let read_back = storage.read(&stored.file_name).await.unwrap();
        assert_eq!(read_back, data);
    }

    #[tokio::test]
    async fn test_extension_is_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let stored = storage.store(b"data", ".PNG").await.unwrap();
        assert!(stored.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_unsupported_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let result = storage.store(b"data", "svg").await;
        assert!(matches!(result, Err(StorageError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let data = vec![0u8; MAX_IMAGE_BYTES + 1];
        let result = storage.store(&data, "jpg").await;
        assert!(matches!(result, Err(StorageError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let result = storage.read("missing.jpg").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        for name in ["../secret", "a/b.jpg", ".hidden", ""] {
            let result = storage.read(name).await;
            assert!(
                matches!(result, Err(StorageError::InvalidPath(_))),
                "expected InvalidPath for {name:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let stored = storage.store(b"data", "jpg").await.unwrap();
        assert!(storage.delete(&stored.file_name).await.unwrap());
        assert!(!storage.delete(&stored.file_name).await.unwrap());
        assert!(matches!(
            storage.read(&stored.file_name).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_rejects_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let result = storage.delete("../secret").await;
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn test_generated_names_are_unique() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let a = storage.store(b"one", "jpg").await.unwrap();
        let b = storage.store(b"two", "jpg").await.unwrap();
        assert_ne!(a.file_name, b.file_name);
    }
}
