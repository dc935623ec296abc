//! ImageStorage port for listing photo files.

use async_trait::async_trait;

/// Errors that can occur during image storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File not found.
    NotFound(String),
    /// Extension is not an accepted image format.
    UnsupportedFormat(String),
    /// Upload exceeds the size limit.
    TooLarge { max_bytes: usize },
    /// Invalid or unsafe file name.
    InvalidPath(String),
    /// IO error.
    IoError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "File not found: {}", name),
            Self::UnsupportedFormat(ext) => write!(f, "Unsupported image format: {}", ext),
            Self::TooLarge { max_bytes } => {
                write!(f, "Image exceeds the {} byte limit", max_bytes)
            }
            Self::InvalidPath(name) => write!(f, "Invalid path: {}", name),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A stored image and where it can be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Generated file name on disk.
    pub file_name: String,
    /// Public URL path for the image.
    pub url: String,
}

/// File storage operations for listing photos.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store image bytes under a freshly generated name.
    ///
    /// The extension decides the stored file's suffix and must be one of
    /// the accepted image formats.
    async fn store(&self, data: &[u8], extension: &str) -> Result<StoredImage, StorageError>;

    /// Read a stored image back by its generated file name.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Remove a stored image. Returns `false` when the file was already
    /// gone, keeping deletion idempotent for callers cleaning up.
    async fn delete(&self, file_name: &str) -> Result<bool, StorageError>;
}
