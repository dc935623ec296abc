//! HTTP DTOs for photo upload endpoints.

use serde::Serialize;

/// Response for a stored photo.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Generated file name on disk.
    pub file_name: String,
    /// Public URL to reference from a listing's `photo_urls`.
    pub url: String,
}

/// Response for a photo deletion. Deleting an already-removed file still
/// succeeds; `status` tells the two cases apart.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUploadResponse {
    pub ok: bool,
    /// Either `deleted` or `not_found`.
    pub status: &'static str,
}
