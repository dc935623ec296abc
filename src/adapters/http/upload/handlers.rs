//! HTTP handlers for photo upload and serving.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::storage::MAX_IMAGE_BYTES;
use crate::ports::StorageError;

use super::super::error::ErrorResponse;
use super::super::middleware::RequireAuth;
use super::super::AppState;
use super::dto::{DeleteUploadResponse, UploadResponse};

/// Wrapper that maps storage failures to HTTP responses.
pub struct UploadError(pub StorageError);

impl From<StorageError> for UploadError {
    fn from(err: StorageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            StorageError::NotFound(_) => (StatusCode::NOT_FOUND, "FILE_NOT_FOUND"),
            StorageError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT"),
            StorageError::TooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE"),
            StorageError::InvalidPath(_) => (StatusCode::BAD_REQUEST, "INVALID_PATH"),
            StorageError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "storage operation failed");
        }

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// Maps a multipart read failure to a storage error. A body that blows
/// through the request size limit surfaces here as a 413 from axum, and
/// must keep that status rather than degrade to a generic IO error.
fn multipart_error(err: MultipartError) -> StorageError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StorageError::TooLarge {
            max_bytes: MAX_IMAGE_BYTES,
        }
    } else {
        StorageError::IoError(format!("Malformed multipart body: {}", err))
    }
}

/// POST /api/uploads - Store a listing photo.
///
/// Accepts a multipart form with a single `file` field. The stored file
/// gets a generated name; the response carries the public URL to put on
/// a listing's `photo_urls`.
pub async fn upload_photo(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UploadError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit('.').next().map(str::to_string))
            .ok_or_else(|| StorageError::UnsupportedFormat("missing file extension".to_string()))?;

        let data = field.bytes().await.map_err(multipart_error)?;

        let stored = state.image_storage.store(&data, &extension).await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                file_name: stored.file_name,
                url: stored.url,
            }),
        ));
    }

    Err(UploadError(StorageError::InvalidPath(
        "missing file field".to_string(),
    )))
}

/// GET /api/uploads/:file_name - Serve a stored photo.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, UploadError> {
    let data = state.image_storage.read(&file_name).await?;
    let content_type = content_type_for(&file_name);

    Ok(([(header::CONTENT_TYPE, content_type)], data))
}

/// DELETE /api/uploads/:file_name - Remove a stored photo.
///
/// Deleting a file that is already gone still succeeds, so the client can
/// retry cleanup without special-casing the second attempt.
pub async fn delete_photo(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, UploadError> {
    let removed = state.image_storage.delete(&file_name).await?;

    Ok(Json(DeleteUploadResponse {
        ok: true,
        status: if removed { "deleted" } else { "not_found" },
    }))
}

fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
