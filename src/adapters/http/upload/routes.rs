//! Axum router configuration for photo upload endpoints.

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::storage::MAX_IMAGE_BYTES;

use super::super::AppState;
use super::handlers::{delete_photo, get_photo, upload_photo};

/// Request body limit for uploads. Leaves headroom above the image cap for
/// multipart boundaries and field headers; anything past this is cut off
/// mid-stream rather than buffered.
const UPLOAD_BODY_LIMIT_BYTES: usize = MAX_IMAGE_BYTES + 64 * 1024;

/// Create the upload API router.
///
/// # Routes
/// - `POST /` - Store a listing photo (requires authentication)
/// - `GET /:file_name` - Serve a stored photo
/// - `DELETE /:file_name` - Remove a stored photo (requires authentication)
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_photo))
        .route("/:file_name", get(get_photo).delete(delete_photo))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT_BYTES))
}

#[cfg(test)]
mod tests {
    use crate::adapters::auth::MockTokenVerifier;
    use crate::adapters::http::{api_router, test_support, AppState};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "pedalpost-test-boundary";

    fn authed_state() -> AppState {
        AppState {
            token_verifier: Arc::new(MockTokenVerifier::new().with_user_id("upload-token", 7)),
            ..test_support::test_state()
        }
    }

    fn multipart_body(payload_len: usize) -> Vec<u8> {
        let mut body = Vec::with_capacity(payload_len + 256);
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"photo.jpg\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.resize(body.len() + payload_len, 0xAB);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn upload_request(payload_len: usize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/uploads")
            .header(header::AUTHORIZATION, "Bearer upload-token")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(payload_len)))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_between_two_and_five_megabytes_is_accepted() {
        let router = api_router(authed_state());

        let response = router
            .oneshot(upload_request(3 * 1024 * 1024))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn upload_past_the_body_limit_is_rejected_as_too_large() {
        let router = api_router(authed_state());

        let response = router
            .oneshot(upload_request(6 * 1024 * 1024))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn upload_without_token_is_rejected() {
        let router = api_router(authed_state());

        let request = Request::builder()
            .method("POST")
            .uri("/uploads")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(16)))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn delete_of_missing_photo_still_succeeds() {
        let router = api_router(authed_state());

        let request = Request::builder()
            .method("DELETE")
            .uri("/uploads/gone.jpg")
            .header(header::AUTHORIZATION, "Bearer upload-token")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
