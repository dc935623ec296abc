//! HTTP error mapping for listing API responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::listing::ListingError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
pub struct ApiError(pub ListingError);

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::ValidationError> for ApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(ListingError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            ListingError::NotFound(_) => (StatusCode::NOT_FOUND, "LISTING_NOT_FOUND"),
            ListingError::NotOwner => (StatusCode::FORBIDDEN, "NOT_OWNER"),
            ListingError::InvalidState(_) => (StatusCode::CONFLICT, "INVALID_STATE"),
            ListingError::ConcurrencyConflict => (StatusCode::CONFLICT, "CONCURRENCY_CONFLICT"),
            ListingError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ListingError::PaymentProvider(_) => (StatusCode::BAD_GATEWAY, "PAYMENT_PROVIDER_ERROR"),
            ListingError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
