//! Webhook rejection errors for Stripe webhook handling.
//!
//! These cover the cases where a delivery is refused outright, before any
//! business processing. Stripe retries on 5xx; everything here is a 4xx
//! so a bad delivery is never retried.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that reject a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Webhook signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Webhook timestamp is older than the acceptable window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse the webhook payload or signature header.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// Maps the error to the HTTP status code returned to Stripe.
    ///
    /// All rejections are 4xx, which stops Stripe from retrying a
    /// delivery that can never succeed.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSignature | WebhookError::TimestampOutOfRange => {
                StatusCode::UNAUTHORIZED
            }
            WebhookError::InvalidTimestamp | WebhookError::ParseError(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
