//! Payment provider port for external payment processing.
//!
//! Defines the contract for the payment gateway integration (Stripe).
//! Implementations handle checkout session creation and webhook
//! signature verification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::payment::{StripeEvent, WebhookError};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session for a one-time payment.
    ///
    /// Returns the session id and the URL the buyer is redirected to.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;

    /// Verify a webhook signature and parse the event.
    ///
    /// Returns the parsed event if valid, error if the signature or
    /// timestamp check fails.
    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<StripeEvent, WebhookError>;
}

/// Request to create a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Amount to charge, in minor currency units.
    pub amount_minor: i64,

    /// ISO currency code (lowercase, e.g. "usd").
    pub currency: String,

    /// Product label shown on the checkout page.
    pub product_label: String,

    /// Where the buyer lands after completing payment.
    pub success_url: String,

    /// Where the buyer lands after abandoning checkout.
    pub cancel_url: String,

    /// Metadata echoed back on the completion webhook.
    pub metadata: HashMap<String, String>,
}

/// A created checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID (cs_xxx format).
    pub id: String,

    /// URL for the buyer to complete payment.
    pub url: String,
}

/// Error from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for programmatic handling.
    pub code: PaymentErrorCode,

    /// Human-readable error message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentErrorCode {
    /// Invalid request parameters.
    InvalidRequest,
    /// Authentication with provider failed.
    AuthenticationFailed,
    /// Provider rate limit exceeded.
    RateLimited,
    /// Provider internal error.
    ProviderError,
    /// Network or connection error.
    NetworkError,
}

impl PaymentError {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: PaymentErrorCode::InvalidRequest,
            message: message.into(),
            provider_code: None,
            retryable: false,
        }
    }

    /// Creates a provider error.
    pub fn provider_error(message: impl Into<String>, provider_code: Option<String>) -> Self {
        Self {
            code: PaymentErrorCode::ProviderError,
            message: message.into(),
            provider_code,
            retryable: true,
        }
    }

    /// Creates a network error.
    pub fn network_error(message: impl Into<String>) -> Self {
        Self {
            code: PaymentErrorCode::NetworkError,
            message: message.into(),
            provider_code: None,
            retryable: true,
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}
