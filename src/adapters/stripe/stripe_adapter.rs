//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe REST API
//! for one-time Checkout payments and webhook verification.
//!
//! # Security
//!
//! - Webhook verification via `StripeWebhookVerifier` (HMAC-SHA256,
//!   constant-time comparison, replay window)
//! - Secrets handled via `secrecy::SecretString`

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::payment::{StripeEvent, StripeWebhookVerifier, WebhookError};
use crate::ports::{
    CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentProvider,
};

/// Configuration for the Stripe adapter.
pub struct StripeConfig {
    /// Secret API key (sk_xxx format).
    api_key: SecretString,

    /// Webhook signing secret (whsec_xxx format).
    webhook_secret: SecretString,

    /// API base URL, overridable for tests.
    api_base_url: String,
}

impl StripeConfig {
    pub fn new(api_key: SecretString, webhook_secret: SecretString) -> Self {
        Self {
            api_key,
            webhook_secret,
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Override the API base URL (for a stub server in tests).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment gateway.
pub struct StripePaymentGateway {
    config: StripeConfig,
    verifier: StripeWebhookVerifier,
    http_client: reqwest::Client,
}

/// Checkout session response from the Stripe API.
#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    url: Option<String>,
}

impl StripePaymentGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        let verifier = StripeWebhookVerifier::new(config.webhook_secret.clone());
        Self {
            config,
            verifier,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentGateway {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let mut params = vec![
            ("mode", "payment".to_string()),
            (
                "line_items[0][price_data][currency]",
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                request.product_label.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                request.amount_minor.to_string(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ];

        let metadata_params: Vec<(String, String)> = request
            .metadata
            .iter()
            .map(|(key, value)| (format!("metadata[{key}]"), value.clone()))
            .collect();
        for (key, value) in &metadata_params {
            params.push((key.as_str(), value.clone()));
        }

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network_error(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Stripe checkout session creation failed");
            return Err(PaymentError::provider_error(
                format!("Stripe API error: {error_text}"),
                Some(status.to_string()),
            ));
        }

        let session: StripeCheckoutSessionResponse = response.json().await.map_err(|e| {
            PaymentError::provider_error(format!("Failed to parse Stripe response: {e}"), None)
        })?;

        let checkout_url = session
            .url
            .unwrap_or_else(|| format!("https://checkout.stripe.com/c/pay/{}", session.id));

        Ok(CheckoutSession {
            id: session.id,
            url: checkout_url,
        })
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<StripeEvent, WebhookError> {
        self.verifier.verify_and_parse(payload, signature)
    }
}
