//! Mock payment provider for testing.
//!
//! A configurable `PaymentProvider` for unit and integration tests:
//! request capture, error injection, and a fixed-signature webhook
//! verification mode so tests need not compute HMACs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::payment::{StripeEvent, WebhookError};
use crate::ports::{CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentProvider};

/// Mock payment provider.
///
/// Checkout sessions are minted with deterministic ids and every request
/// is captured for assertions. `verify_webhook` accepts exactly
/// [`MockPaymentProvider::VALID_SIGNATURE`] and then parses the payload
/// as the real adapter would.
#[derive(Default)]
pub struct MockPaymentProvider {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    /// Captured checkout requests, in call order.
    checkout_requests: Vec<CreateCheckoutRequest>,

    /// Error to return from the next checkout call.
    next_checkout_error: Option<PaymentError>,
}

impl MockPaymentProvider {
    /// The signature accepted by `verify_webhook`.
    pub const VALID_SIGNATURE: &'static str = "t=0,v1=mock";

    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `create_checkout_session` call with this error.
    pub fn fail_next_checkout(&self, error: PaymentError) {
        self.state.lock().unwrap().next_checkout_error = Some(error);
    }

    /// The most recent captured checkout request, if any.
    pub fn last_checkout_request(&self) -> Option<CreateCheckoutRequest> {
        self.state.lock().unwrap().checkout_requests.last().cloned()
    }

    /// Number of checkout sessions created.
    pub fn checkout_count(&self) -> usize {
        self.state.lock().unwrap().checkout_requests.len()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.next_checkout_error.take() {
            return Err(error);
        }

        state.checkout_requests.push(request);
        let n = state.checkout_requests.len();
        Ok(CheckoutSession {
            id: format!("cs_mock_{n}"),
            url: format!("https://checkout.stripe.test/c/pay/cs_mock_{n}"),
        })
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<StripeEvent, WebhookError> {
        if signature != Self::VALID_SIGNATURE {
            return Err(WebhookError::InvalidSignature);
        }
        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }
}
