//! Payment domain module.
//!
//! Handles the paid side of the listing lifecycle: checkout pricing and
//! metadata, incoming Stripe webhook verification, and the pure decision
//! logic that turns a verified event into a listing transition.
//!
//! # Module Structure
//!
//! - `checkout` - Checkout actions, fees, and session metadata
//! - `stripe_event` - Wire types for Stripe webhook payloads
//! - `webhook_verifier` - HMAC-SHA256 signature verification with replay protection
//! - `webhook_errors` - Webhook rejection errors with HTTP status mapping
//! - `webhook_processor` - Event interpretation and transition outcomes

mod checkout;
mod stripe_event;
mod webhook_errors;
mod webhook_processor;
mod webhook_verifier;

pub use checkout::{CheckoutAction, CheckoutMetadata, CHECKOUT_CURRENCY, MAX_LABEL_CHARS};
pub use stripe_event::{CheckoutSessionObject, StripeEvent, StripeEventData};
pub use webhook_errors::WebhookError;
pub use webhook_processor::{
    apply_transition, interpret_event, AppliedTransition, CheckoutCompletion, IgnoreReason,
    TransitionKind, WebhookOutcome, CHECKOUT_COMPLETED_EVENT, PAID_STATUS,
};
pub use webhook_verifier::{SignatureHeader, StripeWebhookVerifier};

#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
