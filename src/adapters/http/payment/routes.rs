//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::AppState;
use super::handlers::{
    begin_listing_checkout, begin_renewal_checkout, handle_stripe_webhook, list_my_payments,
};

/// Create the payment API router.
///
/// # Routes (require authentication)
/// - `GET /` - The caller's payment history
/// - `POST /checkout/listing` - Start the listing fee checkout
/// - `POST /checkout/renew` - Start the renewal fee checkout
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_payments))
        .route("/checkout/listing", post(begin_listing_checkout))
        .route("/checkout/renew", post(begin_renewal_checkout))
}

/// Create the webhook router.
///
/// This is separate from the payment routes because webhooks don't carry
/// user authentication; they are verified via signature instead.
///
/// # Routes
/// - `POST /stripe` - Handle Stripe webhooks
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/stripe", post(handle_stripe_webhook))
}
