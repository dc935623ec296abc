//! Payment handlers.
//!
//! Command handlers for the paid side of the listing lifecycle:
//!
//! - Starting checkout sessions for listing and renewal fees
//! - Consuming payment provider webhooks and applying transitions

mod begin_checkout;
mod handle_payment_webhook;

pub use begin_checkout::{BeginCheckoutCommand, BeginCheckoutHandler, BeginCheckoutResult};
pub use handle_payment_webhook::{HandlePaymentWebhookCommand, HandlePaymentWebhookHandler};
