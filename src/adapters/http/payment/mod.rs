//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment flows via REST API:
//! - `GET /api/payments` - The caller's payment history
//! - `POST /api/payments/checkout/listing` - Start the listing fee checkout
//! - `POST /api/payments/checkout/renew` - Start the renewal fee checkout
//! - `POST /api/webhooks/stripe` - Handle Stripe webhooks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{payment_routes, webhook_routes};
