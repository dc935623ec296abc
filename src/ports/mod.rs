//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ListingRepository` - Listing storage with optimistic locking
//! - `WebhookEventRepository` - Stripe webhook dedup ledger
//! - `PaymentRecordRepository` - Append-only payment audit trail
//!
//! ## Integration Ports
//!
//! - `PaymentProvider` - Checkout sessions and webhook verification
//! - `TokenVerifier` - Bearer token validation
//! - `ImageStorage` - Listing photo files

mod image_storage;
mod listing_repository;
mod payment_provider;
mod payment_record_repository;
mod token_verifier;
mod webhook_event_repository;

pub use image_storage::{ImageStorage, StorageError, StoredImage};
pub use listing_repository::ListingRepository;
pub use payment_provider::{
    CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentErrorCode, PaymentProvider,
};
pub use payment_record_repository::{PaymentRecord, PaymentRecordRepository};
pub use token_verifier::TokenVerifier;
pub use webhook_event_repository::{SaveResult, WebhookEventRecord, WebhookEventRepository};
