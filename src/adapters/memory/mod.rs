//! In-memory adapters.
//!
//! Full-fidelity implementations of the persistence ports, used by
//! handler tests and available for local development without Postgres.

mod listing_repository;
mod payment_record_repository;
mod webhook_event_repository;

pub use listing_repository::InMemoryListingRepository;
pub use payment_record_repository::InMemoryPaymentRecordRepository;
pub use webhook_event_repository::InMemoryWebhookEventRepository;
