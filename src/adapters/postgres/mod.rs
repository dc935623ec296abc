//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresListingRepository` - Listing storage with optimistic locking
//! - `PostgresWebhookEventRepository` - Webhook dedup ledger with claim-first inserts
//! - `PostgresPaymentRecordRepository` - Append-only payment audit trail

mod listing_repository;
mod payment_record_repository;
mod webhook_event_repository;

pub use listing_repository::PostgresListingRepository;
pub use payment_record_repository::PostgresPaymentRecordRepository;
pub use webhook_event_repository::PostgresWebhookEventRepository;
