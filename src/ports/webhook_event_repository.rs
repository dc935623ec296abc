//! WebhookEventRepository port - dedup ledger for Stripe webhooks.
//!
//! Stripe may deliver the same event multiple times: network timeouts,
//! endpoint errors, or an acknowledgement that never arrived. The ledger
//! claims each event id before any side effects run, so a redelivery is
//! detected and acknowledged without acting twice.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::DomainError;

/// Record of a claimed webhook event.
#[derive(Debug, Clone)]
pub struct WebhookEventRecord {
    /// Stripe event ID (evt_xxx format), the dedup key.
    pub event_id: String,

    /// Type of Stripe event (e.g., "checkout.session.completed").
    pub event_type: String,

    /// Checkout session id, when the event carried one.
    pub session_id: Option<String>,

    /// Original event payload for debugging.
    pub payload: serde_json::Value,

    /// When the event was claimed.
    pub processed_at: DateTime<Utc>,
}

impl WebhookEventRecord {
    /// Creates a record for a freshly received event.
    pub fn new(
        event_id: impl Into<String>,
        event_type: impl Into<String>,
        session_id: Option<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_type: event_type.into(),
            session_id,
            payload,
            processed_at: Utc::now(),
        }
    }
}

/// Result of attempting to claim a webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Record was inserted (first time seeing this event).
    Inserted,
    /// Record already exists (duplicate delivery).
    AlreadyExists,
}

/// Port for the processed-webhook ledger.
///
/// Implementations should rely on a database constraint (PRIMARY KEY on
/// event_id) so concurrent deliveries of the same event race safely.
#[async_trait]
pub trait WebhookEventRepository: Send + Sync {
    /// Find a previously claimed event by its Stripe event ID.
    async fn find_by_event_id(
        &self,
        event_id: &str,
    ) -> Result<Option<WebhookEventRecord>, DomainError>;

    /// Attempt to claim a webhook event.
    ///
    /// Uses `ON CONFLICT DO NOTHING` semantics. Returns `Inserted` when
    /// this delivery won the claim, `AlreadyExists` when another did.
    async fn save(&self, record: WebhookEventRecord) -> Result<SaveResult, DomainError>;
}
