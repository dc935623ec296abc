//! PaymentRecordRepository port - append-only payment audit trail.
//!
//! Every applied webhook appends one row describing who paid what for
//! which listing. The trail is never updated or deleted by the
//! application; it exists for support and reconciliation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ListingId, Timestamp, UserId};
use crate::domain::payment::CheckoutAction;

/// One completed lifecycle payment.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    /// User who paid, as reported by session metadata.
    pub owner_id: Option<UserId>,

    /// Listing the payment applied to.
    pub listing_id: ListingId,

    /// Which lifecycle action was paid for.
    pub action: CheckoutAction,

    /// Amount charged, in minor currency units.
    pub amount_minor: i64,

    /// ISO currency code.
    pub currency: String,

    /// Stripe checkout session id.
    pub session_id: String,

    /// When the payment was recorded.
    pub created_at: Timestamp,
}

/// Port for the payment audit trail.
#[async_trait]
pub trait PaymentRecordRepository: Send + Sync {
    /// Append a completed payment to the trail.
    async fn append(&self, record: PaymentRecord) -> Result<(), DomainError>;

    /// List payments made by one user, newest first.
    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<PaymentRecord>, DomainError>;
}
