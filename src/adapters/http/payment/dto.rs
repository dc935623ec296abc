//! HTTP DTOs for payment endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::PaymentRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a checkout for a listing or renewal fee.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// The listing the fee applies to.
    pub listing_id: i64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a started checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Provider session id, used to correlate the confirmation webhook.
    pub session_id: String,
    /// Hosted checkout page to redirect the owner to.
    pub checkout_url: String,
}

/// Acknowledgement body returned for accepted webhook deliveries.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// One entry in the caller's payment history.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordResponse {
    pub listing_id: i64,
    /// Fee kind: "listing" or "renew".
    pub action: String,
    /// Amount in minor units (cents).
    pub amount_minor: i64,
    pub currency: String,
    pub session_id: String,
    /// When the payment was recorded (ISO 8601).
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentRecordResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            listing_id: record.listing_id.as_i64(),
            action: record.action.as_metadata_value().to_string(),
            amount_minor: record.amount_minor,
            currency: record.currency,
            session_id: record.session_id,
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response wrapping the caller's payment history.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordsResponse {
    pub payments: Vec<PaymentRecordResponse>,
}
