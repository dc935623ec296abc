//! Stripe webhook event types.
//!
//! Wire structures for parsing Stripe webhook payloads. Only the fields
//! the listing lifecycle consumes are captured; everything else in
//! Stripe's event schema is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stripe webhook event (simplified).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: StripeEventData,

    /// Whether this is a live mode event (vs test mode).
    pub livemode: bool,

    /// API version used to render this event.
    pub api_version: String,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// Returns true if this is a live mode event.
    pub fn is_live(&self) -> bool {
        self.livemode
    }

    /// Attempts to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// The checkout session object carried by `checkout.session.completed`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSessionObject {
    /// Session identifier (cs_xxx format).
    pub id: String,

    /// Payment status reported by Stripe ("paid", "unpaid", "no_payment_required").
    pub payment_status: Option<String>,

    /// Metadata attached when the session was created.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CheckoutSessionObject {
    /// Returns true if Stripe reports this session as paid.
    pub fn is_paid(&self) -> bool {
        self.payment_status.as_deref() == Some(super::webhook_processor::PAID_STATUS)
    }
}

/// Builder for Stripe events in tests.
#[cfg(test)]
pub struct StripeEventBuilder {
    id: String,
    event_type: String,
    object: serde_json::Value,
    livemode: bool,
}

#[cfg(test)]
impl StripeEventBuilder {
    pub fn new(event_type: &str) -> Self {
        Self {
            id: "evt_test_1".to_string(),
            event_type: event_type.to_string(),
            object: serde_json::json!({}),
            livemode: false,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn object(mut self, object: serde_json::Value) -> Self {
        self.object = object;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> StripeEvent {
        StripeEvent {
            id: self.id,
            event_type: self.event_type,
            created: 1_704_067_200,
            data: StripeEventData { object: self.object },
            livemode: self.livemode,
            api_version: "2023-10-16".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_checkout_completed_event() {
        let payload = serde_json::json!({
            "id": "evt_abc123",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {
                "object": {
                    "id": "cs_test_456",
                    "payment_status": "paid",
                    "metadata": {
                        "type": "listing",
                        "listing_id": "9",
                        "owner_id": "3"
                    }
                }
            },
            "livemode": false,
            "api_version": "2023-10-16"
        });

        let event: StripeEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event.id, "evt_abc123");
        assert_eq!(event.event_type, "checkout.session.completed");
        assert!(!event.is_live());

        let session: CheckoutSessionObject = event.deserialize_object().unwrap();
        assert_eq!(session.id, "cs_test_456");
        assert!(session.is_paid());
        assert_eq!(session.metadata.get("listing_id").map(String::as_str), Some("9"));
    }

    #[test]
    fn session_without_metadata_defaults_to_empty_map() {
        let object = serde_json::json!({ "id": "cs_1", "payment_status": "unpaid" });
        let session: CheckoutSessionObject = serde_json::from_value(object).unwrap();
        assert!(session.metadata.is_empty());
        assert!(!session.is_paid());
    }

    #[test]
    fn no_payment_required_is_not_paid() {
        let object = serde_json::json!({
            "id": "cs_2",
            "payment_status": "no_payment_required"
        });
        let session: CheckoutSessionObject = serde_json::from_value(object).unwrap();
        assert!(!session.is_paid());
    }
}
