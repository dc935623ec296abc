//! Pure decision logic for verified webhook events.
//!
//! The application handler deals with verification, persistence, and
//! logging; the functions here only decide what a verified event means
//! for a listing. Keeping this pure makes every branch of the webhook
//! contract testable without adapters.

use crate::domain::foundation::{ListingId, Timestamp};
use crate::domain::listing::Listing;
use std::fmt;

use super::checkout::{CheckoutAction, CheckoutMetadata};
use super::stripe_event::{CheckoutSessionObject, StripeEvent};
use super::webhook_errors::WebhookError;

/// The only event type that triggers a listing transition.
pub const CHECKOUT_COMPLETED_EVENT: &str = "checkout.session.completed";

/// The only payment status that counts as money received.
pub const PAID_STATUS: &str = "paid";

/// Final outcome of processing one webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The event changed a listing's lifecycle state.
    Applied(AppliedTransition),
    /// The event was acknowledged but deliberately not acted on.
    Ignored(IgnoreReason),
    /// The delivery was refused before any processing.
    Rejected(WebhookError),
}

/// A lifecycle transition that was applied to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTransition {
    pub listing_id: ListingId,
    pub kind: TransitionKind,
    pub expires_at: Timestamp,
}

/// Which transition a paid checkout produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// A draft became visible with a fresh window.
    Published,
    /// An existing window was extended.
    Extended,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => f.write_str("published"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// Why an acknowledged event produced no transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Event type other than `checkout.session.completed`.
    IrrelevantEventType(String),
    /// Completed session whose payment status is not `paid`.
    NotPaid,
    /// Session metadata missing or unparseable.
    MalformedMetadata(String),
    /// Metadata referenced a listing that no longer exists.
    ListingNotFound(ListingId),
    /// Same event id was already processed.
    DuplicateDelivery,
    /// An internal failure was swallowed so Stripe does not retry.
    InternalFault,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IrrelevantEventType(event_type) => {
                write!(f, "irrelevant event type '{event_type}'")
            }
            Self::NotPaid => f.write_str("session not paid"),
            Self::MalformedMetadata(detail) => write!(f, "malformed metadata: {detail}"),
            Self::ListingNotFound(id) => write!(f, "listing {id} not found"),
            Self::DuplicateDelivery => f.write_str("duplicate delivery"),
            Self::InternalFault => f.write_str("internal fault"),
        }
    }
}

/// A checkout completion that warrants a listing transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutCompletion {
    /// Stripe session id, recorded in the processed-event ledger.
    pub session_id: String,
    /// Metadata identifying the listing and the action paid for.
    pub metadata: CheckoutMetadata,
}

/// Decides whether a verified event warrants a transition.
///
/// Returns the completion details, or the reason the event should be
/// acknowledged without action. Every non-actionable branch lands here,
/// never in an error path.
pub fn interpret_event(event: &StripeEvent) -> Result<CheckoutCompletion, IgnoreReason> {
    if event.event_type != CHECKOUT_COMPLETED_EVENT {
        return Err(IgnoreReason::IrrelevantEventType(event.event_type.clone()));
    }

    let session: CheckoutSessionObject = event
        .deserialize_object()
        .map_err(|e| IgnoreReason::MalformedMetadata(e.to_string()))?;

    if !session.is_paid() {
        return Err(IgnoreReason::NotPaid);
    }

    let metadata =
        CheckoutMetadata::from_map(&session.metadata).map_err(IgnoreReason::MalformedMetadata)?;

    Ok(CheckoutCompletion {
        session_id: session.id,
        metadata,
    })
}

/// Applies the paid-for transition to a listing.
///
/// `Listing` publishes, `Renew` extends. Both leave the listing active;
/// the caller persists the change and records the outcome.
pub fn apply_transition(
    listing: &mut Listing,
    action: CheckoutAction,
    now: Timestamp,
) -> AppliedTransition {
    let kind = match action {
        CheckoutAction::Listing => {
            listing.publish(now);
            TransitionKind::Published
        }
        CheckoutAction::Renew => {
            listing.extend(now);
            TransitionKind::Extended
        }
    };

    AppliedTransition {
        listing_id: listing.id,
        kind,
        // publish/extend always set an expiry
        expires_at: listing.expires_at.unwrap_or(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::payment::stripe_event::StripeEventBuilder;

    fn paid_session(action: &str, listing_id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "cs_test_77",
            "payment_status": "paid",
            "metadata": {
                "type": action,
                "listing_id": listing_id,
                "owner_id": "12"
            }
        })
    }

    #[test]
    fn paid_listing_checkout_is_actionable() {
        let event = StripeEventBuilder::new(CHECKOUT_COMPLETED_EVENT)
            .object(paid_session("listing", "8"))
            .build();

        let completion = interpret_event(&event).unwrap();
        assert_eq!(completion.session_id, "cs_test_77");
        assert_eq!(completion.metadata.action, CheckoutAction::Listing);
        assert_eq!(completion.metadata.listing_id, ListingId::from_i64(8));
        assert_eq!(completion.metadata.owner_id, Some(UserId::from_i64(12)));
    }

    #[test]
    fn other_event_types_are_ignored() {
        let event = StripeEventBuilder::new("invoice.payment_succeeded").build();

        assert_eq!(
            interpret_event(&event),
            Err(IgnoreReason::IrrelevantEventType(
                "invoice.payment_succeeded".to_string()
            ))
        );
    }

    #[test]
    fn unpaid_session_is_ignored() {
        let object = serde_json::json!({
            "id": "cs_unpaid",
            "payment_status": "unpaid",
            "metadata": { "type": "listing", "listing_id": "8" }
        });
        let event = StripeEventBuilder::new(CHECKOUT_COMPLETED_EVENT)
            .object(object)
            .build();

        assert_eq!(interpret_event(&event), Err(IgnoreReason::NotPaid));
    }

    #[test]
    fn missing_payment_status_is_ignored() {
        let object = serde_json::json!({
            "id": "cs_unknown",
            "metadata": { "type": "listing", "listing_id": "8" }
        });
        let event = StripeEventBuilder::new(CHECKOUT_COMPLETED_EVENT)
            .object(object)
            .build();

        assert_eq!(interpret_event(&event), Err(IgnoreReason::NotPaid));
    }

    #[test]
    fn malformed_metadata_is_ignored() {
        let object = serde_json::json!({
            "id": "cs_bad_meta",
            "payment_status": "paid",
            "metadata": { "type": "listing", "listing_id": "not-a-number" }
        });
        let event = StripeEventBuilder::new(CHECKOUT_COMPLETED_EVENT)
            .object(object)
            .build();

        assert!(matches!(
            interpret_event(&event),
            Err(IgnoreReason::MalformedMetadata(_))
        ));
    }

    #[test]
    fn apply_listing_action_publishes() {
        let mut listing = test_listing();
        let now = Timestamp::now();

        let transition = apply_transition(&mut listing, CheckoutAction::Listing, now);

        assert_eq!(transition.kind, TransitionKind::Published);
        assert!(listing.is_active);
        assert_eq!(transition.expires_at, now.add_days(20));
    }

    #[test]
    fn apply_renew_action_extends() {
        let mut listing = test_listing();
        let now = Timestamp::now();
        listing.publish(now);

        let transition = apply_transition(&mut listing, CheckoutAction::Renew, now.add_days(5));

        assert_eq!(transition.kind, TransitionKind::Extended);
        assert_eq!(transition.expires_at, now.add_days(40));
    }

    fn test_listing() -> Listing {
        Listing {
            id: ListingId::from_i64(8),
            owner_id: UserId::from_i64(12),
            title: "Kona Sutra".to_string(),
            brand: None,
            model: None,
            year: None,
            size: None,
            price_usd: Some(600),
            state: Some("WA".to_string()),
            zip: None,
            condition: None,
            description: None,
            photo_urls: vec![],
            is_active: false,
            expires_at: None,
            created_at: Timestamp::now(),
            version: 1,
        }
    }
}
