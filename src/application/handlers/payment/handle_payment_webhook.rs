//! HandlePaymentWebhookHandler - Command handler for payment provider webhooks.
//!
//! This is the only place listing lifecycle state changes. The handler is
//! infallible by design: it returns a [`WebhookOutcome`] rather than an
//! error, because every branch of webhook processing maps to an explicit
//! HTTP response. Internal faults are logged and acknowledged so Stripe
//! does not retry an event whose claim is already burned.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::{
    apply_transition, interpret_event, CheckoutCompletion, IgnoreReason, StripeEvent,
    WebhookOutcome,
};
use crate::ports::{
    ListingRepository, PaymentProvider, PaymentRecord, PaymentRecordRepository, SaveResult,
    WebhookEventRecord, WebhookEventRepository,
};

/// Command to handle a payment webhook delivery.
#[derive(Debug, Clone)]
pub struct HandlePaymentWebhookCommand {
    /// Raw webhook payload, exactly as received.
    pub payload: Vec<u8>,
    /// Value of the Stripe-Signature header.
    pub signature: String,
}

/// Handler for processing payment provider webhooks.
///
/// Flow: verify signature, interpret the event, claim the dedup ledger,
/// then apply the paid-for transition and append the audit record.
pub struct HandlePaymentWebhookHandler {
    listings: Arc<dyn ListingRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    webhook_events: Arc<dyn WebhookEventRepository>,
    payment_records: Arc<dyn PaymentRecordRepository>,
}

impl HandlePaymentWebhookHandler {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
        webhook_events: Arc<dyn WebhookEventRepository>,
        payment_records: Arc<dyn PaymentRecordRepository>,
    ) -> Self {
        Self {
            listings,
            payment_provider,
            webhook_events,
            payment_records,
        }
    }

    pub async fn handle(&self, cmd: HandlePaymentWebhookCommand) -> WebhookOutcome {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: HandlePaymentWebhookCommand,
        now: Timestamp,
    ) -> WebhookOutcome {
        // 1. Verify signature and parse. Failures here are the only
        //    rejections; everything past this point is acknowledged.
        let event = match self
            .payment_provider
            .verify_webhook(&cmd.payload, &cmd.signature)
            .await
        {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "rejecting webhook delivery");
                return WebhookOutcome::Rejected(err);
            }
        };

        // 2. Decide whether the event warrants a transition.
        let completion = match interpret_event(&event) {
            Ok(completion) => completion,
            Err(reason) => {
                tracing::info!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    reason = %reason,
                    "acknowledging webhook without action"
                );
                return WebhookOutcome::Ignored(reason);
            }
        };

        // 3. Claim the event id before any side effects. A duplicate
        //    delivery loses the claim and is acknowledged as a no-op.
        match self.claim_event(&event, &completion, &cmd.payload).await {
            Ok(SaveResult::Inserted) => {}
            Ok(SaveResult::AlreadyExists) => {
                tracing::info!(event_id = %event.id, "duplicate webhook delivery");
                return WebhookOutcome::Ignored(IgnoreReason::DuplicateDelivery);
            }
            Err(err) => {
                tracing::error!(event_id = %event.id, error = %err, "webhook ledger claim failed");
                return WebhookOutcome::Ignored(IgnoreReason::InternalFault);
            }
        }

        self.apply_completion(&event, completion, now).await
    }

    async fn claim_event(
        &self,
        event: &StripeEvent,
        completion: &CheckoutCompletion,
        payload: &[u8],
    ) -> Result<SaveResult, crate::domain::foundation::DomainError> {
        let payload_json =
            serde_json::from_slice(payload).unwrap_or(serde_json::Value::Null);
        let record = WebhookEventRecord::new(
            event.id.clone(),
            event.event_type.clone(),
            Some(completion.session_id.clone()),
            payload_json,
        );
        self.webhook_events.save(record).await
    }

    async fn apply_completion(
        &self,
        event: &StripeEvent,
        completion: CheckoutCompletion,
        now: Timestamp,
    ) -> WebhookOutcome {
        let listing_id = completion.metadata.listing_id;

        let mut listing = match self.listings.find_by_id(listing_id).await {
            Ok(Some(listing)) => listing,
            Ok(None) => {
                tracing::warn!(
                    event_id = %event.id,
                    listing_id = %listing_id,
                    "paid checkout references a missing listing"
                );
                return WebhookOutcome::Ignored(IgnoreReason::ListingNotFound(listing_id));
            }
            Err(err) => {
                tracing::error!(event_id = %event.id, error = %err, "listing lookup failed");
                return WebhookOutcome::Ignored(IgnoreReason::InternalFault);
            }
        };

        // Stale metadata can disagree with current ownership. The payment
        // already happened, so the transition is applied anyway and the
        // mismatch surfaced for support.
        if let Some(paid_by) = completion.metadata.owner_id {
            if paid_by != listing.owner_id {
                tracing::warn!(
                    event_id = %event.id,
                    listing_id = %listing_id,
                    metadata_owner = %paid_by,
                    current_owner = %listing.owner_id,
                    "webhook owner mismatch; applying transition anyway"
                );
            }
        }

        let action = completion.metadata.action;
        let transition = apply_transition(&mut listing, action, now);

        if let Err(err) = self.listings.update(&listing).await {
            tracing::error!(
                event_id = %event.id,
                listing_id = %listing_id,
                error = %err,
                "failed to persist listing transition"
            );
            return WebhookOutcome::Ignored(IgnoreReason::InternalFault);
        }

        // Audit trail is best effort: a write failure must not undo an
        // applied transition.
        let record = PaymentRecord {
            owner_id: completion.metadata.owner_id,
            listing_id,
            action,
            amount_minor: action.fee_minor_units(),
            currency: crate::domain::payment::CHECKOUT_CURRENCY.to_string(),
            session_id: completion.session_id,
            created_at: now,
        };
        if let Err(err) = self.payment_records.append(record).await {
            tracing::warn!(event_id = %event.id, error = %err, "payment audit append failed");
        }

        tracing::info!(
            event_id = %event.id,
            listing_id = %listing_id,
            transition = %transition.kind,
            expires_at = %transition.expires_at,
            "applied listing transition"
        );

        WebhookOutcome::Applied(transition)
    }
}
