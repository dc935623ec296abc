//! BeginCheckoutHandler - Command handler for starting a lifecycle payment.

use std::sync::Arc;

use crate::domain::foundation::{ListingId, UserId};
use crate::domain::listing::ListingError;
use crate::domain::payment::{CheckoutAction, CheckoutMetadata, CHECKOUT_CURRENCY};
use crate::ports::{CheckoutSession, CreateCheckoutRequest, ListingRepository, PaymentProvider};

/// Command to begin a checkout for a listing or renewal fee.
#[derive(Debug, Clone)]
pub struct BeginCheckoutCommand {
    pub listing_id: ListingId,
    pub user_id: UserId,
    pub action: CheckoutAction,
}

/// Result of a started checkout: where to send the buyer.
#[derive(Debug, Clone)]
pub struct BeginCheckoutResult {
    pub session: CheckoutSession,
}

/// Handler for starting lifecycle payments.
///
/// Creates a provider checkout session and nothing else. The listing is
/// not touched here; every lifecycle change waits for the payment
/// confirmation webhook.
pub struct BeginCheckoutHandler {
    listings: Arc<dyn ListingRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    public_site_url: String,
}

impl BeginCheckoutHandler {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
        public_site_url: String,
    ) -> Self {
        Self {
            listings,
            payment_provider,
            public_site_url,
        }
    }

    pub async fn handle(
        &self,
        cmd: BeginCheckoutCommand,
    ) -> Result<BeginCheckoutResult, ListingError> {
        // 1. The listing must exist and belong to the caller.
        let listing = self
            .listings
            .find_by_id(cmd.listing_id)
            .await?
            .ok_or(ListingError::NotFound(cmd.listing_id))?;

        if listing.owner_id != cmd.user_id {
            return Err(ListingError::NotOwner);
        }

        // 2. The listing fee only applies to drafts. Renewal is allowed in
        //    any published state, including already expired.
        if cmd.action == CheckoutAction::Listing && !listing.is_draft() {
            return Err(ListingError::invalid_state(
                "listing is already published; use renewal instead",
            ));
        }

        // 3. Create the provider session. Metadata carries everything the
        //    webhook consumer needs to apply the transition later.
        let metadata = CheckoutMetadata {
            action: cmd.action,
            listing_id: listing.id,
            owner_id: Some(listing.owner_id),
        };

        let session = self
            .payment_provider
            .create_checkout_session(CreateCheckoutRequest {
                amount_minor: cmd.action.fee_minor_units(),
                currency: CHECKOUT_CURRENCY.to_string(),
                product_label: cmd.action.product_label(&listing.title),
                success_url: format!(
                    "{}/pay/success?listing={}&session_id={{CHECKOUT_SESSION_ID}}",
                    self.public_site_url, listing.id
                ),
                cancel_url: format!("{}/listings/{}", self.public_site_url, listing.id),
                metadata: metadata.to_map(),
            })
            .await
            .map_err(|e| ListingError::payment_provider(e.message))?;

        Ok(BeginCheckoutResult { session })
    }
}
