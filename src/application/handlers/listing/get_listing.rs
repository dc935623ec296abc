//! GetListingHandler - Query handler for fetching a single listing.

use std::sync::Arc;

use crate::domain::foundation::{ListingId, Timestamp, UserId};
use crate::domain::listing::{Listing, ListingError};
use crate::ports::ListingRepository;

/// Query for a single listing.
#[derive(Debug, Clone)]
pub struct GetListingQuery {
    pub listing_id: ListingId,
    /// The authenticated caller, if any. Owners see their own drafts.
    pub caller: Option<UserId>,
}

/// Handler for fetching one listing.
///
/// Visibility rules apply: anonymous callers and non-owners only see
/// listings that are currently visible. Invisible listings read as not
/// found so drafts are not enumerable.
pub struct GetListingHandler {
    listings: Arc<dyn ListingRepository>,
}

impl GetListingHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, query: GetListingQuery) -> Result<Listing, ListingError> {
        self.handle_at(query, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        query: GetListingQuery,
        now: Timestamp,
    ) -> Result<Listing, ListingError> {
        let listing = self
            .listings
            .find_by_id(query.listing_id)
            .await?
            .ok_or(ListingError::NotFound(query.listing_id))?;

        let is_owner = query.caller == Some(listing.owner_id);
        if !is_owner && !listing.is_visible(now) {
            return Err(ListingError::NotFound(query.listing_id));
        }

        Ok(listing)
    }
}
