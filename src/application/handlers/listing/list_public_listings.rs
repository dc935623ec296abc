//! ListPublicListingsHandler - Query handler for the public marketplace feed.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::listing::{Listing, ListingError, PublicListingFilter};
use crate::ports::ListingRepository;

/// Query for the public listing feed.
#[derive(Debug, Clone, Default)]
pub struct ListPublicListingsQuery {
    pub filter: PublicListingFilter,
}

/// Handler for the public feed: visible listings only, newest first.
pub struct ListPublicListingsHandler {
    listings: Arc<dyn ListingRepository>,
}

impl ListPublicListingsHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, query: ListPublicListingsQuery) -> Result<Vec<Listing>, ListingError> {
        self.handle_at(query, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        query: ListPublicListingsQuery,
        now: Timestamp,
    ) -> Result<Vec<Listing>, ListingError> {
        self.listings.list_visible(&query.filter, now).await
    }
}
