//! ListMyListingsHandler - Query handler for the owner's dashboard.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::listing::{Listing, ListingError};
use crate::ports::ListingRepository;

/// Query for all listings owned by the caller.
#[derive(Debug, Clone)]
pub struct ListMyListingsQuery {
    pub owner_id: UserId,
}

/// Handler for the owner's dashboard.
///
/// Bypasses visibility: drafts and expired listings are included so the
/// owner can finish or renew them.
pub struct ListMyListingsHandler {
    listings: Arc<dyn ListingRepository>,
}

impl ListMyListingsHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, query: ListMyListingsQuery) -> Result<Vec<Listing>, ListingError> {
        self.listings.list_by_owner(query.owner_id).await
    }
}
