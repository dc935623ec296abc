//! DeleteListingHandler - Command handler for removing listings.

use std::sync::Arc;

use crate::domain::foundation::{ListingId, UserId};
use crate::domain::listing::ListingError;
use crate::ports::ListingRepository;

/// Command to delete a listing.
#[derive(Debug, Clone)]
pub struct DeleteListingCommand {
    pub listing_id: ListingId,
    pub user_id: UserId,
}

/// Handler for deleting listings. Owner-only; works in any lifecycle state.
pub struct DeleteListingHandler {
    listings: Arc<dyn ListingRepository>,
}

impl DeleteListingHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, cmd: DeleteListingCommand) -> Result<(), ListingError> {
        let listing = self
            .listings
            .find_by_id(cmd.listing_id)
            .await?
            .ok_or(ListingError::NotFound(cmd.listing_id))?;

        if listing.owner_id != cmd.user_id {
            return Err(ListingError::NotOwner);
        }

        self.listings.delete(cmd.listing_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListingRepository;
    use crate::domain::listing::NewListing;

    fn bike(title: &str) -> NewListing {
        NewListing {
            title: title.to_string(),
            brand: None,
            model: None,
            year: None,
            size: None,
            price_usd: None,
            state: None,
            zip: None,
            condition: None,
            description: None,
            photo_urls: vec![],
        }
    }

    #[tokio::test]
    async fn owner_can_delete() {
        let repo = Arc::new(InMemoryListingRepository::new());
        let listing = repo.create(UserId::from_i64(1), bike("Trek 520")).await.unwrap();
        let handler = DeleteListingHandler::new(repo.clone());

        handler
            .handle(DeleteListingCommand {
                listing_id: listing.id,
                user_id: UserId::from_i64(1),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(listing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_owner_cannot_delete() {
        let repo = Arc::new(InMemoryListingRepository::new());
        let listing = repo.create(UserId::from_i64(1), bike("Trek 520")).await.unwrap();
        let handler = DeleteListingHandler::new(repo.clone());

        let result = handler
            .handle(DeleteListingCommand {
                listing_id: listing.id,
                user_id: UserId::from_i64(2),
            })
            .await;

        assert!(matches!(result, Err(ListingError::NotOwner)));
        assert!(repo.find_by_id(listing.id).await.unwrap().is_some());
    }
}
