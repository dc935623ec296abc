//! CreateListingHandler - Command handler for creating draft listings.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::listing::{Listing, ListingError, NewListing};
use crate::ports::ListingRepository;

/// Command to create a new draft listing.
#[derive(Debug, Clone)]
pub struct CreateListingCommand {
    pub owner_id: UserId,
    pub new_listing: NewListing,
}

/// Handler for creating draft listings.
///
/// New listings are always drafts; publication happens through the paid
/// checkout flow, never at creation time.
pub struct CreateListingHandler {
    listings: Arc<dyn ListingRepository>,
}

impl CreateListingHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, cmd: CreateListingCommand) -> Result<Listing, ListingError> {
        cmd.new_listing.validate()?;
        self.listings.create(cmd.owner_id, cmd.new_listing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListingRepository;

    fn new_listing(title: &str) -> NewListing {
        NewListing {
            title: title.to_string(),
            brand: None,
            model: None,
            year: Some(2020),
            size: None,
            price_usd: Some(500),
            state: Some("OR".to_string()),
            zip: None,
            condition: None,
            description: None,
            photo_urls: vec![],
        }
    }

    #[tokio::test]
    async fn created_listing_is_a_draft() {
        let repo = Arc::new(InMemoryListingRepository::new());
        let handler = CreateListingHandler::new(repo);

        let listing = handler
            .handle(CreateListingCommand {
                owner_id: UserId::from_i64(1),
                new_listing: new_listing("Bianchi Volpe"),
            })
            .await
            .unwrap();

        assert!(listing.is_draft());
        assert!(!listing.is_active);
        assert_eq!(listing.expires_at, None);
        assert_eq!(listing.version, 1);
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_persistence() {
        let repo = Arc::new(InMemoryListingRepository::new());
        let handler = CreateListingHandler::new(repo.clone());

        let result = handler
            .handle(CreateListingCommand {
                owner_id: UserId::from_i64(1),
                new_listing: new_listing("   "),
            })
            .await;

        assert!(matches!(result, Err(ListingError::Validation(_))));
        assert!(repo
            .list_by_owner(UserId::from_i64(1))
            .await
            .unwrap()
            .is_empty());
    }
}
