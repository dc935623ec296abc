//! UpdateListingHandler - Command handler for editing listing details.

use std::sync::Arc;

use crate::domain::foundation::{ListingId, UserId};
use crate::domain::listing::{Listing, ListingError, ListingUpdate};
use crate::ports::ListingRepository;

/// Command to update a listing's descriptive fields.
#[derive(Debug, Clone)]
pub struct UpdateListingCommand {
    pub listing_id: ListingId,
    pub user_id: UserId,
    pub update: ListingUpdate,
}

/// Handler for editing listings.
///
/// Owner-only. The update payload has no lifecycle fields, so edits can
/// never publish, hide, or extend a listing.
pub struct UpdateListingHandler {
    listings: Arc<dyn ListingRepository>,
}

impl UpdateListingHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(&self, cmd: UpdateListingCommand) -> Result<Listing, ListingError> {
        cmd.update.validate()?;

        let mut listing = self
            .listings
            .find_by_id(cmd.listing_id)
            .await?
            .ok_or(ListingError::NotFound(cmd.listing_id))?;

        if listing.owner_id != cmd.user_id {
            return Err(ListingError::NotOwner);
        }

        listing.apply_update(cmd.update);
        self.listings.update(&listing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListingRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::listing::NewListing;

    async fn seeded_repo() -> (Arc<InMemoryListingRepository>, Listing) {
        let repo = Arc::new(InMemoryListingRepository::new());
        let listing = repo
            .create(
                UserId::from_i64(1),
                NewListing {
                    title: "Salsa Vaya".to_string(),
                    brand: Some("Salsa".to_string()),
                    model: None,
                    year: None,
                    size: None,
                    price_usd: Some(900),
                    state: Some("MN".to_string()),
                    zip: None,
                    condition: None,
                    description: None,
                    photo_urls: vec![],
                },
            )
            .await
            .unwrap();
        (repo, listing)
    }

    #[tokio::test]
    async fn owner_can_update_descriptive_fields() {
        let (repo, listing) = seeded_repo().await;
        let handler = UpdateListingHandler::new(repo);

        let updated = handler
            .handle(UpdateListingCommand {
                listing_id: listing.id,
                user_id: UserId::from_i64(1),
                update: ListingUpdate {
                    price_usd: Some(850),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.price_usd, Some(850));
        assert_eq!(updated.version, listing.version + 1);
    }

    #[tokio::test]
    async fn non_owner_gets_not_owner() {
        let (repo, listing) = seeded_repo().await;
        let handler = UpdateListingHandler::new(repo);

        let result = handler
            .handle(UpdateListingCommand {
                listing_id: listing.id,
                user_id: UserId::from_i64(999),
                update: ListingUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(ListingError::NotOwner)));
    }

    #[tokio::test]
    async fn missing_listing_gets_not_found() {
        let (repo, _) = seeded_repo().await;
        let handler = UpdateListingHandler::new(repo);

        let result = handler
            .handle(UpdateListingCommand {
                listing_id: ListingId::from_i64(404),
                user_id: UserId::from_i64(1),
                update: ListingUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(ListingError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_does_not_change_lifecycle_state() {
        let (repo, mut listing) = seeded_repo().await;
        listing.publish(Timestamp::now());
        let published = repo.update(&listing).await.unwrap();

        let handler = UpdateListingHandler::new(repo);
        let updated = handler
            .handle(UpdateListingCommand {
                listing_id: published.id,
                user_id: UserId::from_i64(1),
                update: ListingUpdate {
                    title: Some("Salsa Vaya GX".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert!(updated.is_active);
        assert_eq!(updated.expires_at, published.expires_at);
    }
}
