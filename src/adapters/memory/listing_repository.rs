//! In-memory ListingRepository.
//!
//! Backs handler tests and local development without Postgres. Mirrors
//! the database adapter's semantics: serial ids, newest-first ordering,
//! and optimistic locking on the version column.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::{ListingId, Timestamp, UserId};
use crate::domain::listing::{Listing, ListingError, NewListing, PublicListingFilter};
use crate::ports::ListingRepository;

/// In-memory listing store keyed by id.
pub struct InMemoryListingRepository {
    listings: RwLock<HashMap<ListingId, Listing>>,
    next_id: AtomicI64,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn create(
        &self,
        owner_id: UserId,
        new_listing: NewListing,
    ) -> Result<Listing, ListingError> {
        let id = ListingId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst));
        let listing = Listing {
            id,
            owner_id,
            title: new_listing.title,
            brand: new_listing.brand,
            model: new_listing.model,
            year: new_listing.year,
            size: new_listing.size,
            price_usd: new_listing.price_usd,
            state: new_listing.state,
            zip: new_listing.zip,
            condition: new_listing.condition,
            description: new_listing.description,
            photo_urls: new_listing.photo_urls,
            is_active: false,
            expires_at: None,
            created_at: Timestamp::now(),
            version: 1,
        };
        self.listings.write().await.insert(id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, id: ListingId) -> Result<Option<Listing>, ListingError> {
        Ok(self.listings.read().await.get(&id).cloned())
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, ListingError> {
        let mut listings = self.listings.write().await;
        let stored = listings
            .get_mut(&listing.id)
            .ok_or(ListingError::NotFound(listing.id))?;

        if stored.version != listing.version {
            return Err(ListingError::ConcurrencyConflict);
        }

        let mut updated = listing.clone();
        updated.version += 1;
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: ListingId) -> Result<(), ListingError> {
        self.listings
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(ListingError::NotFound(id))
    }

    async fn list_visible(
        &self,
        filter: &PublicListingFilter,
        now: Timestamp,
    ) -> Result<Vec<Listing>, ListingError> {
        let listings = self.listings.read().await;
        let mut visible: Vec<Listing> = listings
            .values()
            .filter(|l| l.is_visible(now))
            .filter(|l| match &filter.state {
                Some(state) => l
                    .state
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(state)),
                None => true,
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(visible)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Listing>, ListingError> {
        let listings = self.listings.read().await;
        let mut owned: Vec<Listing> = listings
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(owned)
    }

    async fn list_expiring_within(
        &self,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Listing>, ListingError> {
        let listings = self.listings.read().await;
        let expiring: Vec<Listing> = listings
            .values()
            .filter(|l| {
                l.is_active
                    && l.expires_at
                        .is_some_and(|expires| expires >= from && expires < until)
            })
            .cloned()
            .collect();
        Ok(expiring)
    }
}
