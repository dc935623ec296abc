//! ListingRepository port - persistence contract for listings.
//!
//! Implementations back the listing aggregate with storage. Updates use
//! optimistic locking on the `version` field so concurrent writers cannot
//! silently overwrite each other.

use async_trait::async_trait;

use crate::domain::foundation::{ListingId, Timestamp, UserId};
use crate::domain::listing::{Listing, ListingError, NewListing, PublicListingFilter};

/// Port for storing and querying listings.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new draft listing and return it with its assigned id.
    async fn create(&self, owner_id: UserId, new_listing: NewListing)
        -> Result<Listing, ListingError>;

    /// Find a listing by id, regardless of visibility.
    async fn find_by_id(&self, id: ListingId) -> Result<Option<Listing>, ListingError>;

    /// Persist a modified listing.
    ///
    /// The stored row is only written when its version matches the one on
    /// `listing`; on success the stored version is incremented.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::ConcurrencyConflict` when another writer got
    /// there first, and `ListingError::NotFound` when the row is gone.
    async fn update(&self, listing: &Listing) -> Result<Listing, ListingError>;

    /// Delete a listing.
    async fn delete(&self, id: ListingId) -> Result<(), ListingError>;

    /// List publicly visible listings, newest first.
    ///
    /// Visibility is evaluated at `now`; drafts and expired listings are
    /// excluded. The filter optionally restricts by US state code.
    async fn list_visible(
        &self,
        filter: &PublicListingFilter,
        now: Timestamp,
    ) -> Result<Vec<Listing>, ListingError>;

    /// List all listings owned by a user, newest first.
    ///
    /// Includes drafts and expired listings; this backs the owner's
    /// dashboard, not the public site.
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Listing>, ListingError>;

    /// List active listings whose window ends inside `[from, until)`.
    ///
    /// Used by the renewal reminder sweep.
    async fn list_expiring_within(
        &self,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Listing>, ListingError>;
}
