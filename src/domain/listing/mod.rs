//! Listing domain module.
//!
//! Handles the bicycle listing aggregate and its paid-visibility lifecycle.
//! A listing starts as an invisible draft; paying the listing fee publishes
//! it for a fixed window, and paying the renewal fee extends that window.
//!
//! # Module Structure
//!
//! - `aggregate` - Listing aggregate entity and lifecycle transitions
//! - `errors` - Listing domain errors

mod aggregate;
mod errors;

pub use aggregate::{
    Listing, ListingUpdate, NewListing, PublicListingFilter, LISTING_WINDOW_DAYS, MAX_PHOTOS,
};
pub use errors::ListingError;
