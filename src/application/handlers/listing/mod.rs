//! Listing handlers.
//!
//! Command and query handlers for the listing CRUD surface and queries:
//!
//! ## Commands
//! - Creating draft listings
//! - Editing descriptive fields (never lifecycle state)
//! - Deleting listings
//! - Running the renewal reminder sweep
//!
//! ## Queries
//! - Get a single listing (visibility-aware)
//! - Public marketplace feed
//! - Owner's dashboard

mod create_listing;
mod delete_listing;
mod get_listing;
mod list_my_listings;
mod list_public_listings;
mod renewal_reminders;
mod update_listing;

// Commands
pub use create_listing::{CreateListingCommand, CreateListingHandler};
pub use delete_listing::{DeleteListingCommand, DeleteListingHandler};
pub use renewal_reminders::{
    RenewalReminderCommand, RenewalReminderHandler, RenewalReminderResult,
    DEFAULT_REMINDER_DAYS_AHEAD,
};
pub use update_listing::{UpdateListingCommand, UpdateListingHandler};

// Queries
pub use get_listing::{GetListingHandler, GetListingQuery};
pub use list_my_listings::{ListMyListingsHandler, ListMyListingsQuery};
pub use list_public_listings::{ListPublicListingsHandler, ListPublicListingsQuery};
