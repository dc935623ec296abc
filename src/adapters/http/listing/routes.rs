//! Axum router configuration for listing endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::AppState;
use super::handlers::{
    create_listing, delete_listing, get_listing, list_my_listings, list_public_listings,
    run_renewal_reminders, update_listing,
};

/// Create the listing API router.
///
/// # Routes
///
/// ## Public Endpoints
/// - `GET /` - Browse visible listings, newest first
/// - `GET /:id` - Fetch one listing (owner sees drafts)
///
/// ## Owner Endpoints (require authentication)
/// - `GET /mine` - All of the caller's listings, drafts included
/// - `POST /` - Create a new draft listing
/// - `PUT /:id` - Update descriptive fields
/// - `DELETE /:id` - Delete a listing
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_public_listings).post(create_listing))
        .route("/mine", get(list_my_listings))
        .route(
            "/:id",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
}

/// Create the admin router.
///
/// # Routes
/// - `POST /renewal-reminders` - Run one renewal reminder sweep
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/renewal-reminders", post(run_renewal_reminders))
}
