//! HTTP adapter for listing endpoints.
//!
//! Exposes the listing domain via REST API:
//! - `GET /api/listings` - Browse visible listings
//! - `GET /api/listings/mine` - The caller's own listings
//! - `GET /api/listings/:id` - Fetch one listing
//! - `POST /api/listings` - Create a draft listing
//! - `PUT /api/listings/:id` - Update descriptive fields
//! - `DELETE /api/listings/:id` - Delete a listing
//! - `POST /api/admin/renewal-reminders` - Run one reminder sweep

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{admin_routes, listing_routes};
