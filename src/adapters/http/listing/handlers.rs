//! HTTP handlers for listing endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::listing::{
    CreateListingCommand, DeleteListingCommand, GetListingQuery, ListMyListingsQuery,
    ListPublicListingsQuery, RenewalReminderCommand, UpdateListingCommand,
};
use crate::domain::foundation::ListingId;

use super::super::error::ApiError;
use super::super::middleware::{OptionalAuth, RequireAuth};
use super::super::AppState;
use super::dto::{
    CreateListingRequest, ListingResponse, ListingsResponse, PublicListingsParams,
    RenewalReminderResponse, UpdateListingRequest,
};

/// GET /api/listings - Public feed of visible listings, newest first.
pub async fn list_public_listings(
    State(state): State<AppState>,
    Query(params): Query<PublicListingsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_public_listings_handler();
    let query = ListPublicListingsQuery {
        filter: params.into(),
    };

    let listings = handler.handle(query).await?;

    Ok(Json(ListingsResponse::from_listings(listings)))
}

/// GET /api/listings/mine - All of the caller's listings, drafts included.
pub async fn list_my_listings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_my_listings_handler();
    let query = ListMyListingsQuery {
        owner_id: user.user_id,
    };

    let listings = handler.handle(query).await?;

    Ok(Json(ListingsResponse::from_listings(listings)))
}

/// GET /api/listings/:id - Fetch one listing.
///
/// Drafts and expired listings are only returned to their owner.
pub async fn get_listing(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_listing_handler();
    let query = GetListingQuery {
        listing_id: ListingId::from_i64(id),
        caller: user.map(|u| u.user_id),
    };

    let listing = handler.handle(query).await?;

    Ok(Json(ListingResponse::from(listing)))
}

/// POST /api/listings - Create a new draft listing.
pub async fn create_listing(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_listing_handler();
    let cmd = CreateListingCommand {
        owner_id: user.user_id,
        new_listing: request.into(),
    };

    let listing = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ListingResponse::from(listing))))
}

/// PUT /api/listings/:id - Update a listing's descriptive fields.
pub async fn update_listing(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Json(request): Json<UpdateListingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.update_listing_handler();
    let cmd = UpdateListingCommand {
        listing_id: ListingId::from_i64(id),
        user_id: user.user_id,
        update: request.into(),
    };

    let listing = handler.handle(cmd).await?;

    Ok(Json(ListingResponse::from(listing)))
}

/// DELETE /api/listings/:id - Delete a listing.
pub async fn delete_listing(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.delete_listing_handler();
    let cmd = DeleteListingCommand {
        listing_id: ListingId::from_i64(id),
        user_id: user.user_id,
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/renewal-reminders - Run one renewal reminder sweep.
pub async fn run_renewal_reminders(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.renewal_reminder_handler();
    let result = handler.handle(RenewalReminderCommand::default()).await?;

    Ok(Json(RenewalReminderResponse {
        reminded: result.reminded.len(),
    }))
}
