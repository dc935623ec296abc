//! HTTP DTOs (Data Transfer Objects) for listing endpoints.
//!
//! These types define the JSON request/response structure for the listing
//! API. They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::listing::{Listing, ListingUpdate, NewListing, PublicListingFilter};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new draft listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price_usd: Option<i32>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(req: CreateListingRequest) -> Self {
        NewListing {
            title: req.title,
            brand: req.brand,
            model: req.model,
            year: req.year,
            size: req.size,
            price_usd: req.price_usd,
            state: req.state,
            zip: req.zip,
            condition: req.condition,
            description: req.description,
            photo_urls: req.photo_urls,
        }
    }
}

/// Request to update a listing's descriptive fields.
///
/// Lifecycle fields are absent on purpose; publishing and renewal go
/// through the payment flow only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListingRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price_usd: Option<i32>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_urls: Option<Vec<String>>,
}

impl From<UpdateListingRequest> for ListingUpdate {
    fn from(req: UpdateListingRequest) -> Self {
        ListingUpdate {
            title: req.title,
            brand: req.brand,
            model: req.model,
            year: req.year,
            size: req.size,
            price_usd: req.price_usd,
            state: req.state,
            zip: req.zip,
            condition: req.condition,
            description: req.description,
            photo_urls: req.photo_urls,
        }
    }
}

/// Query parameters for the public listing feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicListingsParams {
    /// Two-letter US state code filter (case-insensitive).
    #[serde(default)]
    pub state: Option<String>,
}

impl From<PublicListingsParams> for PublicListingFilter {
    fn from(params: PublicListingsParams) -> Self {
        PublicListingFilter {
            state: params.state,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Detailed listing view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub size: Option<String>,
    pub price_usd: Option<i32>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub photo_urls: Vec<String>,
    /// Whether the listing fee has been paid and the listing published.
    pub is_active: bool,
    /// End of the paid visibility window (ISO 8601), null for drafts.
    pub expires_at: Option<String>,
    /// When the listing was created (ISO 8601).
    pub created_at: String,
    pub version: i32,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.as_i64(),
            owner_id: listing.owner_id.as_i64(),
            title: listing.title,
            brand: listing.brand,
            model: listing.model,
            year: listing.year,
            size: listing.size,
            price_usd: listing.price_usd,
            state: listing.state,
            zip: listing.zip,
            condition: listing.condition,
            description: listing.description,
            photo_urls: listing.photo_urls,
            is_active: listing.is_active,
            expires_at: listing
                .expires_at
                .map(|t| t.as_datetime().to_rfc3339()),
            created_at: listing.created_at.as_datetime().to_rfc3339(),
            version: listing.version,
        }
    }
}

/// Response wrapping a collection of listings.
#[derive(Debug, Clone, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<ListingResponse>,
}

impl ListingsResponse {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into_iter().map(ListingResponse::from).collect(),
        }
    }
}

/// Response for the renewal reminder sweep.
#[derive(Debug, Clone, Serialize)]
pub struct RenewalReminderResponse {
    /// Number of listings reminded this sweep.
    pub reminded: usize,
}
