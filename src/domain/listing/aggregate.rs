//! Listing aggregate entity.
//!
//! The Listing aggregate represents a single used bicycle offered for sale.
//! Newly created listings are drafts: owned and editable, but invisible to
//! the public side of the marketplace until the listing fee is paid.
//!
//! # Design Decisions
//!
//! - **Visibility is derived**: `is_active` plus `expires_at` decide public
//!   visibility; there is no separate "status" column to drift out of sync
//! - **Lifecycle by construction**: `ListingUpdate` carries only descriptive
//!   fields, so the generic update path cannot touch `is_active`/`expires_at`
//! - **Optimistic locking**: `version` is compared on every persisted update

use crate::domain::foundation::{ListingId, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// Number of days a paid listing stays visible before expiring.
pub const LISTING_WINDOW_DAYS: i64 = 20;

/// Maximum number of photos attached to a listing.
pub const MAX_PHOTOS: usize = 3;

const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 5000;
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Listing aggregate - a bicycle offered for sale.
///
/// # Invariants
///
/// - A draft has `is_active == false` and `expires_at == None`
/// - Publishing sets both fields together; they are never set independently
/// - `photo_urls` holds at most [`MAX_PHOTOS`] entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier for this listing.
    pub id: ListingId,

    /// User who created and owns this listing.
    pub owner_id: UserId,

    /// Short title shown in search results.
    pub title: String,

    /// Bicycle brand (e.g. "Surly").
    pub brand: Option<String>,

    /// Bicycle model (e.g. "Long Haul Trucker").
    pub model: Option<String>,

    /// Model year.
    pub year: Option<i32>,

    /// Frame size as free text (e.g. "56cm", "Large").
    pub size: Option<String>,

    /// Asking price in whole US dollars.
    pub price_usd: Option<i32>,

    /// Two-letter US state code where the bike is located.
    pub state: Option<String>,

    /// ZIP code where the bike is located.
    pub zip: Option<String>,

    /// Condition as free text (e.g. "Lightly used").
    pub condition: Option<String>,

    /// Longer free-form description.
    pub description: Option<String>,

    /// Public URLs of uploaded photos, at most [`MAX_PHOTOS`].
    pub photo_urls: Vec<String>,

    /// Whether the listing fee has been paid and the listing published.
    pub is_active: bool,

    /// End of the paid visibility window. `None` for drafts.
    pub expires_at: Option<Timestamp>,

    /// When the listing was created.
    pub created_at: Timestamp,

    /// Optimistic locking version, incremented on every persisted update.
    pub version: i32,
}

impl Listing {
    /// Check whether this listing appears in public queries at `now`.
    ///
    /// Visible means published and, if a window is set, not yet past it.
    /// A listing expiring exactly at `now` is still visible.
    pub fn is_visible(&self, now: Timestamp) -> bool {
        self.is_active && self.expires_at.map_or(true, |expires| expires >= now)
    }

    /// Check whether this listing is an unpublished draft.
    pub fn is_draft(&self) -> bool {
        !self.is_active && self.expires_at.is_none()
    }

    /// Publish this listing after the listing fee is paid.
    ///
    /// Opens a fresh visibility window of [`LISTING_WINDOW_DAYS`] days from `now`.
    pub fn publish(&mut self, now: Timestamp) {
        self.is_active = true;
        self.expires_at = Some(now.add_days(LISTING_WINDOW_DAYS));
    }

    /// Extend this listing's visibility window after the renewal fee is paid.
    ///
    /// The new window starts from whichever is later: `now` or the current
    /// expiry. Renewing early therefore stacks the remaining time, and
    /// renewing an already expired listing restarts from `now`.
    pub fn extend(&mut self, now: Timestamp) {
        let base = match self.expires_at {
            Some(current) => Timestamp::later_of(now, current),
            None => now,
        };
        self.is_active = true;
        self.expires_at = Some(base.add_days(LISTING_WINDOW_DAYS));
    }

    /// Apply a descriptive update to this listing.
    ///
    /// Only fields present on [`ListingUpdate`] are touched; the lifecycle
    /// fields have no representation there and cannot change here.
    pub fn apply_update(&mut self, update: ListingUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(brand) = update.brand {
            self.brand = Some(brand);
        }
        if let Some(model) = update.model {
            self.model = Some(model);
        }
        if let Some(year) = update.year {
            self.year = Some(year);
        }
        if let Some(size) = update.size {
            self.size = Some(size);
        }
        if let Some(price_usd) = update.price_usd {
            self.price_usd = Some(price_usd);
        }
        if let Some(state) = update.state {
            self.state = Some(state);
        }
        if let Some(zip) = update.zip {
            self.zip = Some(zip);
        }
        if let Some(condition) = update.condition {
            self.condition = Some(condition);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(photo_urls) = update.photo_urls {
            self.photo_urls = photo_urls;
        }
    }
}

/// Payload for creating a new draft listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
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
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

impl NewListing {
    /// Validate the payload before persisting.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_optional_fields(
            self.year,
            self.price_usd,
            self.state.as_deref(),
            self.description.as_deref(),
        )?;
        validate_photo_count(self.photo_urls.len())?;
        Ok(())
    }
}

/// Partial update of a listing's descriptive fields.
///
/// Lifecycle fields (`is_active`, `expires_at`) are deliberately absent,
/// so no update request can publish or extend a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub size: Option<String>,
    pub price_usd: Option<i32>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub photo_urls: Option<Vec<String>>,
}

impl ListingUpdate {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        validate_optional_fields(
            self.year,
            self.price_usd,
            self.state.as_deref(),
            self.description.as_deref(),
        )?;
        if let Some(photos) = &self.photo_urls {
            validate_photo_count(photos.len())?;
        }
        Ok(())
    }
}

/// Filter options for the public listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicListingFilter {
    /// Restrict results to a two-letter US state code (case-insensitive).
    pub state: Option<String>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::too_long("title", MAX_TITLE_LEN));
    }
    Ok(())
}

fn validate_optional_fields(
    year: Option<i32>,
    price_usd: Option<i32>,
    state: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(year) = year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range("year", MIN_YEAR, MAX_YEAR, year));
        }
    }
    if let Some(price) = price_usd {
        if price < 0 {
            return Err(ValidationError::out_of_range("price_usd", 0, i32::MAX, price));
        }
    }
    if let Some(state) = state {
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "state",
                "two-letter US state code",
            ));
        }
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::too_long("description", MAX_DESCRIPTION_LEN));
        }
    }
    Ok(())
}

fn validate_photo_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_PHOTOS {
        return Err(ValidationError::out_of_range(
            "photo_urls",
            0,
            MAX_PHOTOS as i32,
            count as i32,
        ));
    }
    Ok(())
}
