//! PostgreSQL implementation of ListingRepository.
//!
//! Photos are stored in three url columns rather than a join table; the
//! aggregate caps photos at three and the marketplace has no need to
//! query them independently.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{ListingId, Timestamp, UserId};
use crate::domain::listing::{Listing, ListingError, NewListing, PublicListingFilter};
use crate::ports::ListingRepository;

/// PostgreSQL implementation of the ListingRepository port.
pub struct PostgresListingRepository {
    pool: PgPool,
}

impl PostgresListingRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a listing.
#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: i64,
    owner_id: i64,
    title: String,
    brand: Option<String>,
    model: Option<String>,
    year: Option<i32>,
    size: Option<String>,
    price_usd: Option<i32>,
    state: Option<String>,
    zip: Option<String>,
    condition: Option<String>,
    description: Option<String>,
    photo1_url: Option<String>,
    photo2_url: Option<String>,
    photo3_url: Option<String>,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    version: i32,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        let photo_urls = [row.photo1_url, row.photo2_url, row.photo3_url]
            .into_iter()
            .flatten()
            .collect();

        Listing {
            id: ListingId::from_i64(row.id),
            owner_id: UserId::from_i64(row.owner_id),
            title: row.title,
            brand: row.brand,
            model: row.model,
            year: row.year,
            size: row.size,
            price_usd: row.price_usd,
            state: row.state,
            zip: row.zip,
            condition: row.condition,
            description: row.description,
            photo_urls,
            is_active: row.is_active,
            expires_at: row.expires_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            version: row.version,
        }
    }
}

fn photo_columns(photo_urls: &[String]) -> [Option<&String>; 3] {
    [photo_urls.first(), photo_urls.get(1), photo_urls.get(2)]
}

fn db_error(context: &str, e: sqlx::Error) -> ListingError {
    ListingError::infrastructure(format!("{context}: {e}"))
}

const SELECT_COLUMNS: &str = r#"
    id, owner_id, title, brand, model, year, size, price_usd, state, zip,
    condition, description, photo1_url, photo2_url, photo3_url,
    is_active, expires_at, created_at, version
"#;

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn create(
        &self,
        owner_id: UserId,
        new_listing: NewListing,
    ) -> Result<Listing, ListingError> {
        let photos = photo_columns(&new_listing.photo_urls);

        let row: ListingRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO listings (
                owner_id, title, brand, model, year, size, price_usd, state, zip,
                condition, description, photo1_url, photo2_url, photo3_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(owner_id.as_i64())
        .bind(&new_listing.title)
        .bind(&new_listing.brand)
        .bind(&new_listing.model)
        .bind(new_listing.year)
        .bind(&new_listing.size)
        .bind(new_listing.price_usd)
        .bind(&new_listing.state)
        .bind(&new_listing.zip)
        .bind(&new_listing.condition)
        .bind(&new_listing.description)
        .bind(photos[0])
        .bind(photos[1])
        .bind(photos[2])
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create listing", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ListingId) -> Result<Option<Listing>, ListingError> {
        let row: Option<ListingRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find listing", e))?;

        Ok(row.map(Listing::from))
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, ListingError> {
        let photos = photo_columns(&listing.photo_urls);

        let row: Option<ListingRow> = sqlx::query_as(&format!(
            r#"
            UPDATE listings SET
                title = $3,
                brand = $4,
                model = $5,
                year = $6,
                size = $7,
                price_usd = $8,
                state = $9,
                zip = $10,
                condition = $11,
                description = $12,
                photo1_url = $13,
                photo2_url = $14,
                photo3_url = $15,
                is_active = $16,
                expires_at = $17,
                version = version + 1
            WHERE id = $1 AND version = $2
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(listing.id.as_i64())
        .bind(listing.version)
        .bind(&listing.title)
        .bind(&listing.brand)
        .bind(&listing.model)
        .bind(listing.year)
        .bind(&listing.size)
        .bind(listing.price_usd)
        .bind(&listing.state)
        .bind(&listing.zip)
        .bind(&listing.condition)
        .bind(&listing.description)
        .bind(photos[0])
        .bind(photos[1])
        .bind(photos[2])
        .bind(listing.is_active)
        .bind(listing.expires_at.map(|t| *t.as_datetime()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update listing", e))?;

        match row {
            Some(row) => Ok(row.into()),
            // Distinguish a stale version from a deleted row.
            None => {
                let exists: Option<(i64,)> =
                    sqlx::query_as("SELECT id FROM listings WHERE id = $1")
                        .bind(listing.id.as_i64())
                        .fetch_optional(&self.pool)
                        .await
                        .map_err(|e| db_error("Failed to check listing", e))?;

                if exists.is_some() {
                    Err(ListingError::ConcurrencyConflict)
                } else {
                    Err(ListingError::NotFound(listing.id))
                }
            }
        }
    }

    async fn delete(&self, id: ListingId) -> Result<(), ListingError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete listing", e))?;

        if result.rows_affected() == 0 {
            return Err(ListingError::NotFound(id));
        }
        Ok(())
    }

    async fn list_visible(
        &self,
        filter: &PublicListingFilter,
        now: Timestamp,
    ) -> Result<Vec<Listing>, ListingError> {
        let rows: Vec<ListingRow> = match &filter.state {
            Some(state) => {
                sqlx::query_as(&format!(
                    r#"
                    SELECT {SELECT_COLUMNS} FROM listings
                    WHERE is_active = TRUE
                      AND (expires_at IS NULL OR expires_at >= $1)
                      AND UPPER(state) = UPPER($2)
                    ORDER BY created_at DESC, id DESC
                    "#
                ))
                .bind(now.as_datetime())
                .bind(state)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    r#"
                    SELECT {SELECT_COLUMNS} FROM listings
                    WHERE is_active = TRUE
                      AND (expires_at IS NULL OR expires_at >= $1)
                    ORDER BY created_at DESC, id DESC
                    "#
                ))
                .bind(now.as_datetime())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("Failed to list visible listings", e))?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Listing>, ListingError> {
        let rows: Vec<ListingRow> = sqlx::query_as(&format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM listings
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list owner listings", e))?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn list_expiring_within(
        &self,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Listing>, ListingError> {
        let rows: Vec<ListingRow> = sqlx::query_as(&format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM listings
            WHERE is_active = TRUE
              AND expires_at >= $1
              AND expires_at < $2
            ORDER BY expires_at ASC
            "#
        ))
        .bind(from.as_datetime())
        .bind(until.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list expiring listings", e))?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }
}
