//! PostgreSQL implementation of PaymentRecordRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ListingId, Timestamp, UserId};
use crate::domain::payment::CheckoutAction;
use crate::ports::{PaymentRecord, PaymentRecordRepository};

/// PostgreSQL implementation of the payment audit trail.
pub struct PostgresPaymentRecordRepository {
    pool: PgPool,
}

impl PostgresPaymentRecordRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRecordRow {
    owner_id: Option<i64>,
    listing_id: i64,
    action: String,
    amount_minor: i64,
    currency: String,
    session_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRecordRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRecordRow) -> Result<Self, Self::Error> {
        let action = CheckoutAction::parse(&row.action).ok_or_else(|| {
            DomainError::database(format!("Invalid payment action value: {}", row.action))
        })?;

        Ok(PaymentRecord {
            owner_id: row.owner_id.map(UserId::from_i64),
            listing_id: ListingId::from_i64(row.listing_id),
            action,
            amount_minor: row.amount_minor,
            currency: row.currency,
            session_id: row.session_id,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::database(format!("{context}: {e}"))
}

#[async_trait]
impl PaymentRecordRepository for PostgresPaymentRecordRepository {
    async fn append(&self, record: PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (owner_id, listing_id, action, amount_minor, currency, session_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.owner_id.map(|id| id.as_i64()))
        .bind(record.listing_id.as_i64())
        .bind(record.action.as_metadata_value())
        .bind(record.amount_minor)
        .bind(&record.currency)
        .bind(&record.session_id)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to append payment record", e))?;

        Ok(())
    }

    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<PaymentRecord>, DomainError> {
        let rows: Vec<PaymentRecordRow> = sqlx::query_as(
            r#"
            SELECT owner_id, listing_id, action, amount_minor, currency, session_id, created_at
            FROM payments
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list payment records", e))?;

        rows.into_iter().map(PaymentRecord::try_from).collect()
    }
}
