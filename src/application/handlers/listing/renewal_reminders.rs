//! RenewalReminderHandler - sweep for listings approaching expiry.
//!
//! Finds active listings whose window ends on a given day ahead and logs
//! a reminder for each. Delivery is a log line for now; an email adapter
//! can hang off the same sweep later.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::listing::{Listing, ListingError};
use crate::ports::ListingRepository;

/// Default lead time before expiry, in days.
pub const DEFAULT_REMINDER_DAYS_AHEAD: i64 = 3;

/// Command to run one reminder sweep.
#[derive(Debug, Clone)]
pub struct RenewalReminderCommand {
    /// How many days before expiry the reminder fires.
    pub days_ahead: i64,
}

impl Default for RenewalReminderCommand {
    fn default() -> Self {
        Self {
            days_ahead: DEFAULT_REMINDER_DAYS_AHEAD,
        }
    }
}

/// Result of a reminder sweep.
#[derive(Debug, Clone)]
pub struct RenewalReminderResult {
    /// Listings that were reminded this sweep.
    pub reminded: Vec<Listing>,
}

/// Handler for the renewal reminder sweep.
pub struct RenewalReminderHandler {
    listings: Arc<dyn ListingRepository>,
}

impl RenewalReminderHandler {
    pub fn new(listings: Arc<dyn ListingRepository>) -> Self {
        Self { listings }
    }

    pub async fn handle(
        &self,
        cmd: RenewalReminderCommand,
    ) -> Result<RenewalReminderResult, ListingError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    /// Runs the sweep over the 24-hour window starting `days_ahead` days
    /// from `now`.
    pub async fn handle_at(
        &self,
        cmd: RenewalReminderCommand,
        now: Timestamp,
    ) -> Result<RenewalReminderResult, ListingError> {
        let from = now.add_days(cmd.days_ahead);
        let until = from.add_days(1);

        let expiring = self.listings.list_expiring_within(from, until).await?;

        for listing in &expiring {
            tracing::info!(
                listing_id = %listing.id,
                owner_id = %listing.owner_id,
                expires_at = ?listing.expires_at,
                "renewal reminder: listing expires in {} days",
                cmd.days_ahead
            );
        }

        Ok(RenewalReminderResult { reminded: expiring })
    }
}
