//! Listing domain errors.

use crate::domain::foundation::{ListingId, ValidationError};
use thiserror::Error;

/// Errors raised by listing operations.
#[derive(Debug, Error)]
pub enum ListingError {
    /// No listing exists with this identifier.
    #[error("Listing {0} not found")]
    NotFound(ListingId),

    /// The caller does not own the listing.
    #[error("Only the listing owner may perform this action")]
    NotOwner,

    /// The listing is in the wrong lifecycle state for the operation.
    #[error("Invalid listing state: {0}")]
    InvalidState(String),

    /// A concurrent update won; the caller should retry with fresh data.
    #[error("Listing was modified concurrently")]
    ConcurrencyConflict,

    /// Request payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payment provider rejected or failed the request.
    #[error("Payment provider error: {0}")]
    PaymentProvider(String),

    /// Database, storage, or other infrastructure failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ListingError {
    /// Creates an invalid state error with a message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an infrastructure error with a message.
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure(message.into())
    }

    /// Creates a payment provider error with a message.
    pub fn payment_provider(message: impl Into<String>) -> Self {
        Self::PaymentProvider(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_listing() {
        let err = ListingError::NotFound(ListingId::from_i64(7));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn validation_errors_convert_transparently() {
        let err: ListingError = ValidationError::empty_field("title").into();
        assert!(matches!(err, ListingError::Validation(_)));
    }
}
