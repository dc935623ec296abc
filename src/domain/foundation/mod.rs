//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, timestamp wrapper, auth context, and error
//! types that form the vocabulary of the PedalPost domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ListingId, UserId};
pub use timestamp::Timestamp;
