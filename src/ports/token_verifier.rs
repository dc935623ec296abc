//! Token verification port for bearer token validation.
//!
//! Defines the contract for validating access tokens and extracting the
//! calling user. Token issuance lives elsewhere; this service only
//! consumes tokens.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and extracts user identity.
///
/// HTTP middleware uses this to turn an `Authorization: Bearer` header
/// into an [`AuthenticatedUser`].
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed or bad-signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient failures
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
