//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a bearer
//! token. They have no provider dependencies; any token issuer can
//! populate them via the `TokenVerifier` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated bearer token.
///
/// Identity lives in an external collaborator; only the numeric subject
/// is carried through this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub user_id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by the `TokenVerifier` adapter after validating
    /// a token's signature and expiry.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_carries_subject() {
        let user = AuthenticatedUser::new(UserId::from_i64(42));
        assert_eq!(user.user_id.as_i64(), 42);
    }

    #[test]
    fn service_unavailable_is_transient() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::TokenExpired.is_transient());
    }
}
