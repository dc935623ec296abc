//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Minimum accepted length of the JWT signing secret.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Authentication configuration (JWT session tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to verify session tokens
    pub jwt_secret: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("too-short".to_string()),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort)
        ));
    }

    #[test]
    fn test_validation_valid_secret() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("an-adequately-long-signing-secret-value".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
