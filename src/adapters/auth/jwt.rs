//! JWT token verifier.
//!
//! Validates HS256 bearer tokens issued by the identity service. The
//! token's `sub` claim carries the numeric user id.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Claims this service reads from access tokens.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject: the numeric user id as a string.
    sub: String,
    /// Expiry, validated by the library.
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 JWT verifier.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id: UserId = data.claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    const SECRET: &str = "test-signing-secret-that-is-long-enough";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn sign(sub: &str, exp_offset_secs: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as usize;
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(&SecretString::new(SECRET.to_string()))
    }

    #[tokio::test]
    async fn valid_token_yields_user() {
        let token = sign("42", 3600);
        let user = verifier().verify(&token).await.unwrap();
        assert_eq!(user.user_id, UserId::from_i64(42));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let token = sign("42", -3600);
        let result = verifier().verify(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid() {
        let token = encode(
            &Header::default(),
            &TestClaims {
                sub: "42".to_string(),
                exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            },
            &EncodingKey::from_secret(b"other-secret"),
        )
        .unwrap();

        let result = verifier().verify(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn non_numeric_subject_is_invalid() {
        let token = sign("not-a-number", 3600);
        let result = verifier().verify(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
