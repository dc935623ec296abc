//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
///
/// Both Stripe credentials stay wrapped in [`SecretString`] from the moment
/// they are deserialized, so a debug print of the config cannot leak them.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key
    pub stripe_api_key: SecretString,

    /// Stripe webhook signing secret
    pub stripe_webhook_secret: SecretString,

    /// Base URL of the public site, used for checkout redirect URLs
    #[serde(default = "default_public_site_url")]
    pub public_site_url: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.expose_secret().starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.expose_secret().starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let api_key = self.stripe_api_key.expose_secret();
        let webhook_secret = self.stripe_webhook_secret.expose_secret();

        if api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }

        // Verify key prefixes for safety
        if !api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }

        if !self.public_site_url.starts_with("http://")
            && !self.public_site_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidSiteUrl);
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: SecretString::new(String::new()),
            stripe_webhook_secret: SecretString::new(String::new()),
            public_site_url: default_public_site_url(),
        }
    }
}

fn default_public_site_url() -> String {
    "http://localhost:5173".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string())
    }

    #[test]
    fn test_is_test_mode() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_test_xxx"),
            stripe_webhook_secret: secret("whsec_xxx"),
            ..Default::default()
        };
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_live_xxx"),
            stripe_webhook_secret: secret("whsec_xxx"),
            ..Default::default()
        };
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = PaymentConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_webhook_secret() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_test_xxx"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = PaymentConfig {
            stripe_api_key: secret("pk_test_xxx"), // Wrong prefix
            stripe_webhook_secret: secret("whsec_xxx"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_webhook_secret_prefix() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_test_xxx"),
            stripe_webhook_secret: secret("secret_xxx"), // Wrong prefix
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_site_url() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_test_xxx"),
            stripe_webhook_secret: secret("whsec_xxx"),
            public_site_url: "localhost:5173".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSiteUrl)
        ));
    }

    #[test]
    fn test_debug_output_redacts_credentials() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_live_super_secret"),
            stripe_webhook_secret: secret("whsec_super_secret"),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super_secret"));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = PaymentConfig {
            stripe_api_key: secret("sk_test_abcd1234"),
            stripe_webhook_secret: secret("whsec_xyz789"),
            public_site_url: "https://pedalpost.example.com".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
