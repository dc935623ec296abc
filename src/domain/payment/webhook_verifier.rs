//! Stripe webhook signature verification.
//!
//! Verifies the `Stripe-Signature` header with HMAC-SHA256 over
//! `"{timestamp}.{payload}"` and bounds the timestamp to stop replayed
//! deliveries.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::stripe_event::StripeEvent;
use super::webhook_errors::WebhookError;

/// Maximum allowed age for webhook events (5 minutes).
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Maximum allowed clock skew for future events (1 minute).
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed components of the `Stripe-Signature` header.
///
/// Format: `t=<timestamp>,v1=<signature>[,v0=<legacy>]`. Unknown keys
/// are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
    /// Parses a `Stripe-Signature` header string.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::ParseError` if the header format is invalid
    /// or either required component is missing.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| WebhookError::ParseError("invalid header format".to_string()))?;

            match key {
                "t" => {
                    timestamp = Some(value.parse().map_err(|_| {
                        WebhookError::ParseError("invalid timestamp".to_string())
                    })?);
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::ParseError("invalid v1 signature hex".to_string())
                    })?);
                }
                _ => {}
            }
        }

        let timestamp =
            timestamp.ok_or_else(|| WebhookError::ParseError("missing timestamp".to_string()))?;
        let v1_signature = v1_signature
            .ok_or_else(|| WebhookError::ParseError("missing v1 signature".to_string()))?;

        Ok(SignatureHeader {
            timestamp,
            v1_signature,
        })
    }
}

/// Verifier for Stripe webhook signatures.
pub struct StripeWebhookVerifier {
    /// The webhook signing secret from the Stripe dashboard.
    secret: SecretString,
}

impl StripeWebhookVerifier {
    /// Creates a new verifier with the given webhook secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies the webhook signature and parses the event.
    ///
    /// Steps: parse the header, bound the timestamp, recompute the
    /// HMAC-SHA256 signature, compare in constant time, then parse the
    /// JSON payload into a [`StripeEvent`].
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - signature mismatch
    /// - `TimestampOutOfRange` - event older than 5 minutes
    /// - `InvalidTimestamp` - timestamp in the future beyond skew tolerance
    /// - `ParseError` - malformed header or JSON payload
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<StripeEvent, WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        self.validate_timestamp(header.timestamp)?;

        let expected = self.compute_signature(header.timestamp, payload);
        if !constant_time_compare(&expected, &header.v1_signature) {
            return Err(WebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let now = chrono::Utc::now().timestamp();
        let age = now - timestamp;

        if age > MAX_EVENT_AGE_SECS {
            return Err(WebhookError::TimestampOutOfRange);
        }
        if age < -MAX_CLOCK_SKEW_SECS {
            return Err(WebhookError::InvalidTimestamp);
        }
        Ok(())
    }

    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));

        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(signed_payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Constant-time comparison of two byte slices.
///
/// Prevents timing attacks that could leak the expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a valid header signature for test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, timestamp: i64, payload: &str) -> String {
    let signed_payload = format!("{}.{}", timestamp, payload);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(signed_payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "whsec_test_secret_12345";

    fn verifier(secret: &str) -> StripeWebhookVerifier {
        StripeWebhookVerifier::new(SecretString::new(secret.to_string()))
    }

    fn event_payload() -> String {
        serde_json::json!({
            "id": "evt_bike_1",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {
                "object": {
                    "id": "cs_test_1",
                    "payment_status": "paid",
                    "metadata": { "type": "listing", "listing_id": "4", "owner_id": "2" }
                }
            },
            "livemode": false,
            "api_version": "2023-10-16"
        })
        .to_string()
    }

    // ══════════════════════════════════════════════════════════════
    // Header Parsing
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parse_header_with_timestamp_and_v1() {
        let header_str = format!("t=1234567890,v1={}", "a".repeat(64));
        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.v1_signature.len(), 32);
    }

    #[test]
    fn parse_header_ignores_unknown_and_legacy_fields() {
        let header_str = format!("t=1234567890,v1={},v0={},scheme=hmac", "a".repeat(64), "b".repeat(64));
        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
    }

    #[test]
    fn parse_header_missing_timestamp_fails() {
        let header_str = format!("v1={}", "a".repeat(64));
        assert!(matches!(
            SignatureHeader::parse(&header_str),
            Err(WebhookError::ParseError(_))
        ));
    }

    #[test]
    fn parse_header_missing_v1_fails() {
        assert!(matches!(
            SignatureHeader::parse("t=1234567890"),
            Err(WebhookError::ParseError(_))
        ));
    }

    #[test]
    fn parse_header_invalid_hex_fails() {
        assert!(matches!(
            SignatureHeader::parse("t=1234567890,v1=not_valid_hex"),
            Err(WebhookError::ParseError(_))
        ));
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Verification
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let payload = event_payload();
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, &payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let event = verifier(TEST_SECRET)
            .verify_and_parse(payload.as_bytes(), &header)
            .unwrap();

        assert_eq!(event.id, "evt_bike_1");
        assert_eq!(event.event_type, "checkout.session.completed");
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let payload = event_payload();
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, &payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier("whsec_other").verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_tampered_payload_fails() {
        let payload = event_payload();
        let tampered = payload.replace("\"listing_id\":\"4\"", "\"listing_id\":\"999\"");
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, &payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier(TEST_SECRET).verify_and_parse(tampered.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_invalid_json_fails() {
        let payload = "not valid json";
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier(TEST_SECRET).verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::ParseError(_))));
    }

    // ══════════════════════════════════════════════════════════════
    // Timestamp Bounds
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn timestamp_at_age_boundary_succeeds() {
        let timestamp = chrono::Utc::now().timestamp() - MAX_EVENT_AGE_SECS;
        assert!(verifier(TEST_SECRET).validate_timestamp(timestamp).is_ok());
    }

    #[test]
    fn timestamp_past_age_boundary_fails() {
        let timestamp = chrono::Utc::now().timestamp() - MAX_EVENT_AGE_SECS - 1;
        assert!(matches!(
            verifier(TEST_SECRET).validate_timestamp(timestamp),
            Err(WebhookError::TimestampOutOfRange)
        ));
    }

    #[test]
    fn timestamp_within_clock_skew_succeeds() {
        let timestamp = chrono::Utc::now().timestamp() + 30;
        assert!(verifier(TEST_SECRET).validate_timestamp(timestamp).is_ok());
    }

    #[test]
    fn timestamp_beyond_clock_skew_fails() {
        let timestamp = chrono::Utc::now().timestamp() + MAX_CLOCK_SKEW_SECS + 60;
        assert!(matches!(
            verifier(TEST_SECRET).validate_timestamp(timestamp),
            Err(WebhookError::InvalidTimestamp)
        ));
    }

    // ══════════════════════════════════════════════════════════════
    // Constant-time Comparison
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_handles_lengths_and_content() {
        assert!(constant_time_compare(&[1, 2, 3], &[1, 2, 3]));
        assert!(!constant_time_compare(&[1, 2, 3], &[1, 2, 4]));
        assert!(!constant_time_compare(&[1, 2, 3], &[1, 2, 3, 4]));
        assert!(constant_time_compare(&[], &[]));
    }
}
