//! Checkout actions, pricing, and session metadata.
//!
//! Both lifecycle payments go through the same Stripe Checkout flow; the
//! action recorded in session metadata tells the webhook consumer which
//! transition to apply when payment completes.

use crate::domain::foundation::{ListingId, UserId};
use std::collections::HashMap;
use std::fmt;

/// Currency for all checkout sessions.
pub const CHECKOUT_CURRENCY: &str = "usd";

/// Maximum characters in the product label sent to Stripe.
pub const MAX_LABEL_CHARS: usize = 80;

/// Listing fee in minor currency units ($10.00).
const LISTING_FEE_MINOR: i64 = 1000;

/// Renewal fee in minor currency units ($3.00).
const RENEWAL_FEE_MINOR: i64 = 300;

/// Which lifecycle payment a checkout session is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    /// First publication of a draft listing.
    Listing,
    /// Extension of an already published listing's window.
    Renew,
}

impl CheckoutAction {
    /// Fee charged for this action, in minor currency units.
    pub fn fee_minor_units(&self) -> i64 {
        match self {
            Self::Listing => LISTING_FEE_MINOR,
            Self::Renew => RENEWAL_FEE_MINOR,
        }
    }

    /// The value stored under the `type` metadata key.
    pub fn as_metadata_value(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Renew => "renew",
        }
    }

    /// Parse the `type` metadata value back into an action.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "listing" => Some(Self::Listing),
            "renew" => Some(Self::Renew),
            _ => None,
        }
    }

    /// Product label shown on the Stripe checkout page.
    ///
    /// Long titles are truncated to [`MAX_LABEL_CHARS`] characters so the
    /// label never exceeds what Stripe displays cleanly.
    pub fn product_label(&self, listing_title: &str) -> String {
        let prefix = match self {
            Self::Listing => "PedalPost Listing: ",
            Self::Renew => "PedalPost Renewal: ",
        };
        let label: String = format!("{prefix}{listing_title}")
            .chars()
            .take(MAX_LABEL_CHARS)
            .collect();
        label
    }
}

impl fmt::Display for CheckoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_metadata_value())
    }
}

/// Metadata attached to a checkout session and read back from the webhook.
///
/// `owner_id` is optional on the way back in: sessions created before the
/// field existed lack it, and the consumer tolerates that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMetadata {
    pub action: CheckoutAction,
    pub listing_id: ListingId,
    pub owner_id: Option<UserId>,
}

impl CheckoutMetadata {
    /// Renders the metadata as the key/value map sent to Stripe.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), self.action.as_metadata_value().to_string());
        map.insert("listing_id".to_string(), self.listing_id.to_string());
        if let Some(owner_id) = self.owner_id {
            map.insert("owner_id".to_string(), owner_id.to_string());
        }
        map
    }

    /// Reads metadata back from a webhook's session object.
    ///
    /// Returns a description of the first problem when the map is missing
    /// required keys or carries unparseable values.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, String> {
        let action_value = map
            .get("type")
            .ok_or_else(|| "missing 'type' key".to_string())?;
        let action = CheckoutAction::parse(action_value)
            .ok_or_else(|| format!("unknown action '{action_value}'"))?;

        let listing_id = map
            .get("listing_id")
            .ok_or_else(|| "missing 'listing_id' key".to_string())?
            .parse::<ListingId>()
            .map_err(|_| "unparseable 'listing_id' value".to_string())?;

        let owner_id = match map.get("owner_id") {
            Some(raw) => Some(
                raw.parse::<UserId>()
                    .map_err(|_| "unparseable 'owner_id' value".to_string())?,
            ),
            None => None,
        };

        Ok(Self {
            action,
            listing_id,
            owner_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_fee_is_ten_dollars() {
        assert_eq!(CheckoutAction::Listing.fee_minor_units(), 1000);
    }

    #[test]
    fn renewal_fee_is_three_dollars() {
        assert_eq!(CheckoutAction::Renew.fee_minor_units(), 300);
    }

    #[test]
    fn metadata_values_round_trip() {
        for action in [CheckoutAction::Listing, CheckoutAction::Renew] {
            assert_eq!(CheckoutAction::parse(action.as_metadata_value()), Some(action));
        }
        assert_eq!(CheckoutAction::parse("subscription"), None);
    }

    #[test]
    fn product_label_includes_title() {
        let label = CheckoutAction::Listing.product_label("Surly Cross-Check");
        assert_eq!(label, "PedalPost Listing: Surly Cross-Check");

        let label = CheckoutAction::Renew.product_label("Surly Cross-Check");
        assert_eq!(label, "PedalPost Renewal: Surly Cross-Check");
    }

    #[test]
    fn product_label_truncates_long_titles() {
        let long_title = "x".repeat(200);
        let label = CheckoutAction::Listing.product_label(&long_title);
        assert_eq!(label.chars().count(), MAX_LABEL_CHARS);
    }

    #[test]
    fn product_label_truncates_on_char_boundaries() {
        let title = "é".repeat(200);
        let label = CheckoutAction::Renew.product_label(&title);
        assert_eq!(label.chars().count(), MAX_LABEL_CHARS);
    }

    #[test]
    fn metadata_map_round_trip() {
        let metadata = CheckoutMetadata {
            action: CheckoutAction::Renew,
            listing_id: crate::domain::foundation::ListingId::from_i64(42),
            owner_id: Some(crate::domain::foundation::UserId::from_i64(7)),
        };
        let map = metadata.to_map();
        assert_eq!(map.get("type").map(String::as_str), Some("renew"));
        assert_eq!(map.get("listing_id").map(String::as_str), Some("42"));
        assert_eq!(map.get("owner_id").map(String::as_str), Some("7"));

        assert_eq!(CheckoutMetadata::from_map(&map), Ok(metadata));
    }

    #[test]
    fn metadata_tolerates_missing_owner() {
        let mut map = HashMap::new();
        map.insert("type".to_string(), "listing".to_string());
        map.insert("listing_id".to_string(), "5".to_string());

        let metadata = CheckoutMetadata::from_map(&map).unwrap();
        assert_eq!(metadata.owner_id, None);
    }

    #[test]
    fn metadata_rejects_missing_listing_id() {
        let mut map = HashMap::new();
        map.insert("type".to_string(), "listing".to_string());

        assert!(CheckoutMetadata::from_map(&map).is_err());
    }

    #[test]
    fn metadata_rejects_unknown_action() {
        let mut map = HashMap::new();
        map.insert("type".to_string(), "donation".to_string());
        map.insert("listing_id".to_string(), "5".to_string());

        assert!(CheckoutMetadata::from_map(&map).is_err());
    }
}
