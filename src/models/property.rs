//! Property Detail Record
//!
//! The sole domain entity: a property detail record as returned by the
//! provider and stored in the cache.

use serde::{Deserialize, Serialize};

/// A property detail record.
///
/// Constructed either by deserializing a cache entry or a provider
/// response, and never mutated afterwards. The `id` doubles as the
/// cache key and the provider query key.
///
/// `price` is pre-formatted display text (e.g. "$500,000"), kept as an
/// opaque string rather than a numeric amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    /// Property identifier
    pub id: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Display-formatted price text
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyDetail {
        PropertyDetail {
            id: "property123".to_string(),
            address: "123 Main St".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip: "22205".to_string(),
            price: "$500,000".to_string(),
        }
    }

    #[test]
    fn test_serialize_deserialize_round_trip() {
        let detail = sample();

        let json = serde_json::to_string(&detail).unwrap();
        let decoded: PropertyDetail = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, detail);
    }

    #[test]
    fn test_deserialize_provider_shape() {
        let json = r#"{
            "id": "property123",
            "address": "123 Main St",
            "city": "Arlington",
            "state": "VA",
            "zip": "22205",
            "price": "$500,000"
        }"#;

        let detail: PropertyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail, sample());
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let json = r#"{"id": "property123", "address": "123 Main St"}"#;
        let result = serde_json::from_str::<PropertyDetail>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_stays_verbatim() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("$500,000"));
    }
}
