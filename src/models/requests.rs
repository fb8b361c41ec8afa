//! Request DTOs for the lookup service API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

/// Query parameters for the detail lookup (GET /property/details)
///
/// # Fields
/// - `property_id`: identifier of the property to look up
/// - `user_id`: caller identity, passed through to the provider verbatim
#[derive(Debug, Clone, Deserialize)]
pub struct DetailQuery {
    /// The property identifier
    #[serde(default)]
    pub property_id: String,
    /// The requesting user, forwarded to the provider for attribution
    #[serde(default)]
    pub user_id: String,
}

impl DetailQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.property_id.is_empty() || self.user_id.is_empty() {
            return Some("Missing property_id or user_id".to_string());
        }
        None
    }
}
