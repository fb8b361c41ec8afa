//! Provider Client Module
//!
//! Fetches property records from the remote provider over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{LookupError, Result};
use crate::models::PropertyDetail;

// == Provider Trait ==
/// Retrieval of a property record from the authoritative data source.
///
/// The call is a read against the provider: idempotent and free of
/// side effects from this service's point of view.
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// Fetches the record for `property_id`, attributing the request to `user_id`.
    async fn fetch_detail(&self, property_id: &str, user_id: &str) -> Result<PropertyDetail>;
}

// == HTTP Implementation ==
/// Reqwest-based provider client.
///
/// The endpoint and credential are constructor arguments, so tests can
/// point an instance at a mock server instead of swapping out a global
/// transport.
pub struct HttpProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpProvider {
    /// Creates a new HttpProvider for the given endpoint and credential.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PropertyProvider for HttpProvider {
    /// Issues exactly one POST to the provider endpoint.
    ///
    /// The body requests the record without comparable-sale data. The
    /// user id is forwarded verbatim for attribution; it is never
    /// validated here. Non-success statuses, transport failures, and
    /// malformed bodies are all fatal - there is no retry.
    async fn fetch_detail(&self, property_id: &str, user_id: &str) -> Result<PropertyDetail> {
        let payload = json!({
            "id": property_id,
            "comps": false,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("x-user-id", user_id)
            .json(&payload)
            .send()
            .await
            .map_err(|err| LookupError::OriginTransport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::OriginStatus(status.as_u16()));
        }

        response
            .json::<PropertyDetail>()
            .await
            .map_err(|err| LookupError::OriginDecode(err.to_string()))
    }
}
