//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{LookupError, Result};
use crate::lookup::LookupService;
use crate::models::{DetailQuery, HealthResponse, PropertyDetail};

/// Application state shared across all handlers.
///
/// The lookup service is stateless apart from its connection handles,
/// so a single shared instance serves all concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Shared lookup orchestrator
    pub lookup: Arc<LookupService>,
}

impl AppState {
    /// Creates a new AppState wrapping the given lookup service.
    pub fn new(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Handler for GET /property/details
///
/// Resolves the property record for the given identifier, consulting
/// the cache before the provider. The user id is forwarded to the
/// provider for attribution.
pub async fn detail_handler(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<PropertyDetail>> {
    // Validate request
    if let Some(error_msg) = query.validate() {
        return Err(LookupError::InvalidRequest(error_msg));
    }

    let detail = state
        .lookup
        .get_detail(&query.property_id, &query.user_id)
        .await?;

    Ok(Json(detail))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::property_tests::support::{FakeCache, FakeProvider};

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

    fn state_with(cache: Arc<FakeCache>, provider: Arc<FakeProvider>) -> AppState {
        AppState::new(LookupService::new(cache, provider))
    }

    #[tokio::test]
    async fn test_detail_handler_cache_hit() {
        let cache = Arc::new(FakeCache::default());
        cache.preload("property123", &serde_json::to_string(&sample()).unwrap());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let query = DetailQuery {
            property_id: "property123".to_string(),
            user_id: "user123".to_string(),
        };
        let result = detail_handler(
            State(state_with(cache, provider.clone())),
            Query(query),
        )
        .await;

        let Json(detail) = result.unwrap();
        assert_eq!(detail, sample());
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_detail_handler_missing_params() {
        let cache = Arc::new(FakeCache::default());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let query = DetailQuery {
            property_id: "".to_string(),
            user_id: "user123".to_string(),
        };
        let result = detail_handler(State(state_with(cache, provider)), Query(query)).await;

        assert!(matches!(result, Err(LookupError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
