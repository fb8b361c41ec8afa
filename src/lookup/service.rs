//! Lookup Service Module
//!
//! Composes the cache gateway and the provider client into the
//! read-through lookup sequence.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{DetailCache, DETAIL_TTL_SECS};
use crate::error::{LookupError, Result};
use crate::models::PropertyDetail;
use crate::provider::PropertyProvider;

// == Write Policy ==
/// What to do when populating the cache fails after a successful
/// provider fetch.
///
/// Under `Required` the caller gets an error even though a valid
/// record is in hand. `BestEffort` logs the failure and returns the
/// record anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheWritePolicy {
    /// A failed cache write fails the whole lookup
    #[default]
    Required,
    /// A failed cache write is logged and the record is still returned
    BestEffort,
}

impl FromStr for CacheWritePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "required" => Ok(CacheWritePolicy::Required),
            "best-effort" => Ok(CacheWritePolicy::BestEffort),
            other => Err(format!("unknown cache write policy: {}", other)),
        }
    }
}

// == Lookup Service ==
/// Cache-aside lookup over a cache gateway and a provider client.
///
/// Both collaborators are injected at construction. The service holds
/// no other state, so one instance is shared across all concurrent
/// lookups without locking.
pub struct LookupService {
    cache: Arc<dyn DetailCache>,
    provider: Arc<dyn PropertyProvider>,
    write_policy: CacheWritePolicy,
}

impl LookupService {
    /// Creates a new LookupService with the default (required) write policy.
    pub fn new(cache: Arc<dyn DetailCache>, provider: Arc<dyn PropertyProvider>) -> Self {
        Self {
            cache,
            provider,
            write_policy: CacheWritePolicy::Required,
        }
    }

    /// Overrides the cache write policy.
    pub fn with_write_policy(mut self, policy: CacheWritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    /// Resolves the detail record for `property_id`.
    ///
    /// Sequence: cache read, then on a miss a single provider call,
    /// then a cache write with a one-hour expiration. Cache read and
    /// decode failures are treated like a miss and never abort the
    /// lookup; every provider failure is fatal. A cache write failure
    /// is fatal under the default policy even though the record was
    /// already fetched.
    pub async fn get_detail(&self, property_id: &str, user_id: &str) -> Result<PropertyDetail> {
        match self.cache.fetch(property_id).await {
            Ok(Some(raw)) => match serde_json::from_str::<PropertyDetail>(&raw) {
                Ok(detail) => {
                    debug!(property_id, "cache hit");
                    return Ok(detail);
                }
                Err(err) => {
                    let err = LookupError::CacheDecode(err.to_string());
                    warn!(property_id, %err, "discarding undecodable cache entry");
                }
            },
            Ok(None) => {
                debug!(property_id, "cache miss");
            }
            Err(err) => {
                // Fail open: a broken cache must not take down lookups
                warn!(property_id, %err, "cache read failed, falling through to provider");
            }
        }

        let detail = self.provider.fetch_detail(property_id, user_id).await?;

        let serialized = serde_json::to_string(&detail)
            .map_err(|err| LookupError::CacheWrite(err.to_string()))?;

        if let Err(err) = self
            .cache
            .store(property_id, &serialized, DETAIL_TTL_SECS)
            .await
        {
            match self.write_policy {
                CacheWritePolicy::Required => return Err(err),
                CacheWritePolicy::BestEffort => {
                    warn!(property_id, %err, "cache write failed, returning record anyway");
                }
            }
        }

        Ok(detail)
    }
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

    #[tokio::test]
    async fn test_cache_hit_returns_record_without_provider_call() {
        let cache = Arc::new(FakeCache::default());
        cache.preload("property123", &serde_json::to_string(&sample()).unwrap());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache.clone(), provider.clone());
        let detail = service.get_detail("property123", "user123").await.unwrap();

        assert_eq!(detail, sample());
        assert_eq!(provider.calls(), 0);
        assert!(cache.stores().is_empty());
    }

    #[tokio::test]
    async fn test_cache_miss_fetches_and_populates() {
        let cache = Arc::new(FakeCache::default());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache.clone(), provider.clone());
        let detail = service.get_detail("property123", "user123").await.unwrap();

        assert_eq!(detail, sample());
        assert_eq!(provider.calls(), 1);

        let stores = cache.stores();
        assert_eq!(stores.len(), 1);
        let (key, value, ttl) = &stores[0];
        assert_eq!(key, "property123");
        assert_eq!(value, &serde_json::to_string(&sample()).unwrap());
        assert_eq!(*ttl, DETAIL_TTL_SECS);
    }

    #[tokio::test]
    async fn test_cache_read_failure_falls_through_to_provider() {
        let cache = Arc::new(FakeCache::default().failing_reads());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache, provider.clone());
        let detail = service.get_detail("property123", "user123").await.unwrap();

        assert_eq!(detail, sample());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_treated_as_miss() {
        let cache = Arc::new(FakeCache::default());
        cache.preload("property123", "{not valid json");
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache.clone(), provider.clone());
        let detail = service.get_detail("property123", "user123").await.unwrap();

        assert_eq!(detail, sample());
        assert_eq!(provider.calls(), 1);
        // The bad entry is overwritten by the fresh record
        assert_eq!(cache.stores().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_status_error_is_fatal_and_nothing_cached() {
        let cache = Arc::new(FakeCache::default());
        let provider = Arc::new(FakeProvider::failing_with_status(400));

        let service = LookupService::new(cache.clone(), provider.clone());
        let err = service
            .get_detail("property123", "user123")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("400"));
        assert_eq!(provider.calls(), 1);
        assert!(cache.stores().is_empty());
    }

    #[tokio::test]
    async fn test_cache_write_failure_is_fatal_by_default() {
        let cache = Arc::new(FakeCache::default().failing_writes());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache, provider.clone());
        let err = service
            .get_detail("property123", "user123")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::CacheWrite(_)));
        // The provider call did succeed; the failure is the write alone
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_cache_write_failure_tolerated_under_best_effort() {
        let cache = Arc::new(FakeCache::default().failing_writes());
        let provider = Arc::new(FakeProvider::returning(sample()));

        let service = LookupService::new(cache, provider)
            .with_write_policy(CacheWritePolicy::BestEffort);
        let detail = service.get_detail("property123", "user123").await.unwrap();

        assert_eq!(detail, sample());
    }

    #[test]
    fn test_write_policy_parsing() {
        assert_eq!(
            "required".parse::<CacheWritePolicy>().unwrap(),
            CacheWritePolicy::Required
        );
        assert_eq!(
            "best-effort".parse::<CacheWritePolicy>().unwrap(),
            CacheWritePolicy::BestEffort
        );
        assert!("sometimes".parse::<CacheWritePolicy>().is_err());
    }
}
