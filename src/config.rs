//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use crate::lookup::CacheWritePolicy;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Connection URL for the Redis cache backend
    pub redis_url: String,
    /// Endpoint of the remote property-data provider
    pub provider_url: String,
    /// Static credential sent to the provider as `x-api-key`
    pub provider_api_key: String,
    /// What to do when populating the cache fails after a provider fetch
    pub cache_write: CacheWritePolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `REDIS_URL` - Cache backend URL (default: redis://127.0.0.1:6379)
    /// - `PROVIDER_URL` - Provider endpoint (default: https://api.realestateapi.com/v2/PropertyDetail)
    /// - `PROVIDER_API_KEY` - Provider credential (default: test)
    /// - `CACHE_WRITE` - `required` or `best-effort` (default: required)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            provider_url: env::var("PROVIDER_URL").unwrap_or_else(|_| {
                "https://api.realestateapi.com/v2/PropertyDetail".to_string()
            }),
            provider_api_key: env::var("PROVIDER_API_KEY")
                .unwrap_or_else(|_| "test".to_string()),
            cache_write: env::var("CACHE_WRITE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            provider_url: "https://api.realestateapi.com/v2/PropertyDetail".to_string(),
            provider_api_key: "test".to_string(),
            cache_write: CacheWritePolicy::Required,
        }
    }
}
