//! Cache Store Module
//!
//! The `DetailCache` trait is the seam between the lookup orchestrator
//! and the cache backend; `RedisCache` is the production implementation.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::error::{LookupError, Result};

// == Cache Trait ==
/// Read/write access to the external key-value store.
///
/// An absent key is `Ok(None)`, not an error: only transport or
/// protocol failures produce `Err`. Writes overwrite unconditionally.
#[async_trait]
pub trait DetailCache: Send + Sync {
    /// Looks up the serialized record stored under `key`.
    async fn fetch(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` with an expiration of `ttl_secs` seconds.
    async fn store(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;
}

// == Redis Implementation ==
/// Redis-backed cache gateway.
///
/// Holds a multiplexed connection manager, so clones are cheap and the
/// value is safe to share across concurrent lookups.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Connects to the Redis server at `url`.
    ///
    /// The connection manager reconnects on its own after transient
    /// drops; individual commands still fail while the link is down.
    pub async fn connect(url: &str) -> redis::RedisResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl DetailCache for RedisCache {
    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        // A nil reply decodes into None rather than an error
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|err| LookupError::CacheRead(err.to_string()))?;
        Ok(value)
    }

    async fn store(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|err| LookupError::CacheWrite(err.to_string()))?;
        Ok(())
    }
}
