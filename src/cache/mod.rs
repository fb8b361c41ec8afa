//! Cache Module
//!
//! Gateway to the external key-value store that fronts the provider.
//! Values are JSON-serialized property records keyed by property id.

mod store;

// Re-export public types
pub use store::{DetailCache, RedisCache};

// == Public Constants ==
/// Expiration applied to every cached record, in seconds (one hour)
pub const DETAIL_TTL_SECS: u64 = 3600;
