//! Property Lookup - a cache-aside lookup service for property details
//!
//! Checks a Redis cache first, falls back to the remote property-data
//! provider on a miss, and writes the result back with a one-hour TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod provider;

pub use api::AppState;
pub use config::Config;
pub use lookup::{CacheWritePolicy, LookupService};
