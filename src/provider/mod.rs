//! Provider Module
//!
//! Outbound client for the remote property-data provider, consulted
//! whenever a record is not in the cache.

mod client;

pub use client::{HttpProvider, PropertyProvider};
