//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Lookup Error Enum ==
/// Unified error type for the lookup service.
///
/// Cache read and decode failures are never surfaced to callers: the
/// orchestrator treats them like a miss and falls through to the
/// provider. Everything else is fatal for the request that hit it.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache lookup failed (connection, timeout, protocol)
    #[error("Cache read failed: {0}")]
    CacheRead(String),

    /// Cached payload did not deserialize into a property record
    #[error("Cached entry could not be decoded: {0}")]
    CacheDecode(String),

    /// Cache population failed after a successful provider fetch
    #[error("Cache write failed: {0}")]
    CacheWrite(String),

    /// Provider call failed before a response was received
    #[error("Provider request failed: {0}")]
    OriginTransport(String),

    /// Provider answered with a non-success status
    #[error("Provider returned non-success status code: {0}")]
    OriginStatus(u16),

    /// Provider response body did not match the expected record shape
    #[error("Provider response could not be decoded: {0}")]
    OriginDecode(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LookupError::CacheRead(_)
            | LookupError::CacheDecode(_)
            | LookupError::CacheWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LookupError::OriginTransport(_)
            | LookupError::OriginStatus(_)
            | LookupError::OriginDecode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;
