//! Request, response, and domain models for the lookup service
//!
//! This module defines the property detail record itself plus the DTOs
//! used for HTTP request and response bodies.

pub mod property;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::PropertyDetail;
pub use requests::DetailQuery;
pub use responses::{ErrorResponse, HealthResponse};
