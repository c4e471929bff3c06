//! Request and Response models for the cache server API
//!
//! This module defines the key validation and the JSON bodies the server
//! sends back.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CacheKey;
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, SetResponse, StatsResponse};
