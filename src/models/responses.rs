//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies. Cache hits are
//! returned as raw bytes and have no DTO.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for PUT on a key
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Stored payload size in bytes
    pub size: u64,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            size,
        }
    }
}

/// Response body for DELETE on a key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was removed
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' removed", key),
            key,
        }
    }
}

/// Response body for the stat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Aggregate payload size in bytes
    pub size: u64,
    /// Number of cached objects
    pub objects: usize,
    /// Configured capacity in bytes
    pub capacity: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Writes refused as oversized
    pub rejected: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured item expiration, not enforced
    pub expiration_secs: u64,
    /// Configured cleanup interval, not enforced
    pub cleanup_interval_secs: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(stats: &CacheStats, expiration_secs: u64, cleanup_interval_secs: u64) -> Self {
        Self {
            size: stats.size,
            objects: stats.objects,
            capacity: stats.capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejected: stats.rejected,
            hit_rate: stats.hit_rate(),
            expiration_secs,
            cleanup_interval_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
