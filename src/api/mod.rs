//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `PUT /api/v1/cached/{key}` - Store a raw payload
//! - `GET /api/v1/cached/{key}` - Retrieve a raw payload
//! - `DELETE /api/v1/cached/{key}` - Remove a key
//! - `GET /api/v1/stat` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, BASE_PATH, STAT_PATH};
