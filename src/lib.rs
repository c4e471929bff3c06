//! lrucached - A byte-capacity bounded in-memory cache server
//!
//! Stores raw payloads under string keys, evicts least recently used entries
//! when the configured byte capacity would be exceeded, and serves the cache
//! over a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::LruCache;
pub use config::Config;
pub use error::CacheError;
