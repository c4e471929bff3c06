//! Cache Module
//!
//! Provides a byte-capacity bounded in-memory cache with LRU eviction.

mod entry;
mod hasher;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use hasher::hash_key;
pub use recency::{NodeRef, RecencyOrder};
pub use stats::CacheStats;
pub use store::LruCache;
