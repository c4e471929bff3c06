//! Cache Statistics Module
//!
//! Tracks cache activity counters and occupancy.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache activity and occupancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for absent keys
    pub misses: u64,
    /// Number of entries evicted to make room for writes
    pub evictions: u64,
    /// Number of writes refused because the payload was too large
    pub rejected: u64,
    /// Current number of entries in the cache
    pub objects: usize,
    /// Current aggregate payload size in bytes
    pub size: u64,
    /// Configured capacity in bytes
    pub capacity: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    // == Occupancy ==
    /// Fills in the occupancy fields for a snapshot.
    pub fn with_occupancy(mut self, objects: usize, size: u64, capacity: u64) -> Self {
        self.objects = objects;
        self.size = size;
        self.capacity = capacity;
        self
    }
}
