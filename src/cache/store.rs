//! Cache Store Module
//!
//! Main cache engine combining the entry table with recency tracking under a
//! single lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::cache::{hash_key, CacheEntry, CacheStats, RecencyOrder};
use crate::error::{CacheError, Result};

// == Cache State ==
/// Everything guarded by the cache lock.
#[derive(Debug, Default)]
struct CacheState {
    /// Hash identifier to entry
    entries: HashMap<u64, CacheEntry>,
    /// Recency of the identifiers in `entries`
    order: RecencyOrder,
    /// Sum of entry sizes in bytes
    size: u64,
    /// Activity counters
    stats: CacheStats,
}

impl CacheState {
    /// Drops the entry for `id` together with its recency node.
    fn remove_id(&mut self, id: u64) -> Option<CacheEntry> {
        let entry = self.entries.remove(&id)?;
        self.order.remove(entry.node());
        self.size -= entry.size();
        Some(entry)
    }

    /// Evicts least recently used entries until `incoming` more bytes fit.
    fn make_room(&mut self, incoming: u64, capacity: u64) {
        while self.size + incoming > capacity {
            let Some(victim) = self.order.remove_back() else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&victim) {
                self.size -= evicted.size();
                self.stats.record_eviction();
                debug!(hash = victim, bytes = evicted.size(), "evicted entry");
            }
        }
    }
}

// == LRU Cache ==
/// Byte-capacity bounded cache with least recently used eviction.
///
/// Every method takes the internal lock, so a shared reference (usually behind
/// an `Arc`) is all callers need. Operations are linearizable.
#[derive(Debug)]
pub struct LruCache {
    state: Mutex<CacheState>,
    /// Upper bound on aggregate payload bytes
    capacity: u64,
    /// Item lifetime; accepted but not enforced
    expiration: Duration,
    /// Sweep period; accepted but not enforced
    cleanup_interval: Duration,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum aggregate payload size in bytes
    /// * `expiration` - Item lifetime (carried, never enforced)
    /// * `cleanup_interval` - Expired item sweep period (carried, never enforced)
    pub fn new(capacity: u64, expiration: Duration, cleanup_interval: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            capacity,
            expiration,
            cleanup_interval,
        }
    }

    /// Creates an empty cache with zero expiration settings.
    pub fn with_capacity(capacity: u64) -> Self {
        Self::new(capacity, Duration::ZERO, Duration::ZERO)
    }

    // == Set ==
    /// Stores `payload` under `key`, replacing any existing entry.
    ///
    /// Least recently used entries are evicted until the payload fits. A
    /// payload whose size is greater than or equal to the capacity is refused
    /// with [`CacheError::OversizedItem`] and leaves the cache untouched.
    pub fn set(&self, key: &str, payload: impl Into<Bytes>) -> Result<()> {
        let payload = payload.into();
        let size = payload.len() as u64;
        let mut state = self.state.lock();

        if size >= self.capacity {
            state.stats.record_rejection();
            warn!(key, size, capacity = self.capacity, "rejected oversized item");
            return Err(self.oversized(size));
        }

        let id = hash_key(key);
        state.remove_id(id);
        state.make_room(size, self.capacity);

        let node = state.order.push_front(id);
        state.entries.insert(id, CacheEntry::new(payload, node));
        state.size += size;

        Ok(())
    }

    // == Reject ==
    /// Counts a write of `size` bytes that was refused before reaching
    /// [`LruCache::set`], e.g. a request body cut off at the capacity limit.
    pub fn reject_oversized(&self, size: u64) -> CacheError {
        self.state.lock().stats.record_rejection();
        warn!(size, capacity = self.capacity, "rejected oversized body");
        self.oversized(size)
    }

    fn oversized(&self, size: u64) -> CacheError {
        CacheError::OversizedItem {
            size,
            capacity: self.capacity,
        }
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// A hit promotes the entry to most recently used. The returned buffer is
    /// an independent view and stays valid after eviction.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let id = hash_key(key);
        let mut state = self.state.lock();

        let hit = state
            .entries
            .get(&id)
            .map(|entry| (entry.node(), entry.payload()));

        match hit {
            Some((node, payload)) => {
                state.order.move_to_front(node);
                state.stats.record_hit();
                Some(payload)
            }
            None => {
                state.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Deletes the entry for `key`. Absent keys are ignored.
    pub fn remove(&self, key: &str) {
        let id = hash_key(key);
        self.state.lock().remove_id(id);
    }

    // == Size ==
    /// Returns the aggregate payload size in bytes.
    pub fn size(&self) -> u64 {
        self.state.lock().size
    }

    /// Returns true if `key` is cached, without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(&hash_key(key))
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }

    // == Stats ==
    /// Returns a consistent snapshot of counters and occupancy.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        state
            .stats
            .clone()
            .with_occupancy(state.entries.len(), state.size, self.capacity)
    }

    /// Identifiers from most to least recently used.
    #[cfg(test)]
    pub(crate) fn recency(&self) -> Vec<u64> {
        self.state.lock().order.iter().collect()
    }

    /// Panics if the table, the order and the size counter disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        use std::collections::HashSet;

        let state = self.state.lock();
        let ordered: Vec<u64> = state.order.iter().collect();
        let unique: HashSet<u64> = ordered.iter().copied().collect();
        let stored: HashSet<u64> = state.entries.keys().copied().collect();
        let total: u64 = state.entries.values().map(CacheEntry::size).sum();

        assert_eq!(ordered.len(), unique.len(), "duplicate ids in order");
        assert_eq!(ordered.len(), state.order.len(), "order length drifted");
        assert_eq!(unique, stored, "order and table hold different ids");
        assert_eq!(total, state.size, "size counter drifted");
        assert!(state.size <= self.capacity, "size exceeds capacity");
        for (id, entry) in &state.entries {
            assert_eq!(state.order.get(entry.node()), Some(*id), "node owned by wrong entry");
        }
    }
}
