//! Cache Entry Module
//!
//! Defines the record stored for each cached key.

use bytes::Bytes;

use crate::cache::NodeRef;

// == Cache Entry ==
/// A stored payload and its position in the recency order.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    payload: Bytes,
    /// Position of this entry's identifier in the recency order
    node: NodeRef,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry owning `node`.
    pub fn new(payload: Bytes, node: NodeRef) -> Self {
        Self { payload, node }
    }

    /// Returns a view of the payload that outlives the entry.
    pub fn payload(&self) -> Bytes {
        self.payload.clone()
    }

    /// Byte size of the payload.
    pub fn size(&self) -> u64 {
        self.payload.len() as u64
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }
}
