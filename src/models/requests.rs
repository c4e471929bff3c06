//! Request models for the cache server API
//!
//! Payloads travel as raw request bodies; the only structured input is the
//! key taken from the request path.

use crate::error::{CacheError, Result};

/// A validated, non-empty cache key taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Validates a raw path key.
    ///
    /// Returns [`CacheError::EmptyKey`] when nothing follows the base path.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CacheError::EmptyKey);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
