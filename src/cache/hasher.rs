//! Key Hasher Module
//!
//! Maps cache keys to the fixed-width identifiers used by the entry table.

// == FNV-1a Parameters ==
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// == Hash Key ==
/// Computes the 64-bit FNV-1a hash of a key.
///
/// The result is stable for the lifetime of the process (and across
/// processes), so the same key always addresses the same entry. Distinct keys
/// that collide share one entry.
pub fn hash_key(key: &str) -> u64 {
    hash_bytes(key.as_bytes())
}

/// Computes the 64-bit FNV-1a hash of arbitrary bytes.
fn hash_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
