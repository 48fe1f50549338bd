//! Seeded key hashing and bucket index derivation.
//!
//! Keys are hashed with MurmurHash3 (x86, 32-bit output). The 32-bit hash
//! domain bounds the number of buckets a table may address: anything past
//! `2^32` buckets could never be reached by a distinct hash value.

use crate::error::Error;

/// Largest bucket count a table may be created with.
pub const MAX_CAPACITY: u64 = 1 << 32;

/// Hash `key` under `seed`.
///
/// Deterministic for a given `(key, seed)` pair; changing the seed changes
/// the distribution of keys across buckets.
#[inline]
pub fn hash(key: &[u8], seed: u32) -> u32 {
    let mut source = key;
    match murmur3::murmur3_32(&mut source, seed) {
        Ok(h) => h,
        // `&[u8]` reads never fail.
        Err(_) => unreachable!("reading an in-memory key failed"),
    }
}

/// Map a hash onto `[0, capacity)`.
///
/// `capacity` must be non-zero; tables guarantee this at construction.
#[inline]
pub fn bucket_index(hash: u32, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index on a zero-capacity table");
    // u64 keeps `capacity == 2^32` representable on every target.
    (u64::from(hash) % capacity as u64) as usize
}

/// Validate a requested bucket count and convert it to a native length.
///
/// Zero and counts above [`MAX_CAPACITY`] are invalid. A valid count the
/// target's `usize` cannot hold is an allocation failure.
pub(crate) fn checked_capacity(capacity: u64) -> Result<usize, Error> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(Error::InvalidCapacity);
    }
    usize::try_from(capacity).map_err(|_| Error::AllocationFailed)
}
