//! HashTable: fixed bucket array with separately chained, byte-string keys.

use crate::chain::{Chain, Chains};
use crate::error::{Error, InsertError};
use crate::hasher;
use crate::last_error;
use core::fmt;
use std::collections::TryReserveError;

/// Fixed-capacity hash table mapping byte-string keys to values of type `V`.
///
/// The table owns every stored `V`. To store values owned elsewhere, use a
/// handle type such as `&T` or `Rc<T>`; dropping such a value only
/// releases the table's handle.
pub struct HashTable<V> {
    chains: Chains<V>,
    seed: u32,
}

impl<V> HashTable<V> {
    /// Create an empty table with `capacity` buckets and seed 0.
    ///
    /// Fails with [`Error::InvalidCapacity`] unless `1 <= capacity <= 2^32`
    /// and with [`Error::AllocationFailed`] if the bucket array cannot be
    /// allocated.
    pub fn new(capacity: u64) -> Result<Self, Error> {
        Self::with_seed(capacity, 0)
    }

    /// Create an empty table with `capacity` buckets hashing under `seed`.
    pub fn with_seed(capacity: u64, seed: u32) -> Result<Self, Error> {
        last_error::clear();
        last_error::record(Self::allocate(capacity, seed))
    }

    fn allocate(capacity: u64, seed: u32) -> Result<Self, Error> {
        let count = hasher::checked_capacity(capacity)?;
        let chains = Chains::with_buckets(count).map_err(|_| Error::AllocationFailed)?;
        Ok(Self { chains, seed })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets, fixed at creation.
    pub fn capacity(&self) -> usize {
        self.chains.bucket_count()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replace the hashing seed.
    ///
    /// Existing entries are not rehashed. Changing the seed of a non-empty
    /// table leaves its entries in buckets that lookups no longer probe, so
    /// only reseed an empty table.
    pub fn set_seed(&mut self, seed: u32) {
        last_error::clear();
        self.seed = seed;
    }

    /// Bucket index `key` maps to under the current seed.
    pub fn bucket_of(&self, key: &[u8]) -> usize {
        hasher::bucket_index(hasher::hash(key, self.seed), self.capacity())
    }

    /// Number of entries chained in `bucket`.
    ///
    /// # Panics
    /// If `bucket >= self.capacity()`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chains.chain(bucket).count()
    }

    /// Insert `key -> value`. Duplicate keys are rejected, never overwritten.
    ///
    /// The table stores its own copy of `key`. On failure the table is
    /// unchanged and `value` is returned inside the error.
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<(), InsertError<V>> {
        last_error::clear();
        last_error::record(self.link(key, value))
    }

    fn link(&mut self, key: &[u8], value: V) -> Result<(), InsertError<V>> {
        if key.is_empty() {
            return Err(InsertError::new(Error::NullArgument, value));
        }
        let bucket = self.bucket_of(key);
        if self.chains.find(bucket, key).is_some() {
            return Err(InsertError::new(Error::DuplicateKey, value));
        }
        let owned = match copy_key(key) {
            Ok(k) => k,
            Err(_) => return Err(InsertError::new(Error::AllocationFailed, value)),
        };
        self.chains.push_front(bucket, owned, value);
        Ok(())
    }

    /// Reference to the value stored under `key`.
    pub fn get(&self, key: &[u8]) -> Result<&V, Error> {
        last_error::clear();
        let bucket = self.bucket_of(key);
        let found = self
            .chains
            .find(bucket, key)
            .and_then(|k| self.chains.get(k))
            .map(|e| &e.value)
            .ok_or(Error::NotFound);
        last_error::record(found)
    }

    /// Mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &[u8]) -> Result<&mut V, Error> {
        last_error::clear();
        let bucket = self.bucket_of(key);
        let found = match self.chains.find(bucket, key) {
            Some(k) => self.chains.get_mut(k).map(|e| &mut e.value),
            None => None,
        };
        last_error::record(found.ok_or(Error::NotFound))
    }

    /// Whether `key` is present. Does not touch the last-error slot.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.chains.find(self.bucket_of(key), key).is_some()
    }

    /// Unlink the entry for `key` and hand its value back to the caller.
    pub fn remove(&mut self, key: &[u8]) -> Result<V, Error> {
        last_error::clear();
        let bucket = self.bucket_of(key);
        let removed = self
            .chains
            .unlink(bucket, key)
            .map(|e| e.value)
            .ok_or(Error::NotFound);
        last_error::record(removed)
    }

    /// Unlink the entry for `key` and pass its value to `destructor`.
    ///
    /// The destructor runs after the chain has been repaired.
    pub fn delete_with<F>(&mut self, key: &[u8], destructor: F) -> Result<(), Error>
    where
        F: FnOnce(V),
    {
        let value = self.remove(key)?;
        destructor(value);
        Ok(())
    }

    /// Tear the table down, passing every stored value to `destructor`.
    ///
    /// Dropping a table instead releases every value with its own `Drop`.
    pub fn destroy<F>(mut self, mut destructor: F)
    where
        F: FnMut(V),
    {
        last_error::clear();
        self.chains.drain(|_key, value| destructor(value));
    }

    /// Iterate over `(key, value)` pairs. The order is unspecified.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            chains: &self.chains,
            bucket: 0,
            chain: None,
        }
    }
}

fn copy_key(key: &[u8]) -> Result<Box<[u8]>, TryReserveError> {
    let mut owned = Vec::new();
    owned.try_reserve_exact(key.len())?;
    owned.extend_from_slice(key);
    Ok(owned.into_boxed_slice())
}

/// Iterator over entries of a [`HashTable`].
pub struct Iter<'a, V> {
    chains: &'a Chains<V>,
    bucket: usize,
    chain: Option<Chain<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, e)) = self.chain.as_mut().and_then(Iterator::next) {
                return Some((&*e.key, &e.value));
            }
            if self.bucket >= self.chains.bucket_count() {
                return None;
            }
            self.chain = Some(self.chains.chain(self.bucket));
            self.bucket += 1;
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, V>(&'a HashTable<V>);
        impl<V: fmt::Debug> fmt::Debug for Entries<'_, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(
                        self.0
                            .iter()
                            .map(|(k, v)| (String::from_utf8_lossy(k), v)),
                    )
                    .finish()
            }
        }

        f.debug_struct("HashTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("seed", &self.seed)
            .field("entries", &Entries(self))
            .finish()
    }
}
