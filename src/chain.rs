//! Bucket array and collision chains.
//!
//! Each bucket holds only the head of a singly linked chain. Chain nodes
//! live in a per-table slot arena and link to each other through arena
//! keys, so unlinking a node moves it out of the arena by value: a removed
//! node can be neither leaked nor released twice.

use slotmap::{new_key_type, SlotMap};
use std::collections::TryReserveError;

new_key_type! {
    /// Arena key of one chain node.
    pub(crate) struct EntryKey;
}

#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: Box<[u8]>,
    pub(crate) value: V,
    pub(crate) next: Option<EntryKey>,
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Bucket {
    head: Option<EntryKey>,
}

pub(crate) struct Chains<V> {
    buckets: Vec<Bucket>,
    entries: SlotMap<EntryKey, Entry<V>>,
}

impl<V> Chains<V> {
    /// Allocate `count` empty buckets, failing instead of aborting when the
    /// array cannot be reserved.
    pub(crate) fn with_buckets(count: usize) -> Result<Self, TryReserveError> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(count)?;
        buckets.resize(count, Bucket::default());
        Ok(Self {
            buckets,
            entries: SlotMap::with_key(),
        })
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total entries across all chains.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            entries: &self.entries,
            cur: self.buckets[bucket].head,
        }
    }

    /// First entry in `bucket` whose key equals `key` byte for byte.
    pub(crate) fn find(&self, bucket: usize, key: &[u8]) -> Option<EntryKey> {
        self.chain(bucket)
            .find(|(_, e)| &*e.key == key)
            .map(|(k, _)| k)
    }

    pub(crate) fn get(&self, k: EntryKey) -> Option<&Entry<V>> {
        self.entries.get(k)
    }

    pub(crate) fn get_mut(&mut self, k: EntryKey) -> Option<&mut Entry<V>> {
        self.entries.get_mut(k)
    }

    /// Link a new node at the head of `bucket`'s chain.
    pub(crate) fn push_front(&mut self, bucket: usize, key: Box<[u8]>, value: V) -> EntryKey {
        let head = &mut self.buckets[bucket].head;
        let k = self.entries.insert(Entry {
            key,
            value,
            next: *head,
        });
        *head = Some(k);
        k
    }

    /// Unlink and return the node matching `key` from `bucket`'s chain.
    ///
    /// The bucket head is repaired when the match is first in the chain,
    /// otherwise the predecessor is relinked past it.
    pub(crate) fn unlink(&mut self, bucket: usize, key: &[u8]) -> Option<Entry<V>> {
        let mut prev: Option<EntryKey> = None;
        let mut cur = self.buckets[bucket].head;
        while let Some(k) = cur {
            let entry = self.entries.get(k)?;
            if &*entry.key == key {
                break;
            }
            prev = Some(k);
            cur = entry.next;
        }

        let found = self.entries.remove(cur?)?;
        match prev {
            None => self.buckets[bucket].head = found.next,
            Some(p) => {
                if let Some(pe) = self.entries.get_mut(p) {
                    pe.next = found.next;
                }
            }
        }
        Some(found)
    }

    /// Unlink every node, visiting buckets in index order and each chain
    /// head to tail. The arena is empty afterwards.
    pub(crate) fn drain(&mut self, mut f: impl FnMut(Box<[u8]>, V)) {
        for bucket in self.buckets.iter_mut() {
            let mut cur = bucket.head.take();
            while let Some(k) = cur {
                let Some(entry) = self.entries.remove(k) else {
                    break;
                };
                cur = entry.next;
                f(entry.key, entry.value);
            }
        }
        debug_assert!(self.entries.is_empty());
    }
}

/// Walks one bucket's chain from head to tail.
pub(crate) struct Chain<'a, V> {
    entries: &'a SlotMap<EntryKey, Entry<V>>,
    cur: Option<EntryKey>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (EntryKey, &'a Entry<V>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let entry = self.entries.get(k)?;
        self.cur = entry.next;
        Some((k, entry))
    }
}
