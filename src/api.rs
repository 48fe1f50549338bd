//! Procedural surface over [`HashTable`].
//!
//! Every argument may be absent. Absent tables, keys or values are reported
//! as [`ErrorKind::NullArgument`] through [`last_error`] and cause no
//! mutation. Results are reduced to booleans or options; the specific
//! failure is read back with [`last_error`] and [`error_message`].
//!
//! ```
//! use seeded_hashtable::api;
//! use seeded_hashtable::ErrorKind;
//!
//! let mut table = api::create::<u32>(20).ok();
//! assert!(api::insert(table.as_mut(), Some(&b"key"[..]), Some(7)));
//! assert_eq!(api::get(table.as_ref(), Some(&b"key"[..])), Some(&7));
//! assert!(!api::insert(table.as_mut(), Some(&b"key"[..]), Some(8)));
//! assert_eq!(api::last_error(), ErrorKind::DuplicateKey);
//! api::destroy(table, None);
//! ```

use crate::error::{Error, ErrorKind};
use crate::hash_table::HashTable;
use crate::last_error as slot;

pub use crate::error::error_message;
pub use crate::last_error::last_error;

fn absent() {
    slot::set(ErrorKind::NullArgument);
}

/// Create a table with `capacity` buckets.
pub fn create<V>(capacity: u64) -> Result<HashTable<V>, Error> {
    HashTable::new(capacity)
}

/// Destroy `table`, passing each stored value to `destructor` if one is
/// given and dropping it otherwise. An absent table is a no-op.
pub fn destroy<V>(table: Option<HashTable<V>>, destructor: Option<&mut dyn FnMut(V)>) {
    slot::clear();
    let Some(table) = table else {
        return;
    };
    match destructor {
        Some(f) => table.destroy(f),
        None => table.destroy(drop),
    }
}

/// Insert `key -> value`. Returns `false` on failure; a rejected value is
/// dropped.
pub fn insert<V>(table: Option<&mut HashTable<V>>, key: Option<&[u8]>, value: Option<V>) -> bool {
    slot::clear();
    match (table, key, value) {
        (Some(t), Some(k), Some(v)) => t.insert(k, v).is_ok(),
        _ => {
            absent();
            false
        }
    }
}

/// Value stored under `key`, or `None` when absent or not found.
pub fn get<'a, V>(table: Option<&'a HashTable<V>>, key: Option<&[u8]>) -> Option<&'a V> {
    slot::clear();
    match (table, key) {
        (Some(t), Some(k)) => t.get(k).ok(),
        _ => {
            absent();
            None
        }
    }
}

/// Delete the entry for `key`, passing its value to `destructor` if one is
/// given and dropping it otherwise.
pub fn delete<V>(
    table: Option<&mut HashTable<V>>,
    key: Option<&[u8]>,
    destructor: Option<&mut dyn FnMut(V)>,
) -> bool {
    slot::clear();
    let (Some(t), Some(k)) = (table, key) else {
        absent();
        return false;
    };
    match destructor {
        Some(f) => t.delete_with(k, f).is_ok(),
        None => t.remove(k).is_ok(),
    }
}

/// Replace the seed of `table`. Existing entries are not rehashed.
pub fn set_seed<V>(table: Option<&mut HashTable<V>>, seed: u32) {
    slot::clear();
    match table {
        Some(t) => t.set_seed(seed),
        None => absent(),
    }
}
