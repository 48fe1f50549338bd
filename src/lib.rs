//! seeded-hashtable: a fixed-capacity, separately chained hash table keyed
//! by byte strings, with seedable MurmurHash3 bucket selection and
//! last-error reporting.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container whose every structural step
//!   (bucket selection, chain link/unlink, teardown) can be reasoned about
//!   on its own.
//! - Layers:
//!   - `hasher`: MurmurHash3 (x86, 32-bit) under a per-table seed, and
//!     `hash mod capacity` bucket selection.
//!   - `chain`: the bucket array plus a slot arena of chain nodes. Buckets
//!     hold only a head key; nodes hold an owned key copy, the value and a
//!     `next` key.
//!   - `HashTable<V>`: public operations (create, insert, get, delete,
//!     destroy, reseed) returning `Result`s.
//!   - `api`: procedural surface accepting absent arguments and reducing
//!     results to booleans/options, for callers that prefer to query
//!     `last_error()` afterwards.
//!
//! Constraints
//! - Single-threaded: no locks, no atomics.
//! - Capacity is fixed at creation (`1..=2^32` buckets); there is no
//!   resizing and no rehashing.
//! - Keys are unique; duplicate inserts fail and leave the table unchanged.
//! - Insert links at the chain head in O(1).
//!
//! Ownership
//! - The table owns each stored `V`. Values owned elsewhere are stored as
//!   handles (`&T`, `Rc<T>`); dropping a handle never frees the referent.
//! - `remove` gives the value back; `delete_with` and `destroy` hand values
//!   to a caller-supplied destructor once the chain is consistent again.
//! - Removed nodes are moved out of the arena, so a node cannot be released
//!   twice, and a failed insert returns the value inside `InsertError`.
//!
//! Last error
//! - Every fallible operation clears the thread-local slot on entry and
//!   records its outcome before returning. `error_message` maps each
//!   `ErrorKind` to a fixed description.
//!
//! Seed hazard
//! - `set_seed` does not move existing entries. Reseeding a non-empty table
//!   strands its entries in buckets that lookups no longer probe.

mod chain;
mod error;
mod hash_table;
mod hash_table_proptest;
mod hasher;
mod last_error;

pub mod api;

// Public surface
pub use error::{error_message, Error, ErrorKind, InsertError};
pub use hash_table::{HashTable, Iter};
pub use hasher::{bucket_index, hash, MAX_CAPACITY};
pub use last_error::last_error;
