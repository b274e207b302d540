//! chain-hashmap: a single-threaded, string-keyed hash table that resolves
//! collisions per bucket and grows by doubling plus a full rehash.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep each piece small enough that its invariant can be checked
//!   on its own, and offer a validator that checks them all together.
//! - Layers:
//!   - `BucketHasher`: key -> `u64`, reduced modulo the current capacity.
//!     `CodePointSum` (default) sums Unicode scalar values; `MixingHash`
//!     defers to a `BuildHasher`.
//!   - `Chain`: singly-linked entries for one bucket, linked by arena key
//!     inside the owning store's `SlotMap`. New keys go to the head.
//!   - `BucketStore<V>`: fixed-capacity array of buckets. `ChainStore`
//!     (linked chains) and `FlatStore` (a `Vec` per bucket) are
//!     interchangeable.
//!   - Resize: after a new key lands, if `len / capacity` exceeds the
//!     threshold, a new store of doubled capacity is built and every
//!     entry is moved into it with its index recomputed.
//!   - `HashTable<V, B, H>`: insert / lookup / delete / len / load
//!     factor / clear / dump, plus `validate`.
//!
//! Constraints
//! - Single-threaded and synchronous. A rehash runs inside the `insert`
//!   that triggered it; no partially migrated state is observable.
//! - Unique keys. Inserting an existing key replaces its value in place.
//! - Capacity is always positive and never shrinks, except that `clear`
//!   returns to the configured initial capacity.
//! - Lookups hand out borrows, so a rehash can never run while a caller
//!   still holds a reference into the table.
//!
//! Invariants (checked by `HashTable::validate`)
//! - `len` equals the total number of entries over all buckets.
//! - No key is stored twice.
//! - Every entry in bucket `i` has `bucket_index(key, capacity) == i`.
//! - `load_factor() <= max_load_factor()` after every public call.
//!
//! Notes and non-goals
//! - Absent keys are reported through `Option`/`bool`, never as errors.
//! - No open addressing, no incremental resize, no persistence.
//! - The code-point-sum hash is weak (anagrams collide); it is the default
//!   because its bucket layouts are predictable. Use `MixingHash` when
//!   distribution matters.

mod bucket_store;
mod chain;
mod config;
mod dump;
mod error;
mod flat_store;
mod hashing;
mod resize;
mod table;
mod table_proptest;
mod validate;

// Public surface
pub use bucket_store::{BucketStore, ChainDrain, ChainStore};
pub use chain::ChainIter;
pub use config::{TableConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};
pub use error::{ConfigError, Violation};
pub use flat_store::{FlatBucket, FlatStore};
pub use hashing::{BucketHasher, CodePointSum, MixingHash};
pub use table::{HashTable, Iter};
