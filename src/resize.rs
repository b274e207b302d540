//! Growth: doubling plus a full rehash into a fresh bucket store.

use crate::bucket_store::BucketStore;
use crate::hashing::BucketHasher;
use crate::table::HashTable;
use log::{debug, trace};

/// Smallest `capacity * 2^n` (n >= 0) keeping `len / capacity` within
/// `threshold`.
pub(crate) fn grown_capacity(len: usize, capacity: usize, threshold: f64) -> usize {
    let mut next = capacity.max(1);
    while len as f64 / next as f64 > threshold {
        next = next.saturating_mul(2);
        if next == usize::MAX {
            break;
        }
    }
    next
}

impl<V, B, H> HashTable<V, B, H>
where
    B: BucketStore<V>,
    H: BucketHasher,
{
    /// Called after a new key was attached. Value overwrites never get here.
    pub(crate) fn maybe_grow(&mut self) {
        let capacity = self.buckets.capacity();
        let target = grown_capacity(self.len, capacity, self.config.max_load_factor);
        if target != capacity {
            self.rehash(target);
        }
    }

    /// Move every entry into a new store of `new_capacity` buckets,
    /// recomputing each index. The old store is consumed.
    fn rehash(&mut self, new_capacity: usize) {
        let old_capacity = self.buckets.capacity();
        debug!(
            "resizing: {} entries, capacity {} -> {}",
            self.len, old_capacity, new_capacity
        );

        let old = core::mem::replace(&mut self.buckets, B::with_capacity(new_capacity));
        for (key, value) in old.into_entries() {
            let index = self.hasher.bucket_index(&key, new_capacity);
            trace!("rehash {:?} -> bucket {}", key, index);
            let displaced = self.buckets.upsert(index, key, value);
            debug_assert!(displaced.is_none(), "rehash met the same key twice");
        }

        #[cfg(debug_assertions)]
        {
            let violations = self.validate();
            debug_assert!(
                violations.is_empty(),
                "rehash left the table inconsistent: {:?}",
                violations
            );
        }
    }
}
