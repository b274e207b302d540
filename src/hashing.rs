//! Key-to-bucket mapping.
//!
//! A `BucketHasher` turns a key into a `u64` and reduces it modulo the
//! current capacity. The reduction is capacity-dependent, so callers must
//! recompute the index after every capacity change and never cache it.

use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Maps keys to bucket indices.
pub trait BucketHasher {
    /// Capacity-independent hash of `key`.
    fn hash_key(&self, key: &str) -> u64;

    /// Bucket index of `key` for a store of `capacity` buckets, in
    /// `[0, capacity)`.
    ///
    /// Panics if `capacity` is zero; tables never hold a zero-capacity store.
    #[inline]
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        assert!(capacity > 0, "bucket index requested for zero capacity");
        (self.hash_key(key) % capacity as u64) as usize
    }

    /// One-line description shown in the debug dump.
    fn describe(&self) -> &str;
}

/// Sum of the key's Unicode scalar values.
///
/// Anagrams collide and small capacities cluster badly. Kept as the
/// default because bucket layouts under it are easy to predict by hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CodePointSum;

impl BucketHasher for CodePointSum {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        key.chars()
            .map(|c| u64::from(u32::from(c)))
            .fold(0u64, u64::wrapping_add)
    }

    fn describe(&self) -> &str {
        "hash(key) = (∑ code points) % capacity"
    }
}

/// Runs the key through a `BuildHasher` before reduction.
#[derive(Clone, Debug, Default)]
pub struct MixingHash<S = DefaultHashBuilder> {
    builder: S,
}

impl<S: BuildHasher> MixingHash<S> {
    pub fn new(builder: S) -> Self {
        Self { builder }
    }
}

impl<S: BuildHasher> BucketHasher for MixingHash<S> {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self.builder.hash_one(key)
    }

    fn describe(&self) -> &str {
        "hash(key) = build_hasher(key) % capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_sum_matches_hand_computed_indices() {
        let h = CodePointSum;
        assert_eq!(h.hash_key("2025-12-18"), 495);
        assert_eq!(h.bucket_index("2025-12-18", 5), 0);
        assert_eq!(h.bucket_index("2025-12-19", 5), 1);
        assert_eq!(h.bucket_index("2025-12-20", 5), 3);
        assert_eq!(h.bucket_index("", 7), 0);
    }

    #[test]
    fn anagrams_collide_under_code_point_sum() {
        let h = CodePointSum;
        for cap in 1..32 {
            assert_eq!(h.bucket_index("listen", cap), h.bucket_index("silent", cap));
        }
    }

    #[test]
    fn non_ascii_keys_sum_scalar_values() {
        let h = CodePointSum;
        assert_eq!(h.hash_key("é"), 0xE9);
        assert_eq!(h.hash_key("∑a"), 0x2211 + 0x61);
    }

    #[test]
    fn mixing_hash_is_deterministic_per_builder() {
        let h: MixingHash = MixingHash::default();
        let a = h.bucket_index("listen", 1024);
        assert_eq!(a, h.bucket_index("listen", 1024));
        assert!(a < 1024);
    }

    #[test]
    #[should_panic(expected = "zero capacity")]
    fn zero_capacity_is_rejected() {
        CodePointSum.bucket_index("a", 0);
    }
}
