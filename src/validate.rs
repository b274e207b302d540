//! Read-only consistency check over the whole table.
//!
//! Costs O(len + capacity). Meant for tests, diagnostics and debug-build
//! checks after a rehash, not for every call.

use crate::bucket_store::BucketStore;
use crate::error::Violation;
use crate::hashing::BucketHasher;
use crate::table::HashTable;
use hashbrown::HashSet;

impl<V, B, H> HashTable<V, B, H>
where
    B: BucketStore<V>,
    H: BucketHasher,
{
    /// Every broken invariant found, empty when the table is consistent.
    ///
    /// Checked: positive capacity; `len` equals the number of stored
    /// entries; each bucket's recorded length matches its contents; keys
    /// are unique; every key sits in the bucket it hashes to under the
    /// current capacity; the load factor is within the threshold.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        let capacity = self.buckets.capacity();
        if capacity == 0 {
            violations.push(Violation::ZeroCapacity);
            return violations;
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.len);
        let mut total = 0;
        for bucket in 0..capacity {
            let mut actual = 0;
            for (key, _) in self.buckets.bucket(bucket) {
                actual += 1;
                let expected = self.hasher.bucket_index(key, capacity);
                if expected != bucket {
                    violations.push(Violation::Misplaced {
                        key: key.to_string(),
                        bucket,
                        expected,
                    });
                }
                if !seen.insert(key) {
                    violations.push(Violation::DuplicateKey {
                        key: key.to_string(),
                    });
                }
            }
            let recorded = self.buckets.chain_len(bucket);
            if recorded != actual {
                violations.push(Violation::ChainLength {
                    bucket,
                    recorded,
                    actual,
                });
            }
            total += actual;
        }

        if total != self.len {
            violations.push(Violation::CountMismatch {
                recorded: self.len,
                actual: total,
            });
        }

        let load = self.load_factor();
        if load > self.config.max_load_factor {
            violations.push(Violation::LoadFactorExceeded {
                load,
                threshold: self.config.max_load_factor,
            });
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::CodePointSum;

    fn sample() -> HashTable<f64> {
        let mut t = HashTable::new();
        t.insert("2025-12-18", 95.75);
        t.insert("2025-12-19", 180.5);
        t.insert("2025-12-20", 260.0);
        t
    }

    #[test]
    fn consistent_table_reports_nothing() {
        assert!(sample().validate().is_empty());
        assert!(HashTable::<i32>::new().validate().is_empty());
    }

    #[test]
    fn detects_count_mismatch() {
        let mut t = sample();
        t.len = 7;
        assert!(t.validate().contains(&Violation::CountMismatch {
            recorded: 7,
            actual: 3
        }));
    }

    #[test]
    fn detects_misplaced_entry() {
        let mut t = sample();
        // "2025-12-18" hashes to bucket 0 under capacity 5.
        t.buckets.upsert(2, "2025-12-18".to_string(), 1.0);
        t.len += 1;
        let v = t.validate();
        assert!(v.contains(&Violation::Misplaced {
            key: "2025-12-18".to_string(),
            bucket: 2,
            expected: 0,
        }));
        assert!(v.contains(&Violation::DuplicateKey {
            key: "2025-12-18".to_string()
        }));
    }

    #[test]
    fn detects_chain_length_drift() {
        let mut t = sample();
        t.buckets.chains[1].len = 4;
        assert_eq!(
            t.validate(),
            vec![Violation::ChainLength {
                bucket: 1,
                recorded: 4,
                actual: 1
            }]
        );
    }

    #[test]
    fn detects_load_factor_over_threshold() {
        let mut t = sample();
        t.config.max_load_factor = 0.5;
        assert_eq!(
            t.validate(),
            vec![Violation::LoadFactorExceeded {
                load: 0.6,
                threshold: 0.5
            }]
        );
    }

    #[test]
    fn misplacement_is_judged_against_current_capacity() {
        let t = sample();
        let hasher = CodePointSum;
        for (key, _) in t.iter() {
            assert!(hasher.bucket_index(key, t.capacity()) < t.capacity());
        }
        assert!(t.validate().is_empty());
    }
}
