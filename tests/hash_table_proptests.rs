// HashTable property tests (public API only).
//
// Property 1: index bound.
//  - For every key and every capacity, `bucket_index` is in [0, capacity).
//
// Property 2: cardinality and round-trip.
//  - N distinct keys give len == N; every key reads back its latest value,
//    whatever resizes happened in between.
//
// Property 3: threshold postcondition.
//  - Immediately after any insert, load_factor() <= max_load_factor().
//
// Property 4: resize fidelity.
//  - The (key, value) set seen by a full scan just before and just after a
//    resize differs only by the key that triggered it; capacity doubles.
mod common;

use chain_hashmap::{
    BucketHasher, BucketStore, ChainStore, CodePointSum, FlatStore, HashTable, MixingHash,
    TableConfig,
};
use common::initialize_logger;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn scan<B: BucketStore<u32>>(t: &HashTable<u32, B>) -> BTreeMap<String, u32> {
    t.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn check_growth<B: BucketStore<u32>>(
    mut t: HashTable<u32, B>,
    entries: Vec<(String, u32)>,
) -> Result<(), TestCaseError> {
    let mut model: BTreeMap<String, u32> = BTreeMap::new();
    for (k, v) in entries {
        let before_cap = t.capacity();
        let before = scan(&t);
        let is_new = !model.contains_key(&k);
        t.insert(k.clone(), v);
        model.insert(k.clone(), v);

        prop_assert!(t.load_factor() <= t.max_load_factor());
        if t.capacity() != before_cap {
            prop_assert!(is_new, "only a new key may trigger a resize");
            prop_assert_eq!(t.capacity(), before_cap * 2);
            let mut after = scan(&t);
            after.remove(&k);
            prop_assert_eq!(before, after);
        }
    }
    prop_assert_eq!(t.len(), model.len());
    for (k, v) in &model {
        prop_assert_eq!(t.lookup(k), Some(v));
    }
    prop_assert!(t.validate().is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn prop_index_in_bounds(key in ".{0,16}", capacity in 1usize..10_000) {
        prop_assert!(CodePointSum.bucket_index(&key, capacity) < capacity);
        let mixing: MixingHash = MixingHash::default();
        prop_assert!(mixing.bucket_index(&key, capacity) < capacity);
    }

    #[test]
    fn prop_distinct_keys_counted(keys in proptest::collection::btree_set("[a-z0-9-]{1,10}", 0..200)) {
        initialize_logger();
        let mut t: HashTable<usize> = HashTable::new();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.insert(k.as_str(), i), None);
        }
        prop_assert_eq!(t.len(), keys.len());
        let scanned: BTreeSet<String> = t.iter().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(&scanned, &keys);
    }

    #[test]
    fn prop_growth_chained(
        entries in proptest::collection::vec(("[a-f]{1,3}", any::<u32>()), 1..150),
        capacity in 1usize..=6,
    ) {
        let config = TableConfig::new().with_initial_capacity(capacity);
        let t: HashTable<u32, ChainStore<u32>> = HashTable::with_config(config).unwrap();
        check_growth(t, entries)?;
    }

    #[test]
    fn prop_growth_flat(
        entries in proptest::collection::vec(("[a-f]{1,3}", any::<u32>()), 1..150),
        capacity in 1usize..=6,
    ) {
        let config = TableConfig::new().with_initial_capacity(capacity);
        let t: HashTable<u32, FlatStore<u32>> = HashTable::with_config(config).unwrap();
        check_growth(t, entries)?;
    }

    #[test]
    fn prop_delete_is_tombstone(
        keys in proptest::collection::btree_set("[a-z]{1,6}", 1..60),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..30),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut t: HashTable<usize> = keys.iter().cloned().zip(0..).collect();
        let capacity = t.capacity();
        let mut gone = BTreeSet::new();
        for p in picks {
            let k = p.get(&keys);
            let len = t.len();
            let deleted = t.delete(k);
            prop_assert_eq!(deleted, gone.insert(k.clone()));
            prop_assert_eq!(t.len(), if deleted { len - 1 } else { len });
            prop_assert_eq!(t.lookup(k), None);
        }
        prop_assert_eq!(t.capacity(), capacity);
        prop_assert!(t.validate().is_empty());
    }
}
