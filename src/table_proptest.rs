#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can run the
// same state machine over every bucket layout and reach internal fields.

use crate::bucket_store::{BucketStore, ChainStore};
use crate::config::TableConfig;
use crate::flat_store::FlatStore;
use crate::hashing::{BucketHasher, CodePointSum, MixingHash};
use crate::table::HashTable;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Lookup(usize),
    Mutate(usize, i32),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Lookup),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (1usize..=8, prop_oneof![Just(0.5), Just(0.8), Just(1.0), Just(1.2), Just(3.0)])
        .prop_map(|(cap, lf)| TableConfig::new().with_initial_capacity(cap).with_max_load_factor(lf))
}

// Forces every key into bucket 0 to stress chain walking.
#[derive(Clone, Default)]
struct ConstHasher;
impl BucketHasher for ConstHasher {
    fn hash_key(&self, _key: &str) -> u64 {
        0
    }
    fn describe(&self) -> &str {
        "hash(key) = 0"
    }
}

// State-machine equivalence against std::collections::HashMap.
// After each op:
// - `insert` returns exactly what the model's insert returns.
// - `len`, `is_empty`, lookups and full scans match the model.
// - `validate()` reports nothing.
// - `load_factor() <= max_load_factor()` and capacity never drops below
//   the initial capacity; it only grows except on `clear`.
fn run_state_machine<B, H>(
    mut sut: HashTable<i32, B, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    B: BucketStore<i32>,
    H: BucketHasher,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    let initial = sut.config().initial_capacity;

    for op in ops {
        let capacity_before = sut.capacity();
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let existed = model.contains_key(k);
                prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k.clone(), v));
                if existed {
                    prop_assert_eq!(sut.capacity(), capacity_before, "overwrite must not resize");
                } else if sut.capacity() != capacity_before {
                    prop_assert!(sut.capacity() > capacity_before);
                    prop_assert_eq!(sut.capacity() % capacity_before, 0);
                }
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let removed = model.remove(k);
                prop_assert_eq!(sut.delete(k), removed.is_some());
                prop_assert_eq!(sut.lookup(k), None);
                prop_assert_eq!(sut.capacity(), capacity_before, "delete must not shrink");
            }
            OpI::Lookup(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.lookup(k), model.get(k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(s), Some(m)) => {
                        *s = s.wrapping_add(d);
                        *m = m.wrapping_add(d);
                    }
                    (None, None) => {}
                    (s, m) => prop_assert!(false, "get_mut parity broken: {:?} vs {:?}", s, m),
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), initial);
            }
            OpI::Iterate => {
                let scanned: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let expected: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(scanned, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.capacity() >= initial);
        prop_assert!(sut.load_factor() <= sut.max_load_factor());
        let violations = sut.validate();
        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_chained((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut: HashTable<i32, ChainStore<i32>, CodePointSum> =
            HashTable::with_config(config).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_flat((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut: HashTable<i32, FlatStore<i32>, CodePointSum> =
            HashTable::with_config(config).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_mixing_hash((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut: HashTable<i32, ChainStore<i32>, MixingHash> =
            HashTable::with_config(config).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    // Worst-case collisions: one chain holds everything.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut: HashTable<i32, ChainStore<i32>, ConstHasher> =
            HashTable::with_config_and_hasher(config, ConstHasher).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    // Without a resize, chains list novel keys newest first and an
    // overwrite never moves its entry.
    #[test]
    fn prop_chain_order_is_newest_first(
        keys in proptest::collection::btree_set("[a-z]{1,4}", 1..20),
        overwrite in any::<prop::sample::Index>(),
    ) {
        let config = TableConfig::new().with_max_load_factor(100.0);
        let mut sut: HashTable<usize, ChainStore<usize>, ConstHasher> =
            HashTable::with_config_and_hasher(config, ConstHasher).unwrap();
        let keys: Vec<String> = keys.into_iter().collect();
        for (i, k) in keys.iter().enumerate() {
            sut.insert(k.clone(), i);
        }
        let target = overwrite.get(&keys).clone();
        prop_assert!(sut.insert(target, usize::MAX).is_some());

        prop_assert_eq!(sut.capacity(), 5);
        let order: Vec<&str> = sut.bucket(0).unwrap().map(|(k, _)| k).collect();
        let expected: Vec<&str> = keys.iter().rev().map(String::as_str).collect();
        prop_assert_eq!(order, expected);
    }
}
