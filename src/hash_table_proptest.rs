#![cfg(test)]

// Property tests for HashTable kept inside the crate alongside the unit
// suites, so they run against internal modules without feature gates.

use crate::error::{Error, ErrorKind};
use crate::hash_table::HashTable;
use crate::last_error::last_error;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (u64, u32, Vec<Vec<u8>>, Vec<Op>)> {
    (
        1u64..=16,
        any::<u32>(),
        proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..6), 1..=10),
    )
        .prop_flat_map(|(capacity, seed, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                idx.clone().prop_map(Op::Remove),
                idx.clone().prop_map(Op::Get),
                (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
                Just(Op::Iterate),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, seed, pool.clone(), ops))
        })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected and the first value is kept.
// - `get` and `remove` agree with the model; misses report NotFound.
// - `last_error()` mirrors the result of the latest operation.
// - Chain lengths sum to `len` and every model key stays reachable.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, seed, pool, ops) in arb_scenario()) {
        let mut sut: HashTable<i32> = HashTable::with_seed(capacity, seed).unwrap();
        let mut model: HashMap<Vec<u8>, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = &pool[i];
                    let already = model.contains_key(k);
                    match sut.insert(k, v) {
                        Ok(()) => {
                            prop_assert!(!already, "insert must fail on duplicate");
                            prop_assert_eq!(last_error(), ErrorKind::NoError);
                            model.insert(k.clone(), v);
                        }
                        Err(e) => {
                            prop_assert!(already, "duplicate error only when key exists");
                            prop_assert_eq!(e.error(), Error::DuplicateKey);
                            prop_assert_eq!(last_error(), ErrorKind::DuplicateKey);
                            prop_assert_eq!(e.into_value(), v);
                        }
                    }
                }
                Op::Remove(i) => {
                    let k = &pool[i];
                    match (sut.remove(k), model.remove(k)) {
                        (Ok(got), Some(want)) => prop_assert_eq!(got, want),
                        (Err(Error::NotFound), None) => {
                            prop_assert_eq!(last_error(), ErrorKind::NotFound);
                        }
                        (got, want) => prop_assert!(false, "remove diverged: {:?} vs {:?}", got, want),
                    }
                }
                Op::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k).ok(), model.get(k));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
                }
                Op::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Ok(v) = sut.get_mut(k) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(v) = model.get_mut(k) {
                        *v = v.wrapping_add(d);
                    }
                }
                Op::Iterate => {
                    let seen: BTreeSet<(Vec<u8>, i32)> =
                        sut.iter().map(|(k, v)| (k.to_vec(), *v)).collect();
                    let expected: BTreeSet<(Vec<u8>, i32)> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(seen, expected);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        let total: usize = (0..sut.capacity()).map(|b| sut.chain_len(b)).sum();
        prop_assert_eq!(total, sut.len());
        for k in model.keys() {
            prop_assert!(sut.contains_key(k));
        }
    }
}

// Property: inserting N distinct keys then deleting them all leaves an empty
// table in which every key is absent.
proptest! {
    #[test]
    fn prop_round_trip_empties_table(
        capacity in 1u64..=64,
        keys in proptest::collection::btree_set("[a-z0-9]{1,8}", 0..64),
    ) {
        let mut t: HashTable<usize> = HashTable::new(capacity).unwrap();
        for (i, k) in keys.iter().enumerate() {
            prop_assert!(t.insert(k.as_bytes(), i).is_ok());
        }
        prop_assert_eq!(t.len(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.remove(k.as_bytes()), Ok(i));
        }
        prop_assert_eq!(t.len(), 0);
        for k in &keys {
            prop_assert_eq!(t.get(k.as_bytes()), Err(Error::NotFound));
        }
    }
}
