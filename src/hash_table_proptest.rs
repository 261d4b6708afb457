#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check
// chain links and bucket placement through crate-private helpers.

use crate::config::TableConfig;
use crate::hash::BucketHash;
use crate::hash_table::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations improve shrinking: indices shrink to earlier
// keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i32>, Vec<Op>)> {
    proptest::collection::vec(any::<i32>(), 1..=48).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        // Inserts are weighted up so tables get large enough to grow and
        // then shrink again.
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            3 => idx.clone().prop_map(Op::Remove),
            2 => idx.clone().prop_map(Op::Get),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives `sut` through `ops` against a std HashMap model. After every
// operation:
// - len parity with the model, and chain links consistent with len;
// - after an insert, len <= capacity (the load before it was checked);
// - after a remove, len / capacity > shrink_at or capacity is the floor;
// - a failed remove leaves len and capacity unchanged;
// - every model key is retrievable with its model value (rehash
//   correctness across any resize).
fn run_model<H: BucketHash>(
    mut sut: HashTable<H>,
    pool: &[i32],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<i32, i32> = HashMap::new();
    let config = *sut.config();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = pool[i];
                sut.insert(k, v);
                model.insert(k, v);
                prop_assert!(sut.len() <= sut.capacity());
                prop_assert_eq!(sut.get(k), Some(&v));
            }
            Op::Remove(i) => {
                let k = pool[i];
                let (len, cap) = (sut.len(), sut.capacity());
                let removed = sut.remove(k);
                prop_assert_eq!(removed, model.remove(&k).is_some());
                if removed {
                    prop_assert_eq!(sut.len(), len - 1);
                    prop_assert!(
                        sut.load_factor() > config.shrink_at
                            || sut.capacity() == config.initial_capacity
                    );
                } else {
                    prop_assert_eq!((sut.len(), sut.capacity()), (len, cap));
                }
                prop_assert!(sut.get(k).is_none());
            }
            Op::Get(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.get(k), model.get(&k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            Op::Mutate(i, d) => {
                let k = pool[i];
                match (sut.get_mut(k), model.get_mut(&k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.wrapping_add(d);
                        *mv = mv.wrapping_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence differs from model"),
                }
            }
            Op::Iterate => {
                let seen: BTreeMap<i32, i32> = sut.iter().map(|(k, v)| (k, *v)).collect();
                let expected: BTreeMap<i32, i32> = model.iter().map(|(&k, &v)| (k, v)).collect();
                prop_assert_eq!(seen.len(), sut.len(), "iter yielded a duplicate");
                prop_assert_eq!(seen, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        for (k, v) in &model {
            prop_assert_eq!(sut.get(*k), Some(v));
        }
        sut.assert_invariants();
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_model(HashTable::new(), &pool, ops)?;
    }
}

// Collision variant: every key shares one bucket, so all lookups go
// through chain scans and every resize rehydrates a single long chain.
#[derive(Clone, Copy, Default)]
struct ConstHash;
impl BucketHash for ConstHash {
    fn bucket(&self, _key: i32, _capacity: usize) -> usize {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_model(HashTable::with_hasher(ConstHash), &pool, ops)?;
    }
}

// Same invariants under a non-default resize policy.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_custom_config((pool, ops) in arb_scenario()) {
        let config = TableConfig { initial_capacity: 2, grow_at: 0.75, shrink_at: 0.3 };
        run_model(HashTable::with_config(config), &pool, ops)?;
    }
}

// Keys clustered on small consecutive integers, where multiplicative
// hashing is meant to spread well.
proptest! {
    #[test]
    fn prop_consecutive_keys_roundtrip(n in 0usize..600) {
        let mut t = HashTable::new();
        for k in 0..n as i32 {
            t.insert(k, k ^ 0x55);
            prop_assert!(t.len() <= t.capacity());
        }
        for k in 0..n as i32 {
            prop_assert_eq!(t.get(k), Some(&(k ^ 0x55)));
        }
        for k in 0..n as i32 {
            prop_assert!(t.remove(k));
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.capacity(), 8);
        t.assert_invariants();
    }
}
