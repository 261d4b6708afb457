// HashTable property tests through the public API.
//
// Property 1: last write wins.
//  - Model: BTreeMap of the final value per key.
//  - Invariant: get(k) == model[k] for every key; len == model.len().
//
// Property 2: resize churn.
//  - Operations: bulk insert then bulk remove of a random key set, which
//    forces several growths and shrinks.
//  - Invariant: survivors keep their values across every resize; the
//    table returns to the floor capacity once drained.
use chained_table::HashTable;
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    #[test]
    fn prop_last_write_wins(writes in proptest::collection::vec((-50i32..50, any::<i32>()), 0..400)) {
        let mut t = HashTable::new();
        let mut model = BTreeMap::new();
        for (k, v) in writes {
            t.insert(k, v);
            model.insert(k, v);
            prop_assert!(t.len() <= t.capacity());
        }
        prop_assert_eq!(t.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(t.get(*k), Some(v));
        }
        for k in -60..60 {
            prop_assert_eq!(t.get(k).is_some(), model.contains_key(&k));
        }
    }
}

proptest! {
    #[test]
    fn prop_resize_churn(keys in proptest::collection::btree_set(any::<i32>(), 0..300), split in 0usize..300) {
        let keys: Vec<i32> = keys.into_iter().collect();
        let mut t: HashTable = keys.iter().map(|&k| (k, k.wrapping_mul(31))).collect();
        prop_assert_eq!(t.len(), keys.len());

        let split = split.min(keys.len());
        let (gone, kept) = keys.split_at(split);
        for &k in gone {
            prop_assert!(t.remove(k));
            prop_assert!(t.load_factor() > 0.25 || t.capacity() == 8);
            prop_assert!(t.get(k).is_none());
        }
        for &k in kept {
            prop_assert_eq!(t.get(k), Some(&k.wrapping_mul(31)));
        }
        for &k in kept {
            prop_assert!(t.remove(k));
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.capacity(), 8);
    }
}
