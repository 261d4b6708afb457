//! HashTable: chained hash table over `i32` keys and values.
//!
//! Growth is checked before an insert, shrinking after a successful
//! remove. A resize rebuilds the whole bucket table: every entry of the
//! old table is re-inserted, in slot order then chain order, into a fresh
//! table of the new capacity, and the old table is dropped.

use crate::bucket_table::{BucketTable, Entries};
use crate::config::TableConfig;
use crate::hash::{BucketHash, Multiplicative};
use core::fmt;

pub struct HashTable<H = Multiplicative> {
    hasher: H,
    config: TableConfig,
    buckets: BucketTable,
    len: usize,
}

impl HashTable {
    pub fn new() -> Self {
        Self::with_config_and_hasher(TableConfig::DEFAULT, Multiplicative::new())
    }

    /// Panics if `config` fails validation; see `TableConfig`.
    pub fn with_config(config: TableConfig) -> Self {
        Self::with_config_and_hasher(config, Multiplicative::new())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BucketHash> HashTable<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_config_and_hasher(TableConfig::DEFAULT, hasher)
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: H) -> Self {
        config.validate();
        Self {
            hasher,
            config,
            buckets: BucketTable::with_capacity(config.initial_capacity),
            len: 0,
        }
    }

    #[inline]
    fn slot(&self, key: i32) -> usize {
        self.hasher.bucket(key, self.buckets.capacity())
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Length of the longest collision chain.
    pub fn longest_chain(&self) -> usize {
        (0..self.capacity())
            .map(|slot| self.buckets.chain_len(slot))
            .max()
            .unwrap_or(0)
    }

    /// Insert `key -> value`, overwriting the value if `key` is present.
    pub fn insert(&mut self, key: i32, value: i32) {
        if self.load_factor() >= self.config.grow_at {
            self.rebuild(self.capacity() * 2);
        }
        self.place(key, value);
    }

    // Insert without the growth check.
    fn place(&mut self, key: i32, value: i32) {
        let slot = self.slot(key);
        if let Some(v) = self.buckets.find_mut(slot, key) {
            *v = value;
            return;
        }
        self.buckets.insert(slot, key, value);
        self.len += 1;
    }

    /// Remove `key`. Returns whether an entry was removed.
    pub fn remove(&mut self, key: i32) -> bool {
        let slot = self.slot(key);
        if !self.buckets.remove(slot, key) {
            return false;
        }
        self.len -= 1;
        if self.load_factor() <= self.config.shrink_at
            && self.capacity() > self.config.initial_capacity
        {
            self.rebuild(self.capacity() / 2);
        }
        true
    }

    pub fn get(&self, key: i32) -> Option<&i32> {
        self.buckets.find(self.slot(key), key)
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut i32> {
        let slot = self.slot(key);
        self.buckets.find_mut(slot, key)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Drop every entry and return to the initial capacity.
    pub fn clear(&mut self) {
        self.buckets = BucketTable::with_capacity(self.config.initial_capacity);
        self.len = 0;
    }

    /// Entries in bucket order, then insertion order within a bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.buckets.iter(),
            remaining: self.len,
        }
    }

    fn rebuild(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        log::debug!(
            "{} hash table from {old_capacity} to {new_capacity} buckets ({} entries)",
            if new_capacity > old_capacity { "growing" } else { "shrinking" },
            self.len,
        );

        debug_assert!(
            self.len < new_capacity,
            "{} entries do not fit in {new_capacity} buckets",
            self.len
        );
        let mut old = core::mem::replace(
            &mut self.buckets,
            BucketTable::with_capacity(new_capacity),
        );
        self.len = 0;
        // `place` skips the growth check, so rehydration never nests a rebuild
        for (key, &value) in old.iter() {
            self.place(key, value);
        }
        old.clear();
    }

    /// Check size bookkeeping and every chain's links.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len, self.buckets.node_count(), "len out of sync");
        assert!(self.capacity() >= self.config.initial_capacity);
        self.buckets.assert_links();
        for (key, _) in self.iter() {
            assert!(
                self.get(key).is_some(),
                "key {key} stored in the wrong bucket"
            );
        }
    }
}

impl<H> fmt::Debug for HashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().map(|(k, v)| (k, *v)))
            .finish()
    }
}

impl<H: BucketHash> Extend<(i32, i32)> for HashTable<H> {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for HashTable {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<'a, H: BucketHash> IntoIterator for &'a HashTable<H> {
    type Item = (i32, &'a i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &value)` pairs of a `HashTable`.
pub struct Iter<'a> {
    entries: Entries<'a>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, &'a i32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.entries.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[derive(Clone, Copy, Default)]
    struct ConstHash;
    impl BucketHash for ConstHash {
        fn bucket(&self, _key: i32, _capacity: usize) -> usize {
            0
        }
    }

    /// Invariant: a fresh table is empty at the configured floor capacity.
    #[test]
    fn new_table_is_empty() {
        let t = HashTable::new();
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert_eq!(t.capacity(), 8);
        assert!(t.get(0).is_none());
        t.assert_invariants();
    }

    /// Invariant: re-inserting a key overwrites its value and keeps `len`.
    #[test]
    fn insert_existing_key_overwrites() {
        let mut t = HashTable::new();
        t.insert(5, 1);
        t.insert(5, 2);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(5), Some(&2));
        t.assert_invariants();
    }

    /// Invariant: growth is decided on the load before an insert, so the
    /// eighth insert fills the table (`len == capacity`) and only the ninth
    /// grows it. `len <= capacity` holds after every insert.
    #[test]
    fn grows_before_insert_at_full_load() {
        let mut t = HashTable::new();
        for k in 0..8 {
            t.insert(k, k);
        }
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.len(), 8);

        t.insert(8, 8);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 9);
        for k in 0..9 {
            assert_eq!(t.get(k), Some(&k));
        }
        t.assert_invariants();
    }

    /// Overwriting an existing key in a full table still triggers growth,
    /// since the check runs before the lookup.
    #[test]
    fn overwrite_at_full_load_still_grows() {
        let mut t = HashTable::new();
        for k in 0..8 {
            t.insert(k, k);
        }
        t.insert(3, 33);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 8);
        assert_eq!(t.get(3), Some(&33));
    }

    /// Invariant: shrink halves capacity once load drops to the threshold,
    /// never below the floor, and keeps every remaining key retrievable.
    #[test]
    fn shrinks_after_remove_down_to_floor() {
        let mut t = HashTable::new();
        for k in 0..9 {
            t.insert(k, k * 2);
        }
        assert_eq!(t.capacity(), 16);

        // 9/16, ..., 5/16 stay above a quarter
        for k in 0..4 {
            assert!(t.remove(k));
            assert_eq!(t.capacity(), 16);
        }
        // 4/16 hits the threshold
        assert!(t.remove(4));
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.len(), 4);
        for k in 5..9 {
            assert_eq!(t.get(k), Some(&(k * 2)));
        }

        for k in 5..9 {
            assert!(t.remove(k));
            assert_eq!(t.capacity(), 8);
        }
        assert!(t.is_empty());
        t.assert_invariants();
    }

    #[test]
    fn remove_missing_key_changes_nothing() {
        let mut t = HashTable::new();
        t.insert(1, 1);
        assert!(!t.remove(2));
        assert_eq!(t.len(), 1);
        assert_eq!(t.capacity(), 8);
        assert!(!HashTable::new().remove(0));
    }

    #[test]
    fn get_mut_updates_value_in_place() {
        let mut t = HashTable::new();
        t.insert(-4, 10);
        *t.get_mut(-4).unwrap() += 5;
        assert_eq!(t.get(-4), Some(&15));
        assert!(t.get_mut(4).is_none());
    }

    /// Every key sharing one bucket is still resolved by key equality.
    #[test]
    fn all_keys_colliding_still_resolve() {
        let mut t = HashTable::with_hasher(ConstHash);
        for k in 0..40 {
            t.insert(k, -k);
        }
        assert_eq!(t.longest_chain(), 40);
        for k in 0..40 {
            assert_eq!(t.get(k), Some(&-k));
        }
        for k in (0..40).step_by(3) {
            assert!(t.remove(k));
        }
        for k in 0..40 {
            assert_eq!(t.get(k).is_some(), k % 3 != 0);
        }
        t.assert_invariants();
    }

    /// Rehydration preserves chain order: with a constant hash the single
    /// chain keeps insertion order across several growths.
    #[test]
    fn rebuild_preserves_chain_order() {
        let mut t = HashTable::with_hasher(ConstHash);
        let keys = [9, -3, 14, 0, 7, 21, -8, 5, 11, 2, 30, -1];
        for k in keys {
            t.insert(k, k);
        }
        assert_eq!(t.capacity(), 16);
        let order: Vec<i32> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(order, keys);
    }

    #[test]
    fn clear_resets_to_initial_capacity() {
        let mut t: HashTable = (0..100).map(|k| (k, k)).collect();
        assert!(t.capacity() > 8);
        t.clear();
        assert_eq!(t.capacity(), 8);
        assert!(t.is_empty());
        assert!(t.get(50).is_none());
        t.insert(50, 1);
        assert_eq!(t.get(50), Some(&1));
        t.assert_invariants();
    }

    #[test]
    fn iter_reports_exact_len() {
        let t: HashTable = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
        let it = t.iter();
        assert_eq!(it.len(), 3);
        let mut pairs: Vec<(i32, i32)> = it.map(|(k, v)| (k, *v)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn custom_config_floor_and_thresholds() {
        let config = TableConfig {
            initial_capacity: 4,
            grow_at: 0.75,
            shrink_at: 0.125,
        };
        let mut t = HashTable::with_config(config);
        for k in 0..3 {
            t.insert(k, k);
        }
        assert_eq!(t.capacity(), 4);
        // 3/4 reaches grow_at
        t.insert(3, 3);
        assert_eq!(t.capacity(), 8);
        for k in 0..3 {
            t.remove(k);
        }
        // 1/8 reaches shrink_at
        assert_eq!(t.capacity(), 4);
        assert_eq!(t.get(3), Some(&3));
        t.assert_invariants();
    }

    /// A valid config with a low growth threshold may leave the load above
    /// `grow_at` after a rebuild; the next insert grows again instead of
    /// nesting a rebuild.
    #[test]
    fn low_grow_threshold_grows_on_consecutive_inserts() {
        let config = TableConfig {
            initial_capacity: 1,
            grow_at: 0.1,
            shrink_at: 0.04,
        };
        let mut t = HashTable::with_config(config);
        for k in 0..50 {
            t.insert(k, k * 7);
            assert!(t.len() <= t.capacity());
        }
        for k in 0..50 {
            assert_eq!(t.get(k), Some(&(k * 7)));
        }
        for k in 0..50 {
            assert!(t.remove(k));
            t.assert_invariants();
        }
        assert!(t.is_empty());
    }

    #[test]
    fn debug_formats_as_map() {
        let mut t = HashTable::new();
        t.insert(1, 2);
        assert_eq!(format!("{t:?}"), "{1: 2}");
    }
}
