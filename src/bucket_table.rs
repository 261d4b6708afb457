//! BucketTable: slot array of chains plus the arena that owns their nodes.
//!
//! The slot count is fixed for the life of a `BucketTable`; resizing the
//! hash table builds a new one and discards the old one wholesale.

use crate::chain::{Chain, ChainIter, Nodes};

#[derive(Debug)]
pub(crate) struct BucketTable {
    chains: Box<[Chain]>,
    nodes: Nodes,
}

impl BucketTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            chains: (0..capacity).map(|_| Chain::new()).collect(),
            nodes: Nodes::with_key(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.chains.len()
    }

    /// Total nodes across all chains.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn chain_len(&self, slot: usize) -> usize {
        self.chains[slot].len()
    }

    pub(crate) fn insert(&mut self, slot: usize, key: i32, value: i32) {
        self.chains[slot].insert(&mut self.nodes, key, value);
    }

    pub(crate) fn find(&self, slot: usize, key: i32) -> Option<&i32> {
        self.chains[slot].find(&self.nodes, key)
    }

    pub(crate) fn find_mut(&mut self, slot: usize, key: i32) -> Option<&mut i32> {
        self.chains[slot].find_mut(&mut self.nodes, key)
    }

    pub(crate) fn remove(&mut self, slot: usize, key: i32) -> bool {
        self.chains[slot].remove(&mut self.nodes, key)
    }

    /// Release every chain. The slot count is unchanged.
    pub(crate) fn clear(&mut self) {
        for chain in self.chains.iter_mut() {
            chain.clear(&mut self.nodes);
        }
        debug_assert!(self.nodes.is_empty());
    }

    pub(crate) fn iter(&self) -> Entries<'_> {
        Entries {
            table: self,
            slot: 0,
            chain: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        let mut total = 0;
        for chain in self.chains.iter() {
            chain.assert_links(&self.nodes);
            total += chain.len();
        }
        assert_eq!(total, self.nodes.len(), "arena holds unlinked nodes");
    }
}

/// Entries in slot order, then chain order within each slot.
pub(crate) struct Entries<'a> {
    table: &'a BucketTable,
    slot: usize,
    chain: Option<ChainIter<'a>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (i32, &'a i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(|c| c.next()) {
                return Some(item);
            }
            let table = self.table;
            let chain = table.chains.get(self.slot)?;
            self.slot += 1;
            self.chain = Some(chain.iter(&table.nodes));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn new_table_has_empty_chains() {
        let t = BucketTable::with_capacity(8);
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.node_count(), 0);
        assert!((0..8).all(|s| t.chain_len(s) == 0));
        assert_eq!(t.iter().count(), 0);
    }

    #[test]
    fn iter_walks_slots_then_chains() {
        let mut t = BucketTable::with_capacity(4);
        t.insert(2, 20, 0);
        t.insert(0, 1, 0);
        t.insert(2, 21, 0);
        t.insert(3, 30, 0);
        t.insert(0, 2, 0);
        let order: Vec<i32> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec![1, 2, 20, 21, 30]);
        t.assert_links();
    }

    #[test]
    fn slot_operations_stay_in_their_chain() {
        let mut t = BucketTable::with_capacity(2);
        t.insert(0, 5, 50);
        t.insert(1, 5, 51);
        assert_eq!(t.find(0, 5), Some(&50));
        assert_eq!(t.find(1, 5), Some(&51));

        *t.find_mut(1, 5).unwrap() = 7;
        assert_eq!(t.find(0, 5), Some(&50));
        assert_eq!(t.find(1, 5), Some(&7));

        assert!(t.remove(0, 5));
        assert!(!t.remove(0, 5));
        assert_eq!(t.chain_len(0), 0);
        assert_eq!(t.chain_len(1), 1);
        assert_eq!(t.node_count(), 1);
        t.assert_links();
    }

    #[test]
    fn clear_releases_all_nodes() {
        let mut t = BucketTable::with_capacity(3);
        for k in 0..9 {
            t.insert((k % 3) as usize, k, k);
        }
        assert_eq!(t.node_count(), 9);
        t.clear();
        assert_eq!(t.node_count(), 0);
        assert_eq!(t.capacity(), 3);
        assert_eq!(t.iter().count(), 0);
        t.assert_links();
    }
}
