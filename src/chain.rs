//! Chain: the per-bucket collision list.
//!
//! Nodes never point at each other directly. Every node of a table lives
//! in one generational arena and a chain links its nodes through
//! `NodeKey`s, so unlinking only rewrites keys and the arena remains the
//! single owner of node memory. All chain operations take that arena as
//! an explicit argument.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena key of a chain node.
    pub struct NodeKey;
}

pub(crate) type Nodes = SlotMap<NodeKey, Node>;

#[derive(Debug)]
pub(crate) struct Node {
    key: i32,
    value: i32,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// Doubly-linked list of entries threaded through a node arena.
#[derive(Debug, Default)]
pub(crate) struct Chain {
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    len: usize,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Append a fresh node at the tail. The caller guarantees `key` is not
    /// already linked into this chain.
    pub(crate) fn insert(&mut self, nodes: &mut Nodes, key: i32, value: i32) {
        let k = nodes.insert(Node {
            key,
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
        self.len += 1;
    }

    fn position(&self, nodes: &Nodes, key: i32) -> Option<NodeKey> {
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = &nodes[k];
            if node.key == key {
                return Some(k);
            }
            cursor = node.next;
        }
        None
    }

    pub(crate) fn find<'a>(&self, nodes: &'a Nodes, key: i32) -> Option<&'a i32> {
        self.position(nodes, key).map(|k| &nodes[k].value)
    }

    pub(crate) fn find_mut<'a>(&self, nodes: &'a mut Nodes, key: i32) -> Option<&'a mut i32> {
        let k = self.position(nodes, key)?;
        nodes.get_mut(k).map(|n| &mut n.value)
    }

    /// Unlink and free the node holding `key`. Returns false when absent.
    pub(crate) fn remove(&mut self, nodes: &mut Nodes, key: i32) -> bool {
        let Some(k) = self.position(nodes, key) else {
            return false;
        };
        let (prev, next) = (nodes[k].prev, nodes[k].next);

        match prev {
            Some(p) => nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => nodes[n].prev = prev,
            None => self.tail = prev,
        }
        nodes.remove(k);
        self.len -= 1;
        true
    }

    /// Free every node of this chain and reset it to empty.
    pub(crate) fn clear(&mut self, nodes: &mut Nodes) {
        let mut cursor = self.head.take();
        while let Some(k) = cursor {
            cursor = nodes.remove(k).and_then(|n| n.next);
        }
        self.tail = None;
        self.len = 0;
    }

    pub(crate) fn iter<'a>(&self, nodes: &'a Nodes) -> ChainIter<'a> {
        ChainIter {
            nodes,
            cursor: self.head,
        }
    }

    /// Walk the links in both directions and check them against `len`.
    #[cfg(test)]
    pub(crate) fn assert_links(&self, nodes: &Nodes) {
        let mut forward = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = nodes.get(k).expect("linked node missing from arena");
            assert_eq!(node.prev, prev, "prev link out of sync");
            prev = Some(k);
            cursor = node.next;
            forward += 1;
        }
        assert_eq!(prev, self.tail, "tail does not end the forward walk");
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut cursor = self.tail;
        while let Some(k) = cursor {
            cursor = nodes[k].prev;
            backward += 1;
        }
        assert_eq!(backward, self.len);
    }
}

/// Iterator over one chain, head to tail.
pub(crate) struct ChainIter<'a> {
    nodes: &'a Nodes,
    cursor: Option<NodeKey>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (i32, &'a i32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some((node.key, &node.value))
    }
}
