//! Recency Order Module
//!
//! Doubly-linked ordering of hash identifiers for LRU eviction.
//!
//! Nodes live in a slab (`Vec<Option<Node>>`) and link to each other by index,
//! so every operation is O(1) without unsafe pointer juggling. Freed slots are
//! recycled through a free list.

// == Node Reference ==
/// Handle to a position in a [`RecencyOrder`].
///
/// Only valid for the order that issued it, and only until the node is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

#[derive(Debug)]
struct Node {
    id: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency Order ==
/// Tracks use order of identifiers.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug, Default)]
pub struct RecencyOrder {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl RecencyOrder {
    // == Constructor ==
    /// Creates a new empty order.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Inserts an identifier at the most recently used end.
    pub fn push_front(&mut self, id: u64) -> NodeRef {
        let node = Node {
            id,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        NodeRef(idx)
    }

    // == Move To Front ==
    /// Relocates an existing node to the most recently used end.
    ///
    /// The node keeps its identity; the handle stays valid.
    pub fn move_to_front(&mut self, node: NodeRef) {
        let idx = node.0;
        if self.head == Some(idx) || !self.is_live(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove Back ==
    /// Removes and returns the least recently used identifier.
    ///
    /// Returns None if the order is empty.
    pub fn remove_back(&mut self) -> Option<u64> {
        let tail = self.tail?;
        self.remove(NodeRef(tail))
    }

    // == Remove ==
    /// Deletes a specific node regardless of position, returning its
    /// identifier. Stale handles return None.
    pub fn remove(&mut self, node: NodeRef) -> Option<u64> {
        let idx = node.0;
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        let removed = self.nodes[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(removed.id)
    }

    /// Identifier at the most recently used end.
    #[cfg(test)]
    fn front(&self) -> Option<u64> {
        self.head.and_then(|idx| self.id_at(idx))
    }

    /// Identifier at the least recently used end.
    #[cfg(test)]
    fn back(&self) -> Option<u64> {
        self.tail.and_then(|idx| self.id_at(idx))
    }

    /// Identifier held by a node.
    pub fn get(&self, node: NodeRef) -> Option<u64> {
        self.id_at(node.0)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iterate ==
    /// Walks identifiers from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.nodes.get(cursor?)?.as_ref()?;
            cursor = node.next;
            Some(node.id)
        })
    }

    fn id_at(&self, idx: usize) -> Option<u64> {
        self.nodes.get(idx)?.as_ref().map(|node| node.id)
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.nodes.get(idx), Some(Some(_)))
    }

    /// Attaches a detached node at the head.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head_idx) => {
                if let Some(head) = self.nodes[head_idx].as_mut() {
                    head.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Detaches a node from its neighbours, fixing head and tail.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.nodes[idx].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = self.nodes[prev_idx].as_mut() {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = self.nodes[next_idx].as_mut() {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = None;
        }
    }
}
