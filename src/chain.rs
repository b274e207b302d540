//! Chain: singly-linked sequence of entries for one bucket.
//!
//! Nodes live in a `SlotMap` arena owned by the bucket store and link to
//! each other by arena key, so a chain itself is only a head link plus a
//! length. Every operation takes the arena explicitly. New keys are
//! attached at the head; replacing the value of an existing key keeps its
//! position.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena key of a single chain node.
    pub(crate) struct NodeKey;
}

#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Option<NodeKey>,
}

pub(crate) type NodeArena<V> = SlotMap<NodeKey, Node<V>>;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Chain {
    pub(crate) head: Option<NodeKey>,
    pub(crate) len: usize,
}

impl Chain {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    fn locate<V>(&self, nodes: &NodeArena<V>, key: &str) -> Option<NodeKey> {
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

    /// Replace the value of `key` in place, or attach a new node at the head.
    /// Returns the displaced value when the key was already present.
    pub(crate) fn upsert<V>(&mut self, nodes: &mut NodeArena<V>, key: String, value: V) -> Option<V> {
        if let Some(k) = self.locate(nodes, &key) {
            return Some(core::mem::replace(&mut nodes[k].value, value));
        }
        let k = nodes.insert(Node {
            key,
            value,
            next: self.head,
        });
        self.head = Some(k);
        self.len += 1;
        None
    }

    pub(crate) fn find<'a, V>(&self, nodes: &'a NodeArena<V>, key: &str) -> Option<&'a V> {
        self.locate(nodes, key).map(|k| &nodes[k].value)
    }

    pub(crate) fn find_mut<'a, V>(&self, nodes: &'a mut NodeArena<V>, key: &str) -> Option<&'a mut V> {
        let k = self.locate(nodes, key)?;
        nodes.get_mut(k).map(|n| &mut n.value)
    }

    /// Unlink the node holding `key` and hand back its contents.
    pub(crate) fn remove<V>(&mut self, nodes: &mut NodeArena<V>, key: &str) -> Option<(String, V)> {
        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let (hit, next) = {
                let node = &nodes[k];
                (node.key == key, node.next)
            };
            if hit {
                match prev {
                    None => self.head = next,
                    Some(p) => nodes[p].next = next,
                }
                self.len -= 1;
                let node = nodes.remove(k)?;
                return Some((node.key, node.value));
            }
            prev = Some(k);
            cursor = next;
        }
        None
    }

    pub(crate) fn iter<'a, V>(&self, nodes: &'a NodeArena<V>) -> ChainIter<'a, V> {
        ChainIter {
            nodes,
            cursor: self.head,
        }
    }
}

/// Walks one chain from head to tail.
pub struct ChainIter<'a, V> {
    nodes: &'a NodeArena<V>,
    cursor: Option<NodeKey>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some((node.key.as_str(), &node.value))
    }
}
