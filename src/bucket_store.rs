//! Bucket stores: fixed-capacity arrays of buckets.
//!
//! A store never changes capacity. Growth builds a fresh store and moves
//! every entry across with `into_entries`, so the old store is consumed
//! whole. `HashTable` is generic over the store so the chained and the
//! flat layouts are interchangeable.

use crate::chain::{Chain, ChainIter, NodeArena, NodeKey};

/// Capability set shared by every bucket layout.
///
/// `index` arguments must be `< capacity()`; out-of-range indices panic.
pub trait BucketStore<V> {
    /// Entries of one bucket, in bucket order.
    type Bucket<'a>: Iterator<Item = (&'a str, &'a V)>
    where
        Self: 'a,
        V: 'a;

    /// Owned entries of the whole store, bucket by bucket.
    type IntoEntries: Iterator<Item = (String, V)>;

    /// A store of `capacity` empty buckets.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    fn capacity(&self) -> usize;

    /// Replace the value of `key` in bucket `index`, or add the entry.
    /// Returns the displaced value if `key` was present.
    fn upsert(&mut self, index: usize, key: String, value: V) -> Option<V>;

    fn find(&self, index: usize, key: &str) -> Option<&V>;

    fn find_mut(&mut self, index: usize, key: &str) -> Option<&mut V>;

    fn remove(&mut self, index: usize, key: &str) -> Option<(String, V)>;

    /// Length bookkeeping for bucket `index`.
    fn chain_len(&self, index: usize) -> usize;

    fn bucket(&self, index: usize) -> Self::Bucket<'_>;

    fn into_entries(self) -> Self::IntoEntries;
}

/// Separate chaining over linked nodes held in one arena.
#[derive(Debug)]
pub struct ChainStore<V> {
    nodes: NodeArena<V>,
    pub(crate) chains: Box<[Chain]>,
}

impl<V> BucketStore<V> for ChainStore<V> {
    type Bucket<'a> = ChainIter<'a, V> where V: 'a;
    type IntoEntries = ChainDrain<V>;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_key(),
            chains: vec![Chain::default(); capacity].into_boxed_slice(),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.chains.len()
    }

    fn upsert(&mut self, index: usize, key: String, value: V) -> Option<V> {
        self.chains[index].upsert(&mut self.nodes, key, value)
    }

    fn find(&self, index: usize, key: &str) -> Option<&V> {
        self.chains[index].find(&self.nodes, key)
    }

    fn find_mut(&mut self, index: usize, key: &str) -> Option<&mut V> {
        self.chains[index].find_mut(&mut self.nodes, key)
    }

    fn remove(&mut self, index: usize, key: &str) -> Option<(String, V)> {
        self.chains[index].remove(&mut self.nodes, key)
    }

    fn chain_len(&self, index: usize) -> usize {
        self.chains[index].len()
    }

    fn bucket(&self, index: usize) -> ChainIter<'_, V> {
        self.chains[index].iter(&self.nodes)
    }

    fn into_entries(self) -> ChainDrain<V> {
        ChainDrain {
            nodes: self.nodes,
            chains: self.chains.into_vec().into_iter(),
            cursor: None,
        }
    }
}

/// Moves entries out of a `ChainStore` in ascending bucket order, each
/// chain from head to tail.
pub struct ChainDrain<V> {
    nodes: NodeArena<V>,
    chains: std::vec::IntoIter<Chain>,
    cursor: Option<NodeKey>,
}

impl<V> Iterator for ChainDrain<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let node = self.nodes.remove(k)?;
                self.cursor = node.next;
                return Some((node.key, node.value));
            }
            self.cursor = self.chains.next()?.head;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}
