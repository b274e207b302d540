//! Flat layout: each bucket is a plain `Vec` of entries.
//!
//! New keys are appended, so a bucket lists its entries oldest first.
//! Removal shifts the tail down to keep that order.

use crate::bucket_store::BucketStore;

type Entry<V> = (String, V);

#[derive(Debug)]
pub struct FlatStore<V> {
    buckets: Box<[Vec<Entry<V>>]>,
}

impl<V> FlatStore<V> {
    fn position(&self, index: usize, key: &str) -> Option<usize> {
        self.buckets[index].iter().position(|(k, _)| k == key)
    }
}

impl<V> BucketStore<V> for FlatStore<V> {
    type Bucket<'a> = FlatBucket<'a, V> where V: 'a;
    type IntoEntries = core::iter::Flatten<std::vec::IntoIter<Vec<Entry<V>>>>;

    fn with_capacity(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Self {
            buckets: buckets.into_boxed_slice(),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn upsert(&mut self, index: usize, key: String, value: V) -> Option<V> {
        match self.position(index, &key) {
            Some(pos) => Some(core::mem::replace(&mut self.buckets[index][pos].1, value)),
            None => {
                self.buckets[index].push((key, value));
                None
            }
        }
    }

    fn find(&self, index: usize, key: &str) -> Option<&V> {
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn find_mut(&mut self, index: usize, key: &str) -> Option<&mut V> {
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn remove(&mut self, index: usize, key: &str) -> Option<(String, V)> {
        let pos = self.position(index, key)?;
        Some(self.buckets[index].remove(pos))
    }

    fn chain_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    fn bucket(&self, index: usize) -> FlatBucket<'_, V> {
        FlatBucket {
            it: self.buckets[index].iter(),
        }
    }

    fn into_entries(self) -> Self::IntoEntries {
        self.buckets.into_vec().into_iter().flatten()
    }
}

/// Entries of one flat bucket, oldest first.
pub struct FlatBucket<'a, V> {
    it: core::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for FlatBucket<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}
