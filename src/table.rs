//! HashTable: public operation surface over a bucket store and a hasher.

use crate::bucket_store::{BucketStore, ChainStore};
use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::hashing::{BucketHasher, CodePointSum};
use core::fmt;
use core::marker::PhantomData;
use log::{debug, trace};

/// String-keyed table resolving collisions per bucket and doubling its
/// capacity when the load factor crosses the configured threshold.
///
/// `B` picks the bucket layout (`ChainStore` or `FlatStore`) and `H` the
/// key-to-bucket mapping.
pub struct HashTable<V, B = ChainStore<V>, H = CodePointSum> {
    pub(crate) buckets: B,
    pub(crate) len: usize,
    pub(crate) config: TableConfig,
    pub(crate) hasher: H,
    _values: PhantomData<V>,
}

impl<V> HashTable<V> {
    /// Empty chained table with the default config and `CodePointSum`.
    pub fn new() -> Self {
        Self::with_hasher(CodePointSum)
    }
}

impl<V, B, H> Default for HashTable<V, B, H>
where
    B: BucketStore<V>,
    H: BucketHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<V, B, H> HashTable<V, B, H>
where
    B: BucketStore<V>,
    H: BucketHasher,
{
    pub fn with_hasher(hasher: H) -> Self {
        Self::from_parts(TableConfig::default(), hasher)
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError>
    where
        H: Default,
    {
        Self::with_config_and_hasher(config, H::default())
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: TableConfig, hasher: H) -> Self {
        Self {
            buckets: B::with_capacity(config.initial_capacity),
            len: 0,
            config,
            hasher,
            _values: PhantomData,
        }
    }

    #[inline]
    fn index_of(&self, key: &str) -> usize {
        self.hasher.bucket_index(key, self.buckets.capacity())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.capacity() as f64
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Insert or overwrite `key`.
    ///
    /// Returns the previous value when the key was already present; its
    /// position in the bucket is kept and no resize happens. A new key may
    /// trigger a full rehash before this returns, after which
    /// `load_factor() <= max_load_factor()` holds.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.index_of(&key);
        match self.buckets.upsert(index, key, value) {
            Some(previous) => {
                trace!("bucket {}: replaced value of existing key", index);
                Some(previous)
            }
            None => {
                self.len += 1;
                trace!("bucket {}: attached new key ({} entries)", index, self.len);
                self.maybe_grow();
                None
            }
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&V> {
        self.buckets.find(self.index_of(key), key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.index_of(key);
        self.buckets.find_mut(index, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Remove `key` and return its value. Capacity never shrinks.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.index_of(key);
        let (_, value) = self.buckets.remove(index, key)?;
        self.len -= 1;
        trace!("bucket {}: removed key ({} entries)", index, self.len);
        Some(value)
    }

    /// Remove `key`; `false` if it was absent.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Drop every entry and go back to the initial capacity.
    pub fn clear(&mut self) {
        debug!(
            "clearing {} entries, capacity {} -> {}",
            self.len,
            self.buckets.capacity(),
            self.config.initial_capacity
        );
        self.buckets = B::with_capacity(self.config.initial_capacity);
        self.len = 0;
    }

    /// Entries of bucket `index` in bucket order, or `None` past the end.
    pub fn bucket(&self, index: usize) -> Option<B::Bucket<'_>> {
        (index < self.buckets.capacity()).then(|| self.buckets.bucket(index))
    }

    /// Every entry, in ascending bucket order and bucket order within.
    pub fn iter(&self) -> Iter<'_, V, B> {
        Iter {
            store: &self.buckets,
            next_bucket: 0,
            current: None,
            remaining: self.len,
        }
    }
}

/// Full-table scan over `(key, value)` pairs.
pub struct Iter<'a, V, B>
where
    B: BucketStore<V> + 'a,
    V: 'a,
{
    store: &'a B,
    next_bucket: usize,
    current: Option<B::Bucket<'a>>,
    remaining: usize,
}

impl<'a, V, B> Iterator for Iter<'a, V, B>
where
    B: BucketStore<V> + 'a,
    V: 'a,
{
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
            if self.next_bucket >= self.store.capacity() {
                return None;
            }
            self.current = Some(self.store.bucket(self.next_bucket));
            self.next_bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V, B, H> IntoIterator for &'a HashTable<V, B, H>
where
    B: BucketStore<V>,
    H: BucketHasher,
{
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, B, H> Extend<(K, V)> for HashTable<V, B, H>
where
    K: Into<String>,
    B: BucketStore<V>,
    H: BucketHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, B, H> FromIterator<(K, V)> for HashTable<V, B, H>
where
    K: Into<String>,
    B: BucketStore<V>,
    H: BucketHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<V, B, H> fmt::Debug for HashTable<V, B, H>
where
    V: fmt::Debug,
    B: BucketStore<V>,
    H: BucketHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
