use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::Mutex;

use super::BoundedCache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::retrieve::Retrieve;
use crate::stats::CacheStats;

/// A [`BoundedCache`] that can be shared between threads.
///
/// The map and the recency order sit behind a single lock. The retriever runs
/// while the lock is held, so concurrent misses on one key retrieve it once.
pub struct SharedCache<K, V, R>
where
    K: Hash + Eq + Clone,
{
    cache: Mutex<BoundedCache<K, V, R>>,
}

impl<K, V, R> SharedCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    V: Clone,
    R: Retrieve<K, Value = V>,
{
    pub fn new(retriever: R, maxsize: usize) -> Result<Self> {
        Ok(Self::from(BoundedCache::new(retriever, maxsize)?))
    }

    pub fn from_config(retriever: R, config: &CacheConfig) -> Result<Self> {
        Ok(Self::from(BoundedCache::from_config(retriever, config)?))
    }

    pub fn get(&self, key: &K) -> std::result::Result<V, R::Error> {
        let mut guard = self.cache.lock();
        guard.get(key).cloned()
    }

    pub fn set(&self, key: K, value: V) -> Option<(K, V)> {
        let mut guard = self.cache.lock();
        guard.set(key, value)
    }

    pub fn batch_set<I: IntoIterator<Item = (K, V)>>(&self, it: I) {
        let mut guard = self.cache.lock();
        for (k, v) in it {
            guard.set(k, v);
        }
    }
}

impl<K, V, R> SharedCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let guard = self.cache.lock();
        guard.contains(key)
    }

    pub fn remove<Q: ?Sized>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let mut guard = self.cache.lock();
        guard.remove(key)
    }

    pub fn clear(&self) {
        let mut guard = self.cache.lock();
        guard.clear()
    }

    pub fn size(&self) -> usize {
        let guard = self.cache.lock();
        guard.size()
    }

    pub fn is_empty(&self) -> bool {
        let guard = self.cache.lock();
        guard.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let guard = self.cache.lock();
        guard.capacity()
    }

    /// Resident keys from least to most recently used.
    pub fn keys(&self) -> Vec<K> {
        let guard = self.cache.lock();
        guard.keys().cloned().collect()
    }

    pub fn stats(&self) -> CacheStats {
        let guard = self.cache.lock();
        guard.stats()
    }

    pub fn into_inner(self) -> BoundedCache<K, V, R> {
        self.cache.into_inner()
    }
}

impl<K, V, R> From<BoundedCache<K, V, R>> for SharedCache<K, V, R>
where
    K: Hash + Eq + Clone,
{
    fn from(cache: BoundedCache<K, V, R>) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }
}
