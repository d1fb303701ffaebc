use std::borrow::Borrow;
use std::hash::Hash;

use tokio::sync::Mutex;

use super::BoundedCache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::retrieve::Retrieve;
use crate::stats::CacheStats;

/// A [`BoundedCache`] behind an async mutex.
pub struct ConcurrentCache<K, V, R>
where
    K: Hash + Eq + Clone,
{
    cache: Mutex<BoundedCache<K, V, R>>,
}

impl<K, V, R> ConcurrentCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    V: Clone,
    R: Retrieve<K, Value = V>,
{
    pub fn new(retriever: R, maxsize: usize) -> Result<Self> {
        Ok(Self {
            cache: Mutex::new(BoundedCache::new(retriever, maxsize)?),
        })
    }

    pub fn from_config(retriever: R, config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            cache: Mutex::new(BoundedCache::from_config(retriever, config)?),
        })
    }

    pub async fn get(&self, key: &K) -> std::result::Result<V, R::Error> {
        let mut guard = self.cache.lock().await;
        guard.get(key).cloned()
    }

    pub async fn set(&self, key: K, value: V) -> Option<(K, V)> {
        let mut guard = self.cache.lock().await;
        guard.set(key, value)
    }

    pub async fn batch_set<I: Iterator<Item = (K, V)>>(&self, it: I) {
        let mut guard = self.cache.lock().await;
        for (k, v) in it {
            guard.set(k, v);
        }
    }
}

impl<K, V, R> ConcurrentCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    pub async fn contains<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let guard = self.cache.lock().await;
        guard.contains(key)
    }

    pub async fn remove<Q: ?Sized>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let mut guard = self.cache.lock().await;
        guard.remove(key)
    }

    pub async fn clear(&self) {
        let mut guard = self.cache.lock().await;
        guard.clear()
    }

    pub async fn size(&self) -> usize {
        let guard = self.cache.lock().await;
        guard.size()
    }

    pub async fn stats(&self) -> CacheStats {
        let guard = self.cache.lock().await;
        guard.stats()
    }
}
