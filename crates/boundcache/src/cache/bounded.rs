use std::borrow::Borrow;
use std::hash::Hash;

use super::store::Store;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::policy::eviction::LruEvictionPolicy;
use crate::retrieve::Retrieve;
use crate::stats::CacheStats;

/// An LRU cache that fills itself from a retriever on misses.
///
/// The retriever is called with the missing key, and its value is stored as
/// the most recently used entry before being handed back. Errors returned by
/// the retriever reach the caller unchanged and leave the cache as it was.
///
/// The retriever must not call back into the cache that owns it. Doing so
/// through a `RefCell` or a lock panics or deadlocks.
///
/// ```
/// use boundcache::BoundedCache;
/// use std::convert::Infallible;
///
/// let mut cache = BoundedCache::new(|k: &u32| Ok::<_, Infallible>(k * 2), 2).unwrap();
/// assert_eq!(cache.get(&1), Ok(&2));
/// assert_eq!(cache.get(&2), Ok(&4));
/// assert_eq!(cache.get(&3), Ok(&6));
/// assert!(!cache.contains(&1));
/// ```
pub struct BoundedCache<K, V, R>
where
    K: Hash + Eq + Clone,
{
    store: Store<K, V, LruEvictionPolicy<K>>,
    retriever: R,
    stats: CacheStats,
}

impl<K, V, R> BoundedCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    R: Retrieve<K, Value = V>,
{
    pub fn new(retriever: R, maxsize: usize) -> Result<Self> {
        let store = Store::new(maxsize)?;
        tracing::debug!(maxsize, "created bounded cache");
        Ok(Self {
            store,
            retriever,
            stats: CacheStats::default(),
        })
    }

    /// Builds a cache pre-populated with `entries`.
    ///
    /// Entries are inserted in iteration order, so the first one is the least
    /// recently used. If there are more than `maxsize` of them, the earliest
    /// ones are evicted as they would be by successive [`set`](Self::set) calls.
    pub fn with_entries<I>(retriever: R, maxsize: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut cache = Self::new(retriever, maxsize)?;
        for (key, value) in entries {
            cache.set(key, value);
        }
        Ok(cache)
    }

    pub fn from_config(retriever: R, config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(retriever, config.max_size)
    }

    /// Returns the value for `key`, retrieving it on a miss.
    pub fn get(&mut self, key: &K) -> std::result::Result<&V, R::Error> {
        if self.store.contains_key(key) {
            self.stats.record_hit();
            tracing::trace!("cache hit: {:?}", key);
        } else {
            self.stats.record_miss();
            tracing::trace!("cache miss: {:?}", key);
        }

        let retriever = &mut self.retriever;
        match self
            .store
            .get_or_try_insert_with(key, |k| retriever.retrieve(k))
        {
            Ok((value, evicted)) => {
                if evicted.is_some() {
                    self.stats.record_eviction();
                }
                Ok(value)
            }
            Err(e) => {
                self.stats.record_retrieval_failure();
                tracing::debug!("retrieval failed for {:?}", key);
                Err(e)
            }
        }
    }

    /// Inserts or overwrites `key`, returning the entry evicted to make room.
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.admit(key, value)
    }

    fn admit(&mut self, key: K, value: V) -> Option<(K, V)> {
        let evicted = self.store.insert(key, value);
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        evicted
    }
}

impl<K, V, R> BoundedCache<K, V, R>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    /// Whether `key` is resident. Does not affect recency.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.store.contains_key(key)
    }

    /// Reads a resident value without affecting recency or retrieving.
    pub fn peek<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.store.peek(key)
    }

    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.store.invalidate(key)
    }

    pub fn clear(&mut self) {
        tracing::debug!(entries = self.store.len(), "clearing bounded cache");
        self.store.clear();
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Resident keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.store.keys()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn into_retriever(self) -> R {
        self.retriever
    }
}
