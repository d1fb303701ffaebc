use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use snafu::ensure;

use super::policy::EvictionPolicy;
use crate::error::{InvalidArgumentSnafu, Result};

/// A key-value map holding at most `maximum_size` entries.
///
/// When a new key is admitted at capacity, the victim chosen by the eviction
/// policy is removed first, so the map never grows past its bound.
pub struct Store<K, V, EP>
where
    K: Hash + Eq,
    EP: Default + EvictionPolicy<K>,
{
    data: HashMap<K, V>,

    eviction_policy: EP,

    maximum_size: usize,
}

impl<K, V, EP> Store<K, V, EP>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    EP: Default + EvictionPolicy<K>,
{
    pub fn new(maximum_size: usize) -> Result<Self> {
        ensure!(
            maximum_size > 0,
            InvalidArgumentSnafu {
                reason: "maxsize must be a positive integer"
            }
        );

        Ok(Self {
            data: HashMap::with_capacity(maximum_size.min(1024)),
            eviction_policy: EP::default(),
            maximum_size,
        })
    }

    /// Inserts or overwrites `key`, returning the entry evicted to make room.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.data.get_mut(&key) {
            // Update.
            *slot = value;
            self.eviction_policy.on_update(&key);
            self.check_invariants();
            return None;
        }

        let evicted = if self.data.len() >= self.maximum_size {
            self.evict()
        } else {
            None
        };

        self.eviction_policy.on_insert(&key);
        self.data.insert(key, value);
        self.check_invariants();

        evicted
    }

    /// Returns the value for `key`, producing it with `retrieve` when absent.
    ///
    /// `retrieve` runs before anything is evicted or admitted, so an error
    /// leaves the store untouched. The second element of the tuple is the
    /// entry evicted to make room, if any.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: &K, retrieve: F) -> std::result::Result<(&V, Option<(K, V)>), E>
    where
        F: FnOnce(&K) -> std::result::Result<V, E>,
    {
        let evicted = if self.data.contains_key(key) {
            self.eviction_policy.on_cache_hit(key);
            None
        } else {
            let value = retrieve(key)?;
            let evicted = if self.data.len() >= self.maximum_size {
                self.evict()
            } else {
                None
            };
            self.eviction_policy.on_insert(key);
            self.data.insert(key.clone(), value);
            evicted
        };
        self.check_invariants();

        Ok((&self.data[key], evicted))
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let victim_key = self.eviction_policy.get_victim()?.clone();
        self.eviction_policy.on_eviction(&victim_key);
        let value = self.data.remove(&victim_key)?;
        tracing::trace!("evicted {:?}", victim_key);
        Some((victim_key, value))
    }

    /// Looks up `key` and marks it as used.
    pub fn get<Q: ?Sized>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        match self.data.get(key) {
            Some(d) => {
                self.eviction_policy.on_cache_hit(key);
                Some(d)
            }
            None => None,
        }
    }

    /// Looks up `key` without touching the eviction order.
    pub fn peek<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.data.get(key)
    }

    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.data.contains_key(key)
    }

    pub fn invalidate<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let removed = self.data.remove(key);
        self.eviction_policy.invalidate(key);
        self.check_invariants();
        removed
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.eviction_policy.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.maximum_size
    }

    /// Resident keys, next victim first.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.eviction_policy.keys()
    }

    fn check_invariants(&self) {
        debug_assert!(self.data.len() <= self.maximum_size);
        debug_assert_eq!(self.data.len(), self.eviction_policy.len());
    }
}
