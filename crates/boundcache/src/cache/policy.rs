use std::borrow::Borrow;
use std::hash::Hash;

/// Tracks the order in which resident keys should leave a [`Store`](super::Store).
///
/// The store calls these hooks in lockstep with its own map, so an
/// implementation always sees exactly the resident key set.
pub trait EvictionPolicy<K> {
    fn get_victim(&self) -> Option<&K>;

    fn on_eviction(&mut self, key: &K);
    fn on_insert(&mut self, key: &K);
    fn on_update(&mut self, key: &K);
    fn on_cache_hit<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq;

    fn clear(&mut self);

    fn invalidate<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked keys, next victim first.
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;
}
