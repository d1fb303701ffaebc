use std::borrow::Borrow;
use std::hash::Hash;

use linked_hash_map::LinkedHashMap;

use crate::cache::EvictionPolicy;

/// Least-recently-used ordering.
///
/// The front of the map is the least recently used key, the back the most
/// recently used one. Every operation is O(1).
pub struct LruEvictionPolicy<K>
where
    K: Eq + Hash + Clone,
{
    data: LinkedHashMap<K, ()>,
}

impl<K> Default for LruEvictionPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        LruEvictionPolicy {
            data: LinkedHashMap::new(),
        }
    }
}

impl<K> EvictionPolicy<K> for LruEvictionPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn get_victim(&self) -> Option<&K> {
        self.data.front().map(|(k, _)| k)
    }

    fn on_eviction(&mut self, key: &K) {
        debug_assert!(self.data.front().map(|(k, _)| k == key).unwrap_or(false));
        self.data.pop_front();
    }

    fn on_insert(&mut self, key: &K) {
        debug_assert!(!self.data.contains_key(key));
        self.data.insert(key.clone(), ());
    }

    fn on_update(&mut self, key: &K) {
        // Re-inserting an existing key moves it to the back.
        self.data.insert(key.clone(), ());
    }

    fn on_cache_hit<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.data.get_refresh(key);
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn invalidate<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.data.remove(key);
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.data.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_victims<T: Copy + std::fmt::Debug + Eq + Hash>(
        policy: &mut LruEvictionPolicy<T>,
        expected_victims: Vec<T>,
    ) {
        let mut victims = Vec::with_capacity(expected_victims.len());
        while let Some(candidate) = policy.get_victim().copied() {
            victims.push(candidate);
            policy.on_eviction(&candidate);
        }

        assert_eq!(victims, expected_victims);
        assert!(policy.is_empty());
    }

    #[test]
    fn insert_evict_doesnt_reorder_items() {
        let mut policy = LruEvictionPolicy::default();

        policy.on_insert(&"a");
        policy.on_insert(&"b");
        policy.on_insert(&"c");

        expect_victims(&mut policy, vec!["a", "b", "c"]);
    }

    #[test]
    fn hit_on_most_recent_is_a_no_op() {
        let mut policy = LruEvictionPolicy::default();

        policy.on_insert(&"a");
        policy.on_insert(&"b");
        policy.on_insert(&"c");

        policy.on_cache_hit(&"c");

        expect_victims(&mut policy, vec!["a", "b", "c"]);
    }

    #[test]
    fn hit_moves_key_to_back() {
        let mut policy = LruEvictionPolicy::default();

        policy.on_insert(&"a");
        policy.on_insert(&"b");
        policy.on_insert(&"c");

        policy.on_cache_hit(&"b");

        expect_victims(&mut policy, vec!["a", "c", "b"]);
    }

    #[test]
    fn update_moves_key_to_back() {
        let mut policy = LruEvictionPolicy::default();

        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_insert(&3);

        policy.on_update(&1);

        assert_eq!(policy.len(), 3);
        expect_victims(&mut policy, vec![2, 3, 1]);
    }

    #[test]
    fn invalidate_forgets_key() {
        let mut policy = LruEvictionPolicy::default();

        policy.on_insert(&"a");
        policy.on_insert(&"b");
        policy.invalidate(&"a");

        assert_eq!(policy.keys().copied().collect::<Vec<_>>(), vec!["b"]);
        expect_victims(&mut policy, vec!["b"]);
    }
}
