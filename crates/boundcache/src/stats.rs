/// Counters updated by the cache on every lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from a resident entry.
    pub hits: u64,
    /// Lookups that had to call the retriever.
    pub misses: u64,
    /// Entries dropped to make room for a new key.
    pub evictions: u64,
    /// Misses whose retrieval returned an error.
    pub retrieval_failures: u64,
}

impl CacheStats {
    pub fn request_count(&self) -> u64 {
        self.hits + self.misses
    }

    /// `hits / (hits + misses)`, or `0.0` before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.request_count();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_retrieval_failure(&mut self) {
        self.retrieval_failures += 1;
    }
}
