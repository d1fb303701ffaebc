mod evict_lru;

pub mod eviction {
    pub use super::evict_lru::LruEvictionPolicy;
}
