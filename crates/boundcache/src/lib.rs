//! Bounded least-recently-used caches that fill themselves on misses.
//!
//! [`BoundedCache`] is the single-threaded building block. [`SharedCache`]
//! (and `ConcurrentCache` with the `async` feature) put it behind a lock.

mod cache;
mod config;
mod error;
mod policy;
mod retrieve;
mod stats;

#[cfg(feature = "async")]
pub use cache::ConcurrentCache;

pub use cache::{BoundedCache, EvictionPolicy, SharedCache, Store};
pub use config::CacheConfig;
pub use error::CacheError;
pub use retrieve::Retrieve;
pub use stats::CacheStats;

pub mod preconfig {
    pub use super::policy::eviction::LruEvictionPolicy;

    pub type LruStore<K, V> = super::Store<K, V, LruEvictionPolicy<K>>;
}
