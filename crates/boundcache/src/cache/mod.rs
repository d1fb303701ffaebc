#[cfg(feature = "async")]
mod concurrent_cache;

mod bounded;
mod policy;
mod shared_cache;
mod store;

#[cfg(feature = "async")]
pub use concurrent_cache::ConcurrentCache;

pub use bounded::BoundedCache;
pub use policy::EvictionPolicy;
pub use shared_cache::SharedCache;
pub use store::Store;
