#![cfg(feature = "async")]

use std::convert::Infallible;
use std::sync::Arc;

use anyhow::Result;

use boundcache::ConcurrentCache;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_cache_lifecycle() -> Result<()> {
    let cache = Arc::new(ConcurrentCache::new(
        |k: &u32| Ok::<_, Infallible>(k * 2),
        2,
    )?);

    let mut handles = Vec::new();
    for k in 1..=2u32 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move { cache.get(&k).await }));
    }
    for h in handles {
        h.await??;
    }
    assert_eq!(cache.size().await, 2);

    assert_eq!(cache.get(&3).await?, 6);
    assert_eq!(cache.size().await, 2);
    assert!(cache.contains(&3).await);

    cache.batch_set(vec![(10, 0), (11, 1)].into_iter()).await;
    assert!(!cache.contains(&3).await);
    assert_eq!(cache.remove(&10).await, Some(0));

    cache.clear().await;
    assert_eq!(cache.size().await, 0);
    assert_eq!(cache.stats().await.misses, 3);
    Ok(())
}
