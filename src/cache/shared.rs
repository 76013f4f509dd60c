//! Shared Cache Module
//!
//! Lock wrapper for sharing one store across concurrent callers, and the
//! read-through helper built on it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStore, Clock, MonotonicClock};

/// A store guarded by a single exclusive lock.
///
/// Every operation, reads included, takes the same lock so bulk removals
/// never interleave with inserts or deletes.
pub type SharedCache<V, C = MonotonicClock> = Arc<Mutex<CacheStore<V, C>>>;

/// Wraps a store for sharing.
pub fn shared<V, C>(store: CacheStore<V, C>) -> SharedCache<V, C> {
    Arc::new(Mutex::new(store))
}

// == Read Through ==
/// Returns the cached value for `key`, or runs `fetch` and caches its result.
///
/// The lock is held only for the lookup and for the insert, never while the
/// fetch is pending. A failed fetch caches nothing and its error is returned
/// unchanged. If any invalidation runs while the fetch is pending, the
/// fetched value is returned but not cached, since it may predate the write
/// that triggered the invalidation.
pub async fn get_or_fetch<V, C, F, Fut, E>(
    cache: &Mutex<CacheStore<V, C>>,
    key: &str,
    ttl: Duration,
    fetch: F,
) -> Result<V, E>
where
    V: Clone,
    C: Clock,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    let generation = {
        let mut store = cache.lock().await;
        if let Some(hit) = store.get(key) {
            debug!(key = %key, "Cache hit");
            return Ok(hit);
        }
        store.generation()
    };

    debug!(key = %key, "Cache miss, fetching");
    let data = fetch().await?;

    let stored = cache
        .lock()
        .await
        .set_if_generation(key, data.clone(), ttl, generation);
    if !stored {
        debug!(key = %key, "Invalidated during fetch, not caching");
    }
    Ok(data)
}
