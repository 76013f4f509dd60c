//! TTL Cleanup Task
//!
//! Background task that periodically sweeps stale cache entries, so keys
//! written but never read again do not pile up.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, SharedCache};

/// Spawns a background task that periodically removes stale cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between runs
/// and holding the cache lock only for the sweep itself.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = shared(CacheStore::<Value>::new());
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V, C>(cache: SharedCache<V, C>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.lock().await.cleanup();

            if removed > 0 {
                info!("TTL cleanup: removed {} stale entries", removed);
            } else {
                debug!("TTL cleanup: no stale entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{shared, CacheStore, ManualClock};

    #[tokio::test]
    async fn test_cleanup_task_removes_stale_entries() {
        let clock = ManualClock::new();
        let cache = shared(CacheStore::with_clock(clock.clone()));
        {
            let mut guard = cache.lock().await;
            guard.set("expire_soon", "value".to_string(), Duration::from_secs(1));
            guard.set("long_lived", "value".to_string(), Duration::from_secs(3600));
        }
        clock.advance(Duration::from_secs(2));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(300)).await;

        {
            let guard = cache.lock().await;
            assert!(guard.peek("expire_soon").is_none(), "Stale entry should have been swept");
            assert!(guard.peek("long_lived").is_some(), "Valid entry should not be removed");
            assert_eq!(guard.stats().expired, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = shared(CacheStore::<String>::new());

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
