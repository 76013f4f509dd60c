//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::TtlPolicy;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between eager cleanup sweeps
    pub cleanup_interval: u64,
    /// Items per listing page
    pub page_size: usize,
    /// TTL in seconds for listing results
    pub ttl_list: u64,
    /// TTL in seconds for aggregate stats
    pub ttl_stats: u64,
    /// TTL in seconds for recent activity feeds
    pub ttl_recent: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `PAGE_SIZE` - Listing page size (default: 50, 0 means default)
    /// - `TTL_LIST_SECS` - Listing TTL (default: 600)
    /// - `TTL_STATS_SECS` - Stats TTL (default: 300)
    /// - `TTL_RECENT_SECS` - Recent feed TTL (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let page_size = env_or("PAGE_SIZE", defaults.page_size);

        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            ttl_list: env_or("TTL_LIST_SECS", defaults.ttl_list),
            ttl_stats: env_or("TTL_STATS_SECS", defaults.ttl_stats),
            ttl_recent: env_or("TTL_RECENT_SECS", defaults.ttl_recent),
        }
    }

    /// Builds the TTL policy table from the configured durations.
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            list: Duration::from_secs(self.ttl_list),
            stats: Duration::from_secs(self.ttl_stats),
            recent: Duration::from_secs(self.ttl_recent),
        }
    }

    /// Sweep interval, never shorter than one second.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        let policy = TtlPolicy::default();
        Self {
            server_port: 3000,
            cleanup_interval: 60,
            page_size: DEFAULT_PAGE_SIZE,
            ttl_list: policy.list.as_secs(),
            ttl_stats: policy.stats.as_secs(),
            ttl_recent: policy.recent.as_secs(),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
