//! Cache Statistics Module
//!
//! Snapshot of the store population plus read and removal counters.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Raw entry count, stale-but-unread entries included
    pub size: usize,
    /// Currently stored keys, unordered
    pub keys: Vec<String>,
    /// Number of reads that returned a value
    pub hits: u64,
    /// Number of reads that returned nothing (absent or stale)
    pub misses: u64,
    /// Entries removed because they were stale (lazy or eager)
    pub expired: u64,
    /// Entries removed by explicit invalidation or clear
    pub invalidated: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    pub fn record_invalidated(&mut self, count: usize) {
        self.invalidated += count as u64;
    }

    /// Returns true if `key` is among the snapshot's keys.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}
