//! Cache Store Module
//!
//! Main cache engine: a HashMap of TTL entries with exact-key and prefix
//! invalidation, lazy eviction on read and an eager cleanup sweep.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, MonotonicClock};

// == Cache Store ==
/// In-memory TTL cache keyed by string.
///
/// All operations are total. Bulk removals collect matching keys first
/// and delete them afterwards, never mutating the map while iterating it.
#[derive(Debug)]
pub struct CacheStore<V, C = MonotonicClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Read and removal counters
    stats: CacheStats,
    /// Time source for entry age
    clock: C,
    /// Bumped by every invalidation, matching or not
    generation: u64,
}

impl<V: Clone> CacheStore<V, MonotonicClock> {
    // == Constructor ==
    /// Creates an empty store using the monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<V: Clone> Default for CacheStore<V, MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clock> CacheStore<V, C> {
    /// Creates an empty store reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
            generation: 0,
        }
    }

    // == Set ==
    /// Stores `data` under `key` for `ttl`.
    ///
    /// Any previous entry for the key is discarded and its age reset.
    pub fn set(&mut self, key: impl Into<String>, data: V, ttl: Duration) {
        let entry = CacheEntry::new(data, ttl, self.clock.now());
        self.entries.insert(key.into(), entry);
    }

    /// Stores `data` only if no invalidation has run since `generation` was
    /// read. Returns whether the write happened.
    pub fn set_if_generation(
        &mut self,
        key: impl Into<String>,
        data: V,
        ttl: Duration,
        generation: u64,
    ) -> bool {
        if self.generation != generation {
            return false;
        }
        self.set(key, data, ttl);
        true
    }

    /// Invalidation counter, for detecting writes that raced an invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for absent keys. A stale entry is removed and also
    /// reported as `None`.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();

        let stale = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_stale(now),
        };

        if stale {
            self.entries.remove(key);
            self.stats.record_expired(1);
            self.stats.record_miss();
            debug!(key = %key, "Evicted stale entry on read");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Returns whether an entry was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.generation = self.generation.wrapping_add(1);
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_invalidated(1);
        }
        removed
    }

    // == Invalidate By Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// An empty prefix matches every key. Returns the number removed.
    pub fn invalidate_by_prefix(&mut self, prefix: &str) -> usize {
        self.generation = self.generation.wrapping_add(1);
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();

        let count = self.remove_keys(matching);
        self.stats.record_invalidated(count);
        debug!(prefix = %prefix, count, "Invalidated entries by prefix");
        count
    }

    // == Clear ==
    /// Removes every entry. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        self.generation = self.generation.wrapping_add(1);
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_invalidated(count);
        debug!(count, "Cleared cache");
        count
    }

    // == Cleanup ==
    /// Removes every entry that is stale right now.
    ///
    /// Valid entries keep their data, creation time and TTL.
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now();
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_stale(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = self.remove_keys(stale);
        self.stats.record_expired(count);
        count
    }

    // == Stats ==
    /// Returns the raw population and counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            keys: self.entries.keys().cloned().collect(),
            ..self.stats.clone()
        }
    }

    // == Peek ==
    /// Returns the raw entry for `key`, stale or not, without touching
    /// counters or evicting.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_keys(&mut self, keys: Vec<String>) -> usize {
        keys.iter()
            .filter(|key| self.entries.remove(key.as_str()).is_some())
            .count()
    }
}
