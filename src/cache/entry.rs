//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub data: V,
    /// Instant the entry was written
    pub created_at: Instant,
    /// Maximum age before the entry turns stale
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry written at `now`.
    pub fn new(data: V, ttl: Duration, now: Instant) -> Self {
        Self {
            data,
            created_at: now,
            ttl,
        }
    }

    // == Age ==
    /// Time elapsed between creation and `now`, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks if the entry is stale at `now`.
    ///
    /// Boundary condition: an entry whose age equals its TTL is still valid.
    /// It turns stale once the age strictly exceeds the TTL. Both lazy
    /// eviction in `get` and the eager `cleanup` sweep use this predicate.
    pub fn is_stale(&self, now: Instant) -> bool {
        self.age(now) > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime at `now`, or zero once stale.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        self.ttl.saturating_sub(self.age(now))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_fresh_is_valid() {
        let now = Instant::now();
        let entry = CacheEntry::new("value".to_string(), Duration::from_secs(60), now);

        assert_eq!(entry.data, "value");
        assert_eq!(entry.age(now), Duration::ZERO);
        assert!(!entry.is_stale(now));
    }

    #[test]
    fn test_entry_stale_after_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(1), now);

        assert!(entry.is_stale(now + Duration::from_millis(1001)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(1), now);

        // Age == ttl is still valid
        assert!(!entry.is_stale(now + Duration::from_secs(1)));
        assert!(entry.is_stale(now + Duration::from_secs(1) + Duration::from_nanos(1)));
    }

    #[test]
    fn test_zero_ttl_is_valid_only_at_creation() {
        let now = Instant::now();
        let entry = CacheEntry::new((), Duration::ZERO, now);

        assert!(!entry.is_stale(now));
        assert!(entry.is_stale(now + Duration::from_millis(1)));
    }

    #[test]
    fn test_ttl_remaining() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(10), now);

        assert_eq!(
            entry.ttl_remaining(now + Duration::from_secs(4)),
            Duration::from_secs(6)
        );
        assert_eq!(
            entry.ttl_remaining(now + Duration::from_secs(30)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_age_before_creation_saturates() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(10), now + Duration::from_secs(5));

        assert_eq!(entry.age(now), Duration::ZERO);
    }
}
