//! TTL Policy Module
//!
//! How long each class of cached resource may be served before refetching.

use std::time::Duration;

use serde::Serialize;

/// Class of cached resource, each with its own TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceClass {
    /// Listing query results
    List,
    /// Aggregate or statistical summaries
    Stats,
    /// Recency-ordered activity feeds
    Recent,
}

// == TTL Policy ==
/// TTL per resource class, consulted by callers when writing to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub list: Duration,
    pub stats: Duration,
    pub recent: Duration,
}

impl TtlPolicy {
    pub const DEFAULT_LIST: Duration = Duration::from_secs(10 * 60);
    pub const DEFAULT_STATS: Duration = Duration::from_secs(5 * 60);
    pub const DEFAULT_RECENT: Duration = Duration::from_secs(60);

    /// Returns the TTL for `class`.
    pub fn ttl_for(&self, class: ResourceClass) -> Duration {
        match class {
            ResourceClass::List => self.list,
            ResourceClass::Stats => self.stats,
            ResourceClass::Recent => self.recent,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            list: Self::DEFAULT_LIST,
            stats: Self::DEFAULT_STATS,
            recent: Self::DEFAULT_RECENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for(ResourceClass::List), Duration::from_secs(600));
        assert_eq!(policy.ttl_for(ResourceClass::Stats), Duration::from_secs(300));
        assert_eq!(policy.ttl_for(ResourceClass::Recent), Duration::from_secs(60));
    }

    #[test]
    fn test_custom_policy() {
        let policy = TtlPolicy {
            list: Duration::from_secs(1),
            ..TtlPolicy::default()
        };
        assert_eq!(policy.ttl_for(ResourceClass::List), Duration::from_secs(1));
        assert_eq!(policy.ttl_for(ResourceClass::Recent), Duration::from_secs(60));
    }
}
