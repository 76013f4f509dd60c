//! Cache Module
//!
//! Provides an in-memory TTL cache with exact-key and prefix invalidation.

mod clock;
mod entry;
mod policy;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use policy::{ResourceClass, TtlPolicy};
pub use shared::{get_or_fetch, shared, SharedCache};
pub use stats::CacheStats;
pub use store::CacheStore;
