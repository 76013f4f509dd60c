//! Service Module
//!
//! The catalog (remote store stand-in), the cache key scheme, and the
//! read-through course service tying them to the cache.

pub mod catalog;
pub mod courses;
pub mod keys;

pub use catalog::Catalog;
pub use courses::CourseService;
