//! Course Cache - read-through caching for a course catalog
//!
//! Provides an in-memory TTL cache with exact-key and prefix invalidation,
//! the offset pagination contract its listing keys follow, and a small HTTP
//! service that reads through the cache and invalidates it on writes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
