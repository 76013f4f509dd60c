//! Data models for the course service
//!
//! Catalog records plus the DTOs used for serializing/deserializing HTTP
//! request and response bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{AdminSummary, Course, CourseFile, CourseWithStats};
pub use requests::{CreateCourseRequest, CreateFileRequest, ListQuery};
pub use responses::{CacheStatsResponse, HealthResponse, RemovedResponse};
