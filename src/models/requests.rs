//! Request DTOs for the course service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for POST /courses
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
}

/// Request body for POST /files
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileRequest {
    pub course_id: u64,
    pub name: String,
}

/// Query string for listing endpoints
///
/// # Fields
/// - `page`: 0-based page index (default 0)
/// - `course_id`: restricts file listings to one course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub course_id: Option<u64>,
}
