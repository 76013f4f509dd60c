//! Records held by the catalog and cached by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A file attached to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseFile {
    pub id: u64,
    pub course_id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A course together with its file count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseWithStats {
    pub id: u64,
    pub title: String,
    pub file_count: usize,
}

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub course_count: usize,
    pub file_count: usize,
}
