//! Cache key scheme
//!
//! Keys are `resource:discriminator[:page:<n>]`, so one prefix covers every
//! cached view of a resource.

pub const COURSES_PREFIX: &str = "courses:";
pub const FILES_PREFIX: &str = "files:";
pub const DASHBOARD_PREFIX: &str = "dashboard:";

pub fn courses_page(page: usize) -> String {
    format!("{COURSES_PREFIX}all:page:{page}")
}

pub fn courses_with_stats() -> String {
    format!("{COURSES_PREFIX}withStats")
}

pub fn files_page(page: usize) -> String {
    format!("{FILES_PREFIX}all:page:{page}")
}

pub fn course_files_page(course_id: u64, page: usize) -> String {
    format!("{FILES_PREFIX}course:{course_id}:page:{page}")
}

pub fn dashboard_recent() -> String {
    format!("{DASHBOARD_PREFIX}recent")
}

pub fn dashboard_admin() -> String {
    format!("{DASHBOARD_PREFIX}admin")
}
