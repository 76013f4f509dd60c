//! Catalog
//!
//! In-process stand-in for the remote data store. Every query bumps a read
//! counter, which lets callers see whether a request was served from cache.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{AdminSummary, Course, CourseFile, CourseWithStats};

#[derive(Debug, Default)]
pub struct Catalog {
    courses: BTreeMap<u64, Course>,
    files: BTreeMap<u64, CourseFile>,
    next_course_id: u64,
    next_file_id: u64,
    reads: AtomicU64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries served so far.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    // == Queries ==

    /// Courses ordered by id, `limit` items starting at `offset`.
    pub fn list_courses(&self, offset: usize, limit: usize) -> Vec<Course> {
        self.record_read();
        self.courses
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Files ordered by id, optionally restricted to one course.
    pub fn list_files(&self, course_id: Option<u64>, offset: usize, limit: usize) -> Vec<CourseFile> {
        self.record_read();
        self.files
            .values()
            .filter(|file| course_id.map_or(true, |id| file.course_id == id))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Every course with its file count.
    pub fn courses_with_stats(&self) -> Vec<CourseWithStats> {
        self.record_read();
        self.courses
            .values()
            .map(|course| CourseWithStats {
                id: course.id,
                title: course.title.clone(),
                file_count: self
                    .files
                    .values()
                    .filter(|file| file.course_id == course.id)
                    .count(),
            })
            .collect()
    }

    /// The `limit` most recently added files, newest first.
    pub fn recent_files(&self, limit: usize) -> Vec<CourseFile> {
        self.record_read();
        let mut files: Vec<CourseFile> = self.files.values().cloned().collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        files.truncate(limit);
        files
    }

    pub fn admin_summary(&self) -> AdminSummary {
        self.record_read();
        AdminSummary {
            course_count: self.courses.len(),
            file_count: self.files.len(),
        }
    }

    // == Mutations ==

    pub fn create_course(&mut self, title: impl Into<String>) -> Course {
        self.next_course_id += 1;
        let course = Course {
            id: self.next_course_id,
            title: title.into(),
            created_at: Utc::now(),
        };
        self.courses.insert(course.id, course.clone());
        course
    }

    /// Removes a course and all of its files.
    pub fn delete_course(&mut self, id: u64) -> Result<Course> {
        let course = self
            .courses
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("course {id}")))?;
        self.files.retain(|_, file| file.course_id != id);
        Ok(course)
    }

    pub fn create_file(&mut self, course_id: u64, name: impl Into<String>) -> Result<CourseFile> {
        if !self.courses.contains_key(&course_id) {
            return Err(AppError::NotFound(format!("course {course_id}")));
        }
        self.next_file_id += 1;
        let file = CourseFile {
            id: self.next_file_id,
            course_id,
            name: name.into(),
            created_at: Utc::now(),
        };
        self.files.insert(file.id, file.clone());
        Ok(file)
    }

    pub fn delete_file(&mut self, id: u64) -> Result<CourseFile> {
        self.files
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("file {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(courses: usize) -> Catalog {
        let mut catalog = Catalog::new();
        for i in 0..courses {
            catalog.create_course(format!("Course {i}"));
        }
        catalog
    }

    #[test]
    fn test_list_courses_window() {
        let catalog = seeded(5);

        let page = catalog.list_courses(2, 2);

        assert_eq!(page.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 4]);
        assert!(catalog.list_courses(10, 2).is_empty());
        assert_eq!(catalog.reads(), 2);
    }

    #[test]
    fn test_files_filtered_by_course() {
        let mut catalog = seeded(2);
        catalog.create_file(1, "a.pdf").unwrap();
        catalog.create_file(2, "b.pdf").unwrap();
        catalog.create_file(1, "c.pdf").unwrap();

        let files = catalog.list_files(Some(1), 0, 10);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.course_id == 1));
        assert_eq!(catalog.list_files(None, 0, 10).len(), 3);
    }

    #[test]
    fn test_create_file_requires_course() {
        let mut catalog = seeded(1);
        assert_eq!(
            catalog.create_file(9, "x"),
            Err(AppError::NotFound("course 9".into()))
        );
    }

    #[test]
    fn test_delete_course_removes_its_files() {
        let mut catalog = seeded(2);
        catalog.create_file(1, "a").unwrap();
        catalog.create_file(2, "b").unwrap();

        catalog.delete_course(1).unwrap();

        assert_eq!(catalog.list_files(None, 0, 10).len(), 1);
        assert!(catalog.delete_course(1).is_err());
    }

    #[test]
    fn test_courses_with_stats() {
        let mut catalog = seeded(2);
        catalog.create_file(2, "a").unwrap();
        catalog.create_file(2, "b").unwrap();

        let stats = catalog.courses_with_stats();
        assert_eq!(stats[0].file_count, 0);
        assert_eq!(stats[1].file_count, 2);
    }

    #[test]
    fn test_recent_files_newest_first() {
        let mut catalog = seeded(1);
        for name in ["a", "b", "c"] {
            catalog.create_file(1, name).unwrap();
        }

        let recent = catalog.recent_files(2);
        assert_eq!(recent.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(), vec!["c", "b"]);
    }
}
