//! Course Service
//!
//! Read-through access to the catalog. Reads consult the cache first and
//! store what they fetch under the TTL of their resource class. Writes go to
//! the catalog and then invalidate every cached view they could have changed.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{
    get_or_fetch, shared, CacheStore, Clock, MonotonicClock, ResourceClass, SharedCache, TtlPolicy,
};
use crate::error::{AppError, Result};
use crate::models::{Course, CourseFile};
use crate::pagination::{PageRequest, DEFAULT_PAGE_SIZE};
use crate::service::catalog::Catalog;
use crate::service::keys;

/// Number of files shown in the recent activity feed.
pub const RECENT_FEED_LEN: usize = 10;

pub struct CourseService<C = MonotonicClock> {
    cache: SharedCache<Value, C>,
    catalog: RwLock<Catalog>,
    policy: TtlPolicy,
    page_size: usize,
}

impl CourseService<MonotonicClock> {
    pub fn new(catalog: Catalog, policy: TtlPolicy, page_size: usize) -> Self {
        Self::with_cache(shared(CacheStore::new()), catalog, policy, page_size)
    }
}

impl<C: Clock> CourseService<C> {
    /// Builds a service around an existing cache handle.
    pub fn with_cache(
        cache: SharedCache<Value, C>,
        catalog: Catalog,
        policy: TtlPolicy,
        page_size: usize,
    ) -> Self {
        Self {
            cache,
            catalog: RwLock::new(catalog),
            policy,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Handle to the cache, for maintenance tasks and admin endpoints.
    pub fn cache(&self) -> SharedCache<Value, C> {
        self.cache.clone()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Queries the catalog has served so far.
    pub async fn catalog_reads(&self) -> u64 {
        self.catalog.read().await.reads()
    }

    fn ttl(&self, class: ResourceClass) -> Duration {
        self.policy.ttl_for(class)
    }

    // == Reads ==

    pub async fn list_courses(&self, page: usize) -> Result<Value> {
        let req = PageRequest::new(page, self.page_size);
        let key = keys::courses_page(page);

        get_or_fetch(&self.cache, &key, self.ttl(ResourceClass::List), move || async move {
            let items = self.catalog.read().await.list_courses(req.offset(), req.limit());
            to_json(req.into_result(items))
        })
        .await
    }

    /// Files on one page, across all courses or for `course_id` alone.
    pub async fn list_files(&self, course_id: Option<u64>, page: usize) -> Result<Value> {
        let req = PageRequest::new(page, self.page_size);
        let key = match course_id {
            Some(id) => keys::course_files_page(id, page),
            None => keys::files_page(page),
        };

        get_or_fetch(&self.cache, &key, self.ttl(ResourceClass::List), move || async move {
            let items = self
                .catalog
                .read()
                .await
                .list_files(course_id, req.offset(), req.limit());
            to_json(req.into_result(items))
        })
        .await
    }

    pub async fn courses_with_stats(&self) -> Result<Value> {
        let key = keys::courses_with_stats();

        get_or_fetch(&self.cache, &key, self.ttl(ResourceClass::Stats), move || async move {
            to_json(self.catalog.read().await.courses_with_stats())
        })
        .await
    }

    pub async fn admin_summary(&self) -> Result<Value> {
        let key = keys::dashboard_admin();

        get_or_fetch(&self.cache, &key, self.ttl(ResourceClass::Stats), move || async move {
            to_json(self.catalog.read().await.admin_summary())
        })
        .await
    }

    pub async fn recent_activity(&self) -> Result<Value> {
        let key = keys::dashboard_recent();

        get_or_fetch(&self.cache, &key, self.ttl(ResourceClass::Recent), move || async move {
            to_json(self.catalog.read().await.recent_files(RECENT_FEED_LEN))
        })
        .await
    }

    // == Writes ==

    pub async fn create_course(&self, title: &str) -> Result<Course> {
        let title = require_non_empty("title", title)?;
        let course = self.catalog.write().await.create_course(title);
        info!(course_id = course.id, "Created course");

        self.invalidate(&[keys::COURSES_PREFIX, keys::DASHBOARD_PREFIX]).await;
        Ok(course)
    }

    pub async fn delete_course(&self, id: u64) -> Result<Course> {
        let course = self.catalog.write().await.delete_course(id)?;
        info!(course_id = id, "Deleted course");

        self.invalidate(&[keys::COURSES_PREFIX, keys::FILES_PREFIX, keys::DASHBOARD_PREFIX])
            .await;
        Ok(course)
    }

    pub async fn create_file(&self, course_id: u64, name: &str) -> Result<CourseFile> {
        let name = require_non_empty("name", name)?;
        let file = self.catalog.write().await.create_file(course_id, name)?;
        info!(file_id = file.id, course_id, "Created file");

        self.invalidate_for_file_change().await;
        Ok(file)
    }

    pub async fn delete_file(&self, id: u64) -> Result<CourseFile> {
        let file = self.catalog.write().await.delete_file(id)?;
        info!(file_id = id, "Deleted file");

        self.invalidate_for_file_change().await;
        Ok(file)
    }

    async fn invalidate_for_file_change(&self) {
        self.invalidate(&[keys::FILES_PREFIX, keys::DASHBOARD_PREFIX]).await;
        // Per-course file counts live under the courses prefix
        self.cache.lock().await.invalidate(&keys::courses_with_stats());
    }

    async fn invalidate(&self, prefixes: &[&str]) {
        for prefix in prefixes {
            self.cache.lock().await.invalidate_by_prefix(prefix);
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn service_with_courses(count: usize, page_size: usize) -> CourseService {
        let mut catalog = Catalog::new();
        for i in 0..count {
            catalog.create_course(format!("Course {i}"));
        }
        CourseService::new(catalog, TtlPolicy::default(), page_size)
    }

    #[tokio::test]
    async fn test_list_courses_served_from_cache() {
        let service = service_with_courses(3, 50);

        let first = service.list_courses(0).await.unwrap();
        let second = service.list_courses(0).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.catalog_reads().await, 1);
        assert_eq!(first["items"].as_array().unwrap().len(), 3);
        assert_eq!(first["hasMore"], false);
    }

    #[tokio::test]
    async fn test_exact_page_reports_has_more_then_empty_page() {
        let service = service_with_courses(50, 50);

        let page0 = service.list_courses(0).await.unwrap();
        let page1 = service.list_courses(1).await.unwrap();

        assert_eq!(page0["hasMore"], true);
        assert_eq!(page0["nextPage"], 1);
        assert_eq!(page1["items"].as_array().unwrap().len(), 0);
        assert_eq!(page1["hasMore"], false);
        assert_eq!(page1["previousPage"], 0);
    }

    #[tokio::test]
    async fn test_pages_cached_under_separate_keys() {
        let service = service_with_courses(5, 2);

        service.list_courses(0).await.unwrap();
        service.list_courses(1).await.unwrap();

        let stats = service.cache().lock().await.stats();
        assert!(stats.contains_key("courses:all:page:0"));
        assert!(stats.contains_key("courses:all:page:1"));
    }

    #[tokio::test]
    async fn test_create_course_invalidates_listing() {
        let service = service_with_courses(1, 50);

        service.list_courses(0).await.unwrap();
        service.admin_summary().await.unwrap();
        service.create_course("Rust 101").await.unwrap();
        let listing = service.list_courses(0).await.unwrap();
        let summary = service.admin_summary().await.unwrap();

        assert_eq!(listing["items"].as_array().unwrap().len(), 2);
        assert_eq!(summary["course_count"], 2);
        assert_eq!(service.catalog_reads().await, 4);
    }

    #[tokio::test]
    async fn test_create_file_invalidates_both_file_listings() {
        let service = service_with_courses(2, 50);

        service.list_files(None, 0).await.unwrap();
        service.list_files(Some(1), 0).await.unwrap();
        service.list_courses(0).await.unwrap();
        service.create_file(1, "notes.pdf").await.unwrap();

        let stats = service.cache().lock().await.stats();
        assert!(!stats.contains_key("files:all:page:0"));
        assert!(!stats.contains_key("files:course:1:page:0"));
        assert!(stats.contains_key("courses:all:page:0"));

        let per_course = service.list_files(Some(1), 0).await.unwrap();
        assert_eq!(per_course["items"][0]["name"], "notes.pdf");
    }

    #[tokio::test]
    async fn test_file_change_refreshes_course_stats() {
        let service = service_with_courses(1, 50);

        let before = service.courses_with_stats().await.unwrap();
        service.create_file(1, "a.txt").await.unwrap();
        let after = service.courses_with_stats().await.unwrap();

        assert_eq!(before[0]["file_count"], 0);
        assert_eq!(after[0]["file_count"], 1);
    }

    #[tokio::test]
    async fn test_recent_activity_expires_with_its_ttl() {
        let clock = ManualClock::new();
        let mut catalog = Catalog::new();
        catalog.create_course("Course");
        let service = CourseService::with_cache(
            shared(CacheStore::with_clock(clock.clone())),
            catalog,
            TtlPolicy::default(),
            50,
        );

        service.recent_activity().await.unwrap();
        clock.advance(TtlPolicy::DEFAULT_RECENT);
        service.recent_activity().await.unwrap();
        assert_eq!(service.catalog_reads().await, 1);

        clock.advance(Duration::from_millis(1));
        service.recent_activity().await.unwrap();
        assert_eq!(service.catalog_reads().await, 2);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_cache() {
        let service = service_with_courses(1, 50);
        service.list_courses(0).await.unwrap();

        let result = service.delete_course(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.cache().lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let service = service_with_courses(0, 50);
        let result = service.create_course("   ").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let service = CourseService::new(Catalog::new(), TtlPolicy::default(), 0);
        assert_eq!(service.page_size(), DEFAULT_PAGE_SIZE);
    }
}
