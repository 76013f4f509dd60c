//! API Handlers
//!
//! HTTP request handlers for course reads, writes, and cache maintenance.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::cache::TtlPolicy;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CacheStatsResponse, Course, CourseFile, CreateCourseRequest, CreateFileRequest,
    HealthResponse, ListQuery, RemovedResponse,
};
use crate::service::{Catalog, CourseService};

/// Application state shared across all handlers.
///
/// The service owns the cache instance; nothing is global.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CourseService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: CourseService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState with an empty catalog from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CourseService::new(
            Catalog::new(),
            config.ttl_policy(),
            config.page_size,
        ))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CourseService::new(
            Catalog::new(),
            TtlPolicy::default(),
            crate::pagination::DEFAULT_PAGE_SIZE,
        ))
    }
}

// == Courses ==

/// Handler for GET /courses?page=N
pub async fn list_courses_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    Ok(Json(state.service.list_courses(query.page).await?))
}

/// Handler for POST /courses
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>)> {
    let course = state.service.create_course(&req.title).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Handler for DELETE /courses/:id
pub async fn delete_course_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Course>> {
    Ok(Json(state.service.delete_course(id).await?))
}

/// Handler for GET /courses/stats
pub async fn course_stats_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    Ok(Json(state.service.courses_with_stats().await?))
}

// == Files ==

/// Handler for GET /files?page=N&course_id=M
pub async fn list_files_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    Ok(Json(
        state.service.list_files(query.course_id, query.page).await?,
    ))
}

/// Handler for POST /files
pub async fn create_file_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<CourseFile>)> {
    let file = state.service.create_file(req.course_id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(file)))
}

/// Handler for DELETE /files/:id
pub async fn delete_file_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CourseFile>> {
    Ok(Json(state.service.delete_file(id).await?))
}

// == Dashboard ==

/// Handler for GET /dashboard/recent
pub async fn recent_activity_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    Ok(Json(state.service.recent_activity().await?))
}

/// Handler for GET /dashboard/admin
pub async fn admin_dashboard_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    Ok(Json(state.service.admin_summary().await?))
}

// == Cache Maintenance ==

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.service.cache().lock().await.stats();
    Json(stats.into())
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<RemovedResponse> {
    let removed = state.service.cache().lock().await.clear();
    Json(RemovedResponse::new(removed))
}

/// Handler for DELETE /cache/keys/:key
pub async fn invalidate_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<RemovedResponse> {
    let removed = state.service.cache().lock().await.invalidate(&key);
    Json(RemovedResponse::new(usize::from(removed)))
}

/// Handler for DELETE /cache/prefix/:prefix
pub async fn invalidate_prefix_handler(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
) -> Json<RemovedResponse> {
    let removed = state.service.cache().lock().await.invalidate_by_prefix(&prefix);
    Json(RemovedResponse::new(removed))
}

/// Handler for POST /cache/cleanup
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<RemovedResponse> {
    let removed = state.service.cache().lock().await.cleanup();
    Json(RemovedResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
