//! API Routes
//!
//! Configures the Axum router with all course service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    admin_dashboard_handler, cache_stats_handler, cleanup_handler, clear_cache_handler,
    course_stats_handler, create_course_handler, create_file_handler, delete_course_handler,
    delete_file_handler, health_handler, invalidate_key_handler, invalidate_prefix_handler,
    list_courses_handler, list_files_handler, recent_activity_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /courses?page=N`, `POST /courses`, `DELETE /courses/:id`
/// - `GET /courses/stats`
/// - `GET /files?page=N&course_id=M`, `POST /files`, `DELETE /files/:id`
/// - `GET /dashboard/recent`, `GET /dashboard/admin`
/// - `GET /cache/stats`, `DELETE /cache`, `DELETE /cache/keys/:key`,
///   `DELETE /cache/prefix/:prefix`, `POST /cache/cleanup`
/// - `GET /health`
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/courses", get(list_courses_handler).post(create_course_handler))
        .route("/courses/stats", get(course_stats_handler))
        .route("/courses/:id", delete(delete_course_handler))
        .route("/files", get(list_files_handler).post(create_file_handler))
        .route("/files/:id", delete(delete_file_handler))
        .route("/dashboard/recent", get(recent_activity_handler))
        .route("/dashboard/admin", get(admin_dashboard_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/keys/:key", delete(invalidate_key_handler))
        .route("/cache/prefix/:prefix", delete(invalidate_prefix_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
