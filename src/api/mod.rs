//! API Module
//!
//! HTTP handlers and routing for the course service REST API.
//!
//! # Endpoints
//! - `/courses`, `/files` - Paginated read-through listings and writes
//! - `/dashboard/*` - Cached aggregate views
//! - `/cache/*` - Cache statistics and maintenance
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
