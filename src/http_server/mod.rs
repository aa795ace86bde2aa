//! # techedu HTTP Server Module
//!
//! JSON API over the record store, served with Axum.
//!
//! # Endpoints
//!
//! - `/health`, `/metrics` - Health check and request counters
//! - `/api/courses*`, `/api/instructors`, `/api/testimonials` - Catalog reads
//! - `/api/contact`, `/api/enrollment` - Form submissions
//! - `/api/contacts`, `/api/enrollments` - Admin listings (unauthenticated,
//!   can be switched off in config)

pub mod catalog_routes;
pub mod config;
pub mod errors;
pub mod inquiry_routes;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::AppState;
