//! techedu - course catalog and enrollment API for TechEdu Academy
//!
//! Serves the course catalog, instructor profiles and testimonials, and
//! accepts contact and class-enrollment submissions. All data lives in an
//! in-memory store for the lifetime of the process.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod storage;
