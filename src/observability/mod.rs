//! Observability for techedu
//!
//! - Structured logging through `tracing` (JSON lines by default)
//! - Monotonic request counters served at `/metrics`
//!
//! Observability is read-only: nothing here changes how a request is handled.
//!
//! # Usage
//!
//! ```ignore
//! use techedu::observability::{init_logging, LogConfig, MetricsRegistry};
//!
//! init_logging(&LogConfig::default())?;
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_contacts_submitted();
//! ```

mod logger;
mod metrics;

pub use logger::{init_logging, LogConfig};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
