//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → structured log events (tracing, initialized in main)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape of GET /metrics)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; level set by config/env
//! - Metrics are cheap (atomic increments); recording never fails a request

pub mod metrics;
