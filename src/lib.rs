//! Healthcheck API
//!
//! A liveness/health aggregator built with Tokio and Axum: one aggregate
//! endpoint fans out to dependency probes, runs them concurrently under a
//! bounded per-probe timeout, and merges the results into a single status.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                HEALTHCHECK API                │
//!                      │                                              │
//!     GET /            │  ┌─────────┐     ┌────────────────────────┐  │
//!     ─────────────────┼─▶│  http   │────▶│  health aggregator     │  │
//!                      │  │ server  │     │  (task per probe,      │  │
//!                      │  └─────────┘     │   per-probe deadline)  │  │
//!                      │                  └──────────┬─────────────┘  │
//!                      │                             │                │
//!                      │        ┌────────────┬───────┴────┬─────────┐ │
//!                      │        ▼            ▼            ▼         ▼ │
//!                      │  ┌──────────┐ ┌──────────┐ ┌─────────┐ ┌───┐ │
//!     Response         │  │ database │ │  cache   │ │dashboard│ │ext│ │
//!     ◀────────────────┼──│  (pool)  │ │  (ping)  │ │  (GET)  │ │API│ │
//!                      │  └────┬─────┘ └──────────┘ └─────────┘ └───┘ │
//!                      │       │                                      │
//!                      │  ┌────▼─────────────────────────────────────┐│
//!                      │  │ db::ConnectionPool                       ││
//!                      │  │ Uninitialized → Ready → Closed           ││
//!                      │  └──────────────────────────────────────────┘│
//!                      │                                              │
//!                      │  Cross-cutting: config, observability,       │
//!                      │  lifecycle (graceful shutdown)               │
//!                      └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod db;
pub mod health;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use db::ConnectionPool;
pub use health::{HealthAggregator, ProbeRegistry};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
