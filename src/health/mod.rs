//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Aggregate request
//!     → aggregator.rs asks registry.rs for the probe set
//!     → one task per probe, each bounded by the per-probe deadline
//!         database.rs  → pooled connection, SELECT 1
//!         cache.rs     → short-lived client, PING
//!         dashboard.rs → GET /login, expect 200
//!         external.rs  → GET url, expect 200 + status == "ok"
//!     → join all, merge into AggregateHealth (error-dominant)
//! ```
//!
//! # Design Decisions
//! - Every probe is a hard error boundary: failures become classified
//!   results, never exceptions crossing into the aggregate
//! - A timed-out probe costs only its own entry; the aggregate still waits
//!   for every other probe (join-all, not a race)
//! - No retries anywhere; a failed probe is reported, not retried

pub mod aggregator;
pub mod cache;
pub mod dashboard;
pub mod database;
pub mod external;
pub mod probe;
pub mod registry;

pub use aggregator::{AggregateHealth, HealthAggregator};
pub use cache::CacheProbe;
pub use dashboard::DashboardProbe;
pub use database::DatabaseProbe;
pub use external::ExternalApiProbe;
pub use probe::{DependencyProbe, ProbeError, ProbeResult, ProbeStatus};
pub use registry::ProbeRegistry;
