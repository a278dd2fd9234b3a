//! Database access subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs
//!     → pool.rs initialize (open + validation ping)
//!     → probes acquire/release connections while Ready
//!     → pool.rs shutdown on process exit
//! ```
//!
//! # Design Decisions
//! - One process-owned pool, referenced (never copied) by its consumers
//! - The lifecycle state machine is the only guard against use-before-ready
//!   or use-after-close

pub mod pool;

pub use pool::{ConnectionPool, PoolError};
