//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Initialize pool → Start listener
//!
//! Shutdown (shutdown.rs):
//!     SIGTERM/SIGINT → Trigger broadcast → Stop accepting → Drain
//!     → Close database pool → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the pool, then the listener
//! - Ordered shutdown: stop accept, drain, close the pool last
//! - The pool outlives the server so in-flight probes finish cleanly

pub mod shutdown;

pub use shutdown::{wait_for_signal, Shutdown};
