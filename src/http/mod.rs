//! HTTP presentation subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route table)
//!     → health subsystem (aggregate or single probe)
//!     → response.rs (response bodies)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
