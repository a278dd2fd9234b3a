//! Database connection pool with an explicit lifecycle.
//!
//! # Responsibilities
//! - Own the Uninitialized → Ready → Closed state machine
//! - Open a bounded sqlx pool and validate it before declaring readiness
//! - Hand out connections only while Ready
//! - Drain and close connections exactly once on shutdown
//!
//! # Design Decisions
//! - The pool handle lives inside the state enum; there is no way to reach
//!   a connection while the state is Uninitialized or Closed
//! - Connections are returned via sqlx's guard, which releases the slot on
//!   drop on every exit path
//! - A failed initialization leaves the state Uninitialized; whether the
//!   process keeps running degraded is the caller's call

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql, MySqlPool};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::DatabaseConfig;

/// Timeout for checking a connection out of a Ready pool.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors surfaced by the pool lifecycle.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Acquire was attempted while the pool is not Ready.
    #[error("database pool is not ready")]
    NotReady,

    /// Opening or validating the pool at startup failed.
    #[error("pool initialization failed: {0}")]
    Init(#[source] sqlx::Error),

    /// Checking a connection out of a Ready pool failed.
    #[error("failed to acquire connection: {0}")]
    Acquire(#[source] sqlx::Error),
}

/// Lifecycle state, holding the live pool only while Ready.
#[derive(Debug, Default)]
enum PoolState {
    #[default]
    Uninitialized,
    Ready(MySqlPool),
    Closed,
}

impl PoolState {
    fn name(&self) -> &'static str {
        match self {
            PoolState::Uninitialized => "uninitialized",
            PoolState::Ready(_) => "ready",
            PoolState::Closed => "closed",
        }
    }
}

/// Process-owned database connection pool.
///
/// Constructed once at startup, shared by reference with every consumer
/// that needs a connection.
#[derive(Debug, Default)]
pub struct ConnectionPool {
    state: RwLock<PoolState>,
}

impl ConnectionPool {
    /// Create an uninitialized pool.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PoolState::Uninitialized),
        }
    }

    /// Open the pool and validate it with one acquire/ping round-trip.
    ///
    /// On success the state transitions to Ready. On failure the state is
    /// left untouched and every subsequent `acquire` keeps failing with
    /// [`PoolError::NotReady`].
    pub async fn initialize(&self, config: &DatabaseConfig) -> Result<(), PoolError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(if config.tls {
                MySqlSslMode::Required
            } else {
                MySqlSslMode::Disabled
            });

        let pool = MySqlPoolOptions::new()
            .max_connections(config.connection_limit)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(PoolError::Init)?;

        // Fail fast: one validation round-trip before declaring readiness.
        let mut conn = pool.acquire().await.map_err(PoolError::Init)?;
        conn.ping().await.map_err(PoolError::Init)?;
        drop(conn);

        let mut state = self.state.write().await;
        *state = PoolState::Ready(pool);

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            connection_limit = config.connection_limit,
            "Database pool ready"
        );
        Ok(())
    }

    /// Check a connection out of the pool.
    ///
    /// The returned guard puts the slot back on drop, so callers get scoped
    /// release on every exit path including errors.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>, PoolError> {
        let pool = {
            let state = self.state.read().await;
            match &*state {
                PoolState::Ready(pool) => pool.clone(),
                _ => return Err(PoolError::NotReady),
            }
        };

        pool.acquire().await.map_err(PoolError::Acquire)
    }

    /// Drain and close the pool. Idempotent: calling this when the pool is
    /// Closed or was never initialized is a no-op.
    pub async fn shutdown(&self) {
        let pool = {
            let mut state = self.state.write().await;
            match std::mem::take(&mut *state) {
                PoolState::Ready(pool) => {
                    *state = PoolState::Closed;
                    Some(pool)
                }
                PoolState::Closed => {
                    *state = PoolState::Closed;
                    None
                }
                PoolState::Uninitialized => None,
            }
        };

        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }

    /// Current lifecycle state, for startup logs and diagnostics.
    pub async fn status(&self) -> &'static str {
        self.state.read().await.name()
    }
}
