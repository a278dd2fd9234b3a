//! Database probe: one pooled connection, one trivial query.

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{ConnectionPool, PoolError};
use crate::health::probe::{DependencyProbe, ProbeError};

/// Probes the relational database through the shared connection pool.
pub struct DatabaseProbe {
    pool: Arc<ConnectionPool>,
}

impl DatabaseProbe {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DependencyProbe for DatabaseProbe {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let mut conn = self.pool.acquire().await.map_err(|e| match e {
            PoolError::NotReady => ProbeError::PoolNotReady,
            other => ProbeError::Transport(other.to_string()),
        })?;

        // The guard returns the connection to the pool on drop, so a failed
        // query still releases the slot.
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        Ok(())
    }
}
