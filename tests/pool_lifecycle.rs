//! Connection pool lifecycle tests: no connection is reachable outside the
//! Ready state, and shutdown is idempotent.

use std::time::Duration;

use healthcheck_api::config::DatabaseConfig;
use healthcheck_api::db::{ConnectionPool, PoolError};

mod common;

#[tokio::test]
async fn acquire_before_initialize_fails() {
    let pool = ConnectionPool::new();

    let err = pool.acquire().await.unwrap_err();
    assert!(matches!(err, PoolError::NotReady));
    assert_eq!(pool.status().await, "uninitialized");
}

#[tokio::test]
async fn failed_initialize_leaves_pool_unready() {
    let pool = ConnectionPool::new();

    let config = DatabaseConfig {
        host: "127.0.0.1".into(),
        port: common::closed_port().await,
        ..DatabaseConfig::default()
    };

    let result = tokio::time::timeout(Duration::from_secs(30), pool.initialize(&config))
        .await
        .expect("initialize should resolve against a closed port");

    assert!(matches!(result.unwrap_err(), PoolError::Init(_)));
    assert_eq!(pool.status().await, "uninitialized");
    assert!(matches!(pool.acquire().await.unwrap_err(), PoolError::NotReady));
}

#[tokio::test]
async fn shutdown_is_idempotent() {
    let pool = ConnectionPool::new();

    // Shutdown before initialization is a no-op, twice over.
    pool.shutdown().await;
    pool.shutdown().await;

    assert!(matches!(pool.acquire().await.unwrap_err(), PoolError::NotReady));
}
