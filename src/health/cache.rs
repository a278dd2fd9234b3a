//! Cache probe: short-lived connection, PING, disconnect.

use async_trait::async_trait;

use crate::config::CacheConfig;
use crate::health::probe::{DependencyProbe, ProbeError};

/// Probes the cache server with a connect/ping round-trip.
///
/// The client is created per check and dropped on every exit path; there is
/// no pooled cache connection to manage.
pub struct CacheProbe {
    url: String,
}

impl CacheProbe {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            url: format!("redis://{}:{}", config.host, config.port),
        }
    }
}

#[async_trait]
impl DependencyProbe for CacheProbe {
    fn name(&self) -> &str {
        "redis"
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let client = redis::Client::open(self.url.as_str())
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        Ok(())
    }
}
