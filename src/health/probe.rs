//! The dependency-probe capability and its result types.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified outcome of one probe execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

impl ProbeStatus {
    /// Returns `true` for [`ProbeStatus::Ok`].
    pub fn is_ok(self) -> bool {
        matches!(self, ProbeStatus::Ok)
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeStatus::Ok => write!(f, "ok"),
            ProbeStatus::Error => write!(f, "error"),
        }
    }
}

/// Result of running a single probe. Produced fresh per request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Probe name, unique within one aggregate request.
    pub name: String,
    /// Classified status.
    pub status: ProbeStatus,
}

/// Classified probe failures.
///
/// Every variant surfaces as an error entry in the aggregate; none of them
/// crosses the probe boundary as a failure of the aggregate call itself.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The database pool was not in its Ready state.
    #[error("database pool is not ready")]
    PoolNotReady,

    /// The probe's time budget elapsed before it completed.
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Network, DNS, or protocol failure while talking to the dependency.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A required configuration field is absent.
    #[error("missing configuration: {0}")]
    ConfigMissing(&'static str),

    /// The dependency answered, but not with a healthy response.
    #[error("dependency reported unhealthy: {0}")]
    Unhealthy(String),
}

/// A bounded-time health check against one external dependency.
///
/// Contract: `check` classifies every failure into a [`ProbeError`] instead
/// of letting it escape, so one broken dependency can never abort the
/// others or corrupt the aggregate.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Stable name, used as the key in the aggregate services map.
    fn name(&self) -> &str;

    /// Attempt one validation of the dependency.
    async fn check(&self) -> Result<(), ProbeError>;
}
