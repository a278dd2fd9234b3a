//! Concurrent probe execution and result aggregation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;

use crate::health::probe::{DependencyProbe, ProbeError, ProbeResult, ProbeStatus};
use crate::health::registry::ProbeRegistry;
use crate::observability::metrics;

/// Aggregate health for one request: the worst individual probe result
/// dominates the overall status.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateHealth {
    /// `"ok"` only when every service entry is ok.
    pub status: ProbeStatus,
    /// ISO-8601 timestamp of report creation.
    pub timestamp: String,
    /// Per-dependency status, keyed by probe name.
    pub services: BTreeMap<String, ProbeStatus>,
}

impl AggregateHealth {
    /// Returns `true` when the overall status is ok.
    pub fn is_healthy(&self) -> bool {
        self.status.is_ok()
    }
}

/// Runs registered probes concurrently under a per-probe deadline and merges
/// the results. Stateless per call.
pub struct HealthAggregator {
    registry: Arc<ProbeRegistry>,
    per_probe_timeout: Duration,
}

impl HealthAggregator {
    pub fn new(registry: Arc<ProbeRegistry>, per_probe_timeout: Duration) -> Self {
        Self {
            registry,
            per_probe_timeout,
        }
    }

    /// Run every registered probe concurrently and merge the results.
    ///
    /// One task per probe; each `check` is wrapped in its own deadline, so a
    /// hanging dependency degrades only its own entry. This is a join-all:
    /// the report is not produced until every task has resolved, completed
    /// or timed out. A task that panics contributes an error entry under its
    /// probe's name instead of aborting the aggregate.
    pub async fn check_all(&self) -> AggregateHealth {
        tracing::debug!(probe_count = self.registry.len(), "Running aggregate health check");

        let handles: Vec<_> = self
            .registry
            .probes()
            .iter()
            .map(|probe| {
                let name = probe.name().to_string();
                let probe = Arc::clone(probe);
                let budget = self.per_probe_timeout;
                (name, tokio::spawn(run_probe(probe, budget)))
            })
            .collect();

        let mut services = BTreeMap::new();
        for (name, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(probe = %name, error = %e, "Probe task aborted");
                    ProbeResult {
                        name,
                        status: ProbeStatus::Error,
                    }
                }
            };
            // Union over probe names; config validation keeps names unique,
            // so a later insert never actually displaces an earlier one.
            services.insert(result.name, result.status);
        }

        let status = if services.values().any(|s| !s.is_ok()) {
            ProbeStatus::Error
        } else {
            ProbeStatus::Ok
        };

        AggregateHealth {
            status,
            timestamp: Utc::now().to_rfc3339(),
            services,
        }
    }

    /// Run exactly one probe by name, with the same deadline and failure
    /// semantics as the aggregate path. Returns `None` for unknown names.
    pub async fn check_single(&self, name: &str) -> Option<ProbeResult> {
        let probe = self.registry.find(name)?;
        let name = name.to_string();
        let budget = self.per_probe_timeout;

        let result = match tokio::spawn(run_probe(probe, budget)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(probe = %name, error = %e, "Probe task aborted");
                ProbeResult {
                    name,
                    status: ProbeStatus::Error,
                }
            }
        };
        Some(result)
    }

    /// The configured per-probe time budget.
    pub fn per_probe_timeout(&self) -> Duration {
        self.per_probe_timeout
    }
}

/// Execute one probe under its deadline and classify the outcome.
///
/// The elapsed deadline drops the in-flight future, so an abandoned probe
/// leaves nothing running; concurrency stays bounded at one task per probe
/// per request.
async fn run_probe(probe: Arc<dyn DependencyProbe>, budget: Duration) -> ProbeResult {
    let name = probe.name().to_string();
    let started = Instant::now();

    let status = match tokio::time::timeout(budget, probe.check()).await {
        Ok(Ok(())) => {
            tracing::debug!(
                probe = %name,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Probe succeeded"
            );
            ProbeStatus::Ok
        }
        Ok(Err(e)) => {
            tracing::warn!(probe = %name, error = %e, "Probe failed");
            ProbeStatus::Error
        }
        Err(_) => {
            let e = ProbeError::Timeout(budget);
            tracing::warn!(probe = %name, error = %e, "Probe failed");
            ProbeStatus::Error
        }
    };

    metrics::record_probe(&name, status, started.elapsed());

    ProbeResult { name, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticProbe {
        name: &'static str,
        status: ProbeStatus,
    }

    #[async_trait]
    impl DependencyProbe for StaticProbe {
        fn name(&self) -> &str {
            self.name
        }

        async fn check(&self) -> Result<(), ProbeError> {
            match self.status {
                ProbeStatus::Ok => Ok(()),
                ProbeStatus::Error => Err(ProbeError::Transport("simulated".into())),
            }
        }
    }

    fn aggregator(probes: Vec<StaticProbe>) -> HealthAggregator {
        let mut registry = ProbeRegistry::new();
        for probe in probes {
            registry = registry.with_probe(probe);
        }
        HealthAggregator::new(Arc::new(registry), Duration::from_millis(500))
    }

    #[tokio::test]
    async fn all_ok_yields_ok() {
        let report = aggregator(vec![
            StaticProbe { name: "a", status: ProbeStatus::Ok },
            StaticProbe { name: "b", status: ProbeStatus::Ok },
        ])
        .check_all()
        .await;

        assert!(report.is_healthy());
        assert_eq!(report.services.len(), 2);
    }

    #[tokio::test]
    async fn single_error_dominates() {
        let report = aggregator(vec![
            StaticProbe { name: "a", status: ProbeStatus::Ok },
            StaticProbe { name: "b", status: ProbeStatus::Error },
            StaticProbe { name: "c", status: ProbeStatus::Ok },
        ])
        .check_all()
        .await;

        assert_eq!(report.status, ProbeStatus::Error);
        assert_eq!(report.services["a"], ProbeStatus::Ok);
        assert_eq!(report.services["b"], ProbeStatus::Error);
        assert_eq!(report.services["c"], ProbeStatus::Ok);
    }

    #[tokio::test]
    async fn empty_registry_is_healthy() {
        let report = aggregator(vec![]).check_all().await;
        assert!(report.is_healthy());
        assert!(report.services.is_empty());
    }

    #[tokio::test]
    async fn check_single_unknown_is_none() {
        let agg = aggregator(vec![StaticProbe { name: "a", status: ProbeStatus::Ok }]);
        assert!(agg.check_single("nope").await.is_none());

        let result = agg.check_single("a").await.unwrap();
        assert_eq!(result.status, ProbeStatus::Ok);
    }
}
