//! Probe registry: the fixed set of dependency probes for this process.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::db::ConnectionPool;
use crate::health::cache::CacheProbe;
use crate::health::dashboard::DashboardProbe;
use crate::health::database::DatabaseProbe;
use crate::health::external::ExternalApiProbe;
use crate::health::probe::DependencyProbe;

/// Holds the concrete probes, built once at startup from configuration.
///
/// Probe names are fixed dependency identifiers; uniqueness is enforced by
/// config validation, not guarded here.
pub struct ProbeRegistry {
    probes: Vec<Arc<dyn DependencyProbe>>,
}

impl ProbeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Register a probe.
    pub fn with_probe(mut self, probe: impl DependencyProbe + 'static) -> Self {
        self.probes.push(Arc::new(probe));
        self
    }

    /// Build the full probe set from configuration and the shared pool.
    pub fn from_config(config: &AppConfig, pool: Arc<ConnectionPool>) -> Self {
        // One HTTP client, bounded to the probe budget, shared by all
        // HTTP-based probes.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.probes.timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        let mut registry = Self::new()
            .with_probe(DatabaseProbe::new(pool))
            .with_probe(CacheProbe::new(&config.cache))
            .with_probe(DashboardProbe::new(&config.dashboard, client.clone()));

        for api in &config.external_apis {
            registry = registry.with_probe(ExternalApiProbe::new(api, client.clone()));
        }

        registry
    }

    /// All registered probes.
    pub fn probes(&self) -> &[Arc<dyn DependencyProbe>] {
        &self.probes
    }

    /// Look up one probe by name.
    pub fn find(&self, name: &str) -> Option<Arc<dyn DependencyProbe>> {
        self.probes.iter().find(|p| p.name() == name).cloned()
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the registry holds no probes.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExternalApiConfig;
    use std::collections::HashSet;

    #[test]
    fn config_built_registry_has_unique_names() {
        let mut config = AppConfig::default();
        config.external_apis = vec![
            ExternalApiConfig {
                name: "billing".into(),
                url: Some("http://billing.internal/health".into()),
            },
            ExternalApiConfig {
                name: "payments".into(),
                url: None,
            },
        ];

        let pool = Arc::new(ConnectionPool::new());
        let registry = ProbeRegistry::from_config(&config, pool);

        let names: HashSet<&str> = registry.probes().iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), registry.len());
        assert_eq!(registry.len(), 5);
        for name in ["mysql", "redis", "grafana", "billing", "payments"] {
            assert!(registry.find(name).is_some(), "missing probe {name}");
        }
    }

    #[test]
    fn find_unknown_name_is_none() {
        let pool = Arc::new(ConnectionPool::new());
        let registry = ProbeRegistry::from_config(&AppConfig::default(), pool);
        assert!(registry.find("mongo").is_none());
    }
}
