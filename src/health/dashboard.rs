//! Dashboard probe: bounded GET against the login path.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::DashboardConfig;
use crate::health::probe::{DependencyProbe, ProbeError};

/// Probes the monitoring dashboard by fetching its login page.
pub struct DashboardProbe {
    client: reqwest::Client,
    login_url: String,
}

impl DashboardProbe {
    pub fn new(config: &DashboardConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            login_url: format!("{}/login", config.url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl DependencyProbe for DashboardProbe {
    fn name(&self) -> &str {
        "grafana"
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(&self.login_url)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(ProbeError::Unhealthy(format!("HTTP {}", response.status())));
        }

        Ok(())
    }
}
