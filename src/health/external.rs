//! External API probe: bounded GET plus a payload status check.

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::config::ExternalApiConfig;
use crate::health::probe::{DependencyProbe, ProbeError};

/// Probes one configured external HTTP API.
///
/// Healthy means HTTP 200 with a JSON payload whose top-level `status`
/// field is `"ok"`. An entry configured without a URL reports error
/// immediately, without any network attempt.
pub struct ExternalApiProbe {
    name: String,
    url: Option<Url>,
    client: reqwest::Client,
}

impl ExternalApiProbe {
    pub fn new(config: &ExternalApiConfig, client: reqwest::Client) -> Self {
        // Validation already rejected malformed URLs; a missing one stays
        // missing and is classified at probe time.
        let url = config.url.as_deref().and_then(|u| Url::parse(u).ok());
        Self {
            name: config.name.clone(),
            url,
            client,
        }
    }
}

#[async_trait]
impl DependencyProbe for ExternalApiProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let url = self.url.as_ref().ok_or(ProbeError::ConfigMissing("url"))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(ProbeError::Unhealthy(format!("HTTP {}", response.status())));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        match payload.get("status").and_then(|v| v.as_str()) {
            Some("ok") => Ok(()),
            Some(other) => Err(ProbeError::Unhealthy(format!("status = {:?}", other))),
            None => Err(ProbeError::Unhealthy("payload has no status field".to_string())),
        }
    }
}
