//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the healthcheck service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Database connection pool settings.
    pub database: DatabaseConfig,

    /// Cache server settings.
    pub cache: CacheConfig,

    /// Dashboard endpoint settings.
    pub dashboard: DashboardConfig,

    /// External HTTP APIs to probe, one entry per dependency.
    #[serde(rename = "external_api")]
    pub external_apis: Vec<ExternalApiConfig>,

    /// Probe execution settings.
    pub probes: ProbeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database server hostname.
    pub host: String,

    /// Database server port.
    pub port: u16,

    /// Username for authentication.
    pub user: String,

    /// Password for authentication.
    pub password: String,

    /// Database name to connect to.
    pub database: String,

    /// Enable TLS for database connections.
    pub tls: bool,

    /// Maximum number of pooled connections.
    pub connection_limit: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "healthcheck".to_string(),
            tls: false,
            connection_limit: 5,
        }
    }
}

/// Cache server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache server hostname.
    pub host: String,

    /// Cache server port.
    pub port: u16,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
        }
    }
}

/// Dashboard endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the dashboard; the probe issues GET <url>/login.
    pub url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
        }
    }
}

/// One external HTTP API dependency.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExternalApiConfig {
    /// Unique probe name, used as the key in the aggregate services map.
    pub name: String,

    /// Endpoint URL. When absent the probe reports error without attempting
    /// a request.
    #[serde(default)]
    pub url: Option<String>,
}

/// Probe execution configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-probe time budget in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus /metrics endpoint.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
