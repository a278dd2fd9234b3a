//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check probe-name uniqueness against the built-in dependency names
//! - Validate value ranges (timeouts > 0, connection limit > 0)
//! - Check that configured URLs and addresses actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::AppConfig;

/// Probe names claimed by the built-in dependency probes. External API
/// entries must not reuse them.
pub const RESERVED_PROBE_NAMES: &[&str] = &["mysql", "redis", "grafana"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidDashboardUrl(String),
    InvalidExternalUrl { name: String, url: String },
    EmptyProbeName,
    ReservedProbeName(String),
    DuplicateProbeName(String),
    ZeroProbeTimeout,
    ZeroConnectionLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a valid socket address: {}", addr)
            }
            ValidationError::InvalidDashboardUrl(url) => {
                write!(f, "dashboard.url is not a valid URL: {}", url)
            }
            ValidationError::InvalidExternalUrl { name, url } => {
                write!(f, "external_api '{}' has an invalid URL: {}", name, url)
            }
            ValidationError::EmptyProbeName => write!(f, "external_api entry has an empty name"),
            ValidationError::ReservedProbeName(name) => {
                write!(f, "external_api name '{}' is reserved for a built-in probe", name)
            }
            ValidationError::DuplicateProbeName(name) => {
                write!(f, "external_api name '{}' is used more than once", name)
            }
            ValidationError::ZeroProbeTimeout => write!(f, "probes.timeout_ms must be > 0"),
            ValidationError::ZeroConnectionLimit => {
                write!(f, "database.connection_limit must be > 0")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every semantic error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if Url::parse(&config.dashboard.url).is_err() {
        errors.push(ValidationError::InvalidDashboardUrl(config.dashboard.url.clone()));
    }

    if config.probes.timeout_ms == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }

    if config.database.connection_limit == 0 {
        errors.push(ValidationError::ZeroConnectionLimit);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for api in &config.external_apis {
        if api.name.is_empty() {
            errors.push(ValidationError::EmptyProbeName);
            continue;
        }
        if RESERVED_PROBE_NAMES.contains(&api.name.as_str()) {
            errors.push(ValidationError::ReservedProbeName(api.name.clone()));
        }
        if !seen.insert(api.name.as_str()) {
            errors.push(ValidationError::DuplicateProbeName(api.name.clone()));
        }
        if let Some(url) = &api.url {
            if Url::parse(url).is_err() {
                errors.push(ValidationError::InvalidExternalUrl {
                    name: api.name.clone(),
                    url: url.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ExternalApiConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn rejects_duplicate_and_reserved_names() {
        let mut config = AppConfig::default();
        config.external_apis = vec![
            ExternalApiConfig {
                name: "redis".into(),
                url: None,
            },
            ExternalApiConfig {
                name: "billing".into(),
                url: None,
            },
            ExternalApiConfig {
                name: "billing".into(),
                url: None,
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ReservedProbeName("redis".into())));
        assert!(errors.contains(&ValidationError::DuplicateProbeName("billing".into())));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.probes.timeout_ms = 0;
        config.database.connection_limit = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_malformed_external_url() {
        let mut config = AppConfig::default();
        config.external_apis = vec![ExternalApiConfig {
            name: "billing".into(),
            url: Some("::not a url::".into()),
        }];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidExternalUrl { .. }));
    }
}
