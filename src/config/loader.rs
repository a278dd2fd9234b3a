//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after parsing and before validation,
/// so a deployment can ship a minimal file and inject credentials via env.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build a configuration without a file: defaults plus environment overrides.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply the deployment environment contract on top of the parsed config.
///
/// Variable names match the original deployment (MYSQL_*, REDIS_*,
/// GRAFANA_URL, PORT); unset or malformed values leave the config untouched.
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(host) = env::var("MYSQL_HOST") {
        config.database.host = host;
    }
    if let Some(port) = env_parse::<u16>("MYSQL_PORT") {
        config.database.port = port;
    }
    if let Ok(user) = env::var("MYSQL_USER") {
        config.database.user = user;
    }
    if let Ok(password) = env::var("MYSQL_ROOT_PASSWORD") {
        config.database.password = password;
    }
    if let Ok(database) = env::var("MYSQL_DATABASE") {
        config.database.database = database;
    }
    if let Ok(host) = env::var("REDIS_HOST") {
        config.cache.host = host;
    }
    if let Some(port) = env_parse::<u16>("REDIS_PORT") {
        config.cache.port = port;
    }
    if let Ok(url) = env::var("GRAFANA_URL") {
        config.dashboard.url = url;
    }
    if let Some(port) = env_parse::<u16>("PORT") {
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    match env::var(name) {
        Ok(value) => match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(var = name, value = %value, "Ignoring unparseable env override");
                None
            }
        },
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            host = "db.internal"
            password = "secret"

            [[external_api]]
            name = "billing"
            url = "http://billing.internal/health"

            [[external_api]]
            name = "payments"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.connection_limit, 5);
        assert_eq!(config.probes.timeout_ms, 5000);
        assert_eq!(config.external_apis.len(), 2);
        assert_eq!(config.external_apis[0].name, "billing");
        assert!(config.external_apis[1].url.is_none());
    }

    #[test]
    fn empty_input_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.cache.port, 6379);
        assert!(config.external_apis.is_empty());
        assert!(config.observability.metrics_enabled);
    }
}
