//! Configuration loading from the process environment.

use serde::Deserialize;
use thiserror::Error;

use crate::config::schema::{
    ListenerConfig, MinimalAppConfig, DEFAULT_ENVIRONMENT, DEFAULT_MINIMAL_PORT,
};
use crate::config::validation::{parse_port, validate_minimal, ValidationError};

/// Error type for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment error: {0}")]
    Env(#[from] envy::Error),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw variables read by the minimal app. Empty values count as unset.
#[derive(Debug, Default, Deserialize)]
struct MinimalEnv {
    port: Option<String>,
    environment: Option<String>,
}

/// Load the minimal app configuration from `PORT` and `ENVIRONMENT`.
pub fn load_minimal_config() -> Result<MinimalAppConfig, ConfigError> {
    let env = envy::from_env::<MinimalEnv>()?;
    build_minimal(env)
}

/// Load the minimal app configuration from explicit key/value pairs.
pub fn load_minimal_config_from<I>(vars: I) -> Result<MinimalAppConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env = envy::from_iter::<_, MinimalEnv>(vars)?;
    build_minimal(env)
}

fn build_minimal(env: MinimalEnv) -> Result<MinimalAppConfig, ConfigError> {
    let port = match non_empty(env.port) {
        Some(raw) => parse_port(&raw).map_err(|e| ConfigError::Validation(vec![e]))?,
        None => DEFAULT_MINIMAL_PORT,
    };
    let environment = non_empty(env.environment).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

    let config = MinimalAppConfig {
        listener: ListenerConfig::on_port(port),
        environment,
    };
    validate_minimal(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unset_falls_back_to_defaults() {
        let config = load_minimal_config_from(vars(&[])).unwrap();
        assert_eq!(config, MinimalAppConfig::default());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load_minimal_config_from(vars(&[("PORT", ""), ("ENVIRONMENT", "")])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:9090");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn reads_port_and_environment() {
        let config =
            load_minimal_config_from(vars(&[("PORT", "8181"), ("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8181");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = load_minimal_config_from(vars(&[("HOME", "/root"), ("ENVIRONMENT", "qa")])).unwrap();
        assert_eq!(config.environment, "qa");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load_minimal_config_from(vars(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("invalid PORT"));
    }
}
