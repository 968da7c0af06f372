//! Configuration validation.
//!
//! Serde and envy handle the syntactic side; the checks here are semantic.
//! Every validator returns all problems it finds, not just the first.

use std::net::SocketAddr;

use axum::http::Uri;
use thiserror::Error;

use crate::config::schema::{FrontendConfig, ListenerConfig, MinimalAppConfig};

/// A single semantic problem with a configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address {value:?}: {reason}")]
    BindAddress { value: String, reason: String },

    #[error("invalid PORT {value:?}: {reason}")]
    Port { value: String, reason: String },

    #[error("invalid upstream URL {value:?}: {reason}")]
    UpstreamUrl { value: String, reason: String },

    #[error("upstream timeout must be at least one second")]
    ZeroTimeout,
}

/// Parse the raw `PORT` value.
pub fn parse_port(raw: &str) -> Result<u16, ValidationError> {
    raw.trim().parse::<u16>().map_err(|e| ValidationError::Port {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Check that the listener address is a concrete socket address.
pub fn validate_listener(config: &ListenerConfig) -> Result<SocketAddr, ValidationError> {
    config
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|e| ValidationError::BindAddress {
            value: config.bind_address.clone(),
            reason: e.to_string(),
        })
}

/// Parse the upstream URL into a request URI.
///
/// Only plain `http` is accepted since the relay client carries no TLS stack.
pub fn parse_upstream_url(raw: &str) -> Result<Uri, ValidationError> {
    let invalid = |reason: String| ValidationError::UpstreamUrl {
        value: raw.to_string(),
        reason,
    };

    let url = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    url.as_str()
        .parse::<Uri>()
        .map_err(|e| invalid(e.to_string()))
}

/// Validate a frontend config, collecting every error.
pub fn validate_frontend(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_listener(&config.listener) {
        errors.push(e);
    }
    if let Err(e) = parse_upstream_url(&config.upstream_url) {
        errors.push(e);
    }
    if config.upstream_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a minimal app config.
pub fn validate_minimal(config: &MinimalAppConfig) -> Result<(), Vec<ValidationError>> {
    validate_listener(&config.listener)
        .map(|_| ())
        .map_err(|e| vec![e])
}
