//! Configuration schema definitions.
//!
//! One config type per sample service. Defaults mirror the ports and
//! addresses the samples are deployed with.

use serde::{Deserialize, Serialize};

/// Port the API stub listens on.
pub const API_PORT: u16 = 8080;

/// Port the frontend relay listens on.
pub const FRONTEND_PORT: u16 = 3000;

/// Port the hot-reload sample listens on.
pub const HOT_RELOAD_PORT: u16 = 9090;

/// Port the minimal app falls back to when `PORT` is unset.
pub const DEFAULT_MINIMAL_PORT: u16 = 9090;

/// Environment name the minimal app falls back to when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Seconds in-flight requests may keep running once shutdown starts.
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

/// Upstream the frontend calls. Resolved through the deployment's service DNS.
pub const DEFAULT_UPSTREAM_URL: &str = "http://api:8080/api";

/// Listener configuration. Each service picks its own port, so there is
/// no default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Listen on every interface at `port`.
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_address: format!("0.0.0.0:{port}"),
        }
    }
}

/// API stub configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub listener: ListenerConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::on_port(API_PORT),
        }
    }
}

/// Frontend relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub listener: ListenerConfig,

    /// URL fetched on every inbound request.
    pub upstream_url: String,

    /// Deadline for the whole upstream exchange. `None` waits forever.
    pub upstream_timeout_secs: Option<u64>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::on_port(FRONTEND_PORT),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_secs: None,
        }
    }
}

/// Minimal app configuration, normally read from `PORT` and `ENVIRONMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MinimalAppConfig {
    pub listener: ListenerConfig,

    /// Name reported by the greeting route.
    pub environment: String,
}

impl Default for MinimalAppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::on_port(DEFAULT_MINIMAL_PORT),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Hot-reload sample configuration. The port is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HotReloadConfig {
    pub listener: ListenerConfig,
}

impl Default for HotReloadConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::on_port(HOT_RELOAD_PORT),
        }
    }
}
