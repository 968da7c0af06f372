//! The sample services.
//!
//! # Services
//! ```text
//! api         /api → {"message": "Hello from API!"}
//! frontend    /*   → GET upstream, "Frontend calling API: <body>"
//! minimal     /*   → "Hello from DevSpace! Environment: <ENV>\n", /health → OK
//! hot-reload  /*   → "Hello hello!\n"
//! ```
//!
//! Each service is a plain axum `Router`; `HttpServer` adds the shared
//! middleware and serves it.

pub mod api;
pub mod frontend;
pub mod hot_reload;
pub mod minimal;

use axum::Router;

use crate::config::validation::validate_frontend;
use crate::config::{
    ApiConfig, ConfigError, FrontendConfig, HotReloadConfig, ListenerConfig, MinimalAppConfig,
};
use crate::upstream::UpstreamClient;

/// A sample service together with its configuration.
#[derive(Debug, Clone)]
pub enum Service {
    Api(ApiConfig),
    Frontend(FrontendConfig),
    Minimal(MinimalAppConfig),
    HotReload(HotReloadConfig),
}

impl Service {
    /// Name used in logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Service::Api(_) => "api",
            Service::Frontend(_) => "frontend",
            Service::Minimal(_) => "minimal",
            Service::HotReload(_) => "hot-reload",
        }
    }

    pub fn listener(&self) -> &ListenerConfig {
        match self {
            Service::Api(c) => &c.listener,
            Service::Frontend(c) => &c.listener,
            Service::Minimal(c) => &c.listener,
            Service::HotReload(c) => &c.listener,
        }
    }

    /// Validate the configuration and build the service's routes.
    pub fn router(&self) -> Result<Router, ConfigError> {
        let router = match self {
            Service::Api(_) => api::router(),
            Service::Frontend(c) => {
                validate_frontend(c).map_err(ConfigError::Validation)?;
                frontend::router(UpstreamClient::from_config(c)?)
            }
            Service::Minimal(c) => minimal::router(c),
            Service::HotReload(_) => hot_reload::router(),
        };
        Ok(router)
    }
}
