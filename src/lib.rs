//! DevSpace sample services.
//!
//! Minimal HTTP servers used to exercise deployment and hot-reload
//! tooling: an API stub, a frontend that relays the API's answer, a
//! minimal environment-aware app, and a hot-reload greeter.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod services;
pub mod upstream;

pub use config::{ApiConfig, FrontendConfig, HotReloadConfig, MinimalAppConfig};
pub use error::{ServiceError, UpstreamError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use services::Service;
pub use upstream::UpstreamClient;
