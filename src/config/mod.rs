//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PORT, ENVIRONMENT) / command-line flags
//!     → loader.rs (envy deserialization, empty means unset)
//!     → validation.rs (semantic checks, all errors collected)
//!     → per-service config (immutable)
//!     → passed into handler construction
//! ```
//!
//! # Design Decisions
//! - Handlers never read the environment themselves
//! - All fields have defaults matching the deployment manifests

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_minimal_config, load_minimal_config_from, ConfigError};
pub use schema::{
    ApiConfig, FrontendConfig, HotReloadConfig, ListenerConfig, MinimalAppConfig,
    DEFAULT_UPSTREAM_URL,
};
pub use validation::ValidationError;
