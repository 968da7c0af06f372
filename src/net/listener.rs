//! TCP listener setup.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::validation::validate_listener;
use crate::config::{ConfigError, ListenerConfig};
use crate::error::ServiceError;

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServiceError> {
    let addr: SocketAddr =
        validate_listener(config).map_err(|e| ConfigError::Validation(vec![e]))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ServiceError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}
