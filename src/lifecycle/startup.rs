//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and build the service's routes
//! - Bind the listener
//! - Serve until shutdown, bounded by a drain deadline
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Routes are built before binding, so a bad config never opens a port

use std::time::Duration;

use tokio::sync::broadcast;

use crate::error::{Result, ServiceError};
use crate::http::HttpServer;
use crate::net;
use crate::services::Service;

/// Start `service` and serve it until `shutdown` fires, then give in-flight
/// requests at most `shutdown_grace` to finish.
pub async fn launch(
    service: Service,
    shutdown: broadcast::Receiver<()>,
    shutdown_grace: Duration,
) -> Result<()> {
    let routes = service.router()?;
    let listener = net::bind(service.listener()).await?;

    tracing::info!(
        service = service.name(),
        config = ?service,
        "Configuration loaded"
    );

    HttpServer::new(service.name(), routes)
        .with_shutdown_grace(shutdown_grace)
        .run(listener, shutdown)
        .await
        .map_err(ServiceError::Serve)
}
