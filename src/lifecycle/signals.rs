//! OS signal handling.
//!
//! SIGINT and SIGTERM both request a graceful shutdown. The dev
//! environment restarts containers with SIGTERM, so both matter. A second
//! signal while draining forces the process to exit.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

/// Exit code used when a second signal cuts the drain short.
pub const FORCED_EXIT_CODE: i32 = 130;

/// Trigger `shutdown` when the process is asked to stop, and exit
/// immediately on the next signal.
pub fn spawn_signal_listener(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        shutdown_signal().await;
        let notified = shutdown.trigger();
        tracing::debug!(notified, "Shutdown broadcast");

        shutdown_signal().await;
        tracing::warn!("Second shutdown signal received, forcing exit");
        std::process::exit(FORCED_EXIT_CODE);
    })
}
