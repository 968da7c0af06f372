//! DevSpace sample services.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client                Frontend (:3000)                   API (:8080)
//!     ──────  GET /  ──▶  ┌──────────────────┐  GET /api  ──▶ ┌────────────┐
//!                         │ relay handler    │                │ fixed JSON │
//!     ◀── 200 text ────── │ upstream client  │ ◀── 200 JSON ─ │            │
//!                         └──────────────────┘                └────────────┘
//!
//!     minimal (:$PORT)     GET /        → greeting with $ENVIRONMENT
//!                          GET /health  → OK
//!     hot-reload (:9090)   GET /        → Hello hello!
//! ```

use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use devspace_samples::config::schema::{API_PORT, DEFAULT_SHUTDOWN_GRACE_SECS, FRONTEND_PORT};
use devspace_samples::config::{
    load_minimal_config, ApiConfig, FrontendConfig, HotReloadConfig, ListenerConfig,
    DEFAULT_UPSTREAM_URL,
};
use devspace_samples::error::Result;
use devspace_samples::lifecycle::{self, signals, Shutdown};
use devspace_samples::observability::logging::{init_logging, LogFormat};
use devspace_samples::observability::metrics;
use devspace_samples::Service;

#[derive(Parser, Debug)]
#[command(name = "devspace-samples")]
#[command(about = "Sample HTTP services for DevSpace deployments")]
#[command(version)]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Serve Prometheus metrics on this address.
    #[arg(long, global = true)]
    metrics_address: Option<SocketAddr>,

    /// Seconds to let in-flight requests finish after SIGINT/SIGTERM.
    #[arg(long, default_value_t = DEFAULT_SHUTDOWN_GRACE_SECS, global = true)]
    shutdown_grace_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the fixed JSON message on /api.
    Api {
        #[arg(short, long, default_value_t = API_PORT)]
        port: u16,
    },

    /// Relay the API's answer on every request.
    Frontend {
        #[arg(short, long, default_value_t = FRONTEND_PORT)]
        port: u16,

        /// Upstream fetched on every request.
        #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
        upstream_url: String,

        /// Give up on the upstream after this many seconds. Waits forever when unset.
        #[arg(long)]
        upstream_timeout_secs: Option<u64>,
    },

    /// Greeting and /health, configured by PORT and ENVIRONMENT.
    Minimal,

    /// Fixed greeting on port 9090.
    HotReload,
}

impl Command {
    fn into_service(self) -> Result<Service> {
        let service = match self {
            Command::Api { port } => Service::Api(ApiConfig {
                listener: ListenerConfig::on_port(port),
            }),
            Command::Frontend {
                port,
                upstream_url,
                upstream_timeout_secs,
            } => Service::Frontend(FrontendConfig {
                listener: ListenerConfig::on_port(port),
                upstream_url,
                upstream_timeout_secs,
            }),
            Command::Minimal => Service::Minimal(load_minimal_config()?),
            Command::HotReload => Service::HotReload(HotReloadConfig::default()),
        };
        Ok(service)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "devspace-samples starting");

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(addr) = cli.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let grace = Duration::from_secs(cli.shutdown_grace_secs);
    let service = cli.command.into_service()?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    lifecycle::launch(service, server_shutdown, grace).await
}
