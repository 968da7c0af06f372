//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every sample service produces:
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (counters, gauges, histograms)
//!     → spans.rs (one span per request, keyed by x-request-id)
//!
//! Consumers:
//!     → stdout (collected by the dev environment)
//!     → optional Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the frontend into the API call
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
pub mod spans;
