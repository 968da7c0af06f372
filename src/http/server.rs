//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap a service's routes with the shared middleware stack
//!   (request ID, tracing span, request metrics)
//! - Serve on an already-bound listener
//! - Drain in-flight requests when the shutdown signal fires, for at most
//!   the configured grace period

use std::future::IntoFuture;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::schema::DEFAULT_SHUTDOWN_GRACE_SECS;
use crate::http::request::UuidRequestId;
use crate::observability::{metrics, spans};

/// HTTP server for one sample service.
pub struct HttpServer {
    name: &'static str,
    router: Router,
    shutdown_grace: Duration,
}

impl HttpServer {
    /// Create a server named `name` (used in logs and metrics) serving `routes`.
    pub fn new(name: &'static str, routes: Router) -> Self {
        let router = Self::build_router(name, routes);
        Self {
            name,
            router,
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }

    /// How long in-flight requests may keep running after shutdown fires.
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Layer order, outermost first: set request ID, trace, propagate
    /// request ID onto the response, record metrics.
    fn build_router(name: &'static str, routes: Router) -> Router {
        routes
            .layer(middleware::from_fn_with_state(name, track_requests))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(spans::request_span::<Body>))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Service name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. Requests still running when the grace period ends
    /// are abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(service = self.name, address = %addr, "HTTP server starting");

        let (draining_tx, draining_rx) = oneshot::channel();
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                let _ = draining_tx.send(());
            })
            .into_future();
        tokio::pin!(serve);

        tokio::select! {
            result = &mut serve => result?,
            Ok(()) = draining_rx => {
                tracing::info!(
                    service = self.name,
                    grace_secs = self.shutdown_grace.as_secs_f64(),
                    "Draining in-flight requests"
                );
                match tokio::time::timeout(self.shutdown_grace, &mut serve).await {
                    Ok(result) => result?,
                    Err(_) => tracing::warn!(
                        service = self.name,
                        "Grace period expired, abandoning in-flight requests"
                    ),
                }
            }
        }

        tracing::info!(service = self.name, "HTTP server stopped");
        Ok(())
    }
}

async fn track_requests(
    State(service): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();

    let response = next.run(request).await;

    metrics::record_request(service, method.as_str(), response.status().as_u16(), start);
    response
}
