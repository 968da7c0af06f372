//! HTTP client for the relay's upstream call.

use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Method, Request, Uri},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::validation::parse_upstream_url;
use crate::config::{ConfigError, FrontendConfig};
use crate::error::{error_chain, UpstreamError};
use crate::http::X_REQUEST_ID;
use crate::observability::metrics;
use crate::upstream::guard::{UpstreamBody, UpstreamTracker};

const USER_AGENT: &str = concat!("devspace-samples/", env!("CARGO_PKG_VERSION"));

/// Fetches one fixed upstream resource.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    uri: Uri,
    timeout: Option<Duration>,
    tracker: UpstreamTracker,
}

impl UpstreamClient {
    /// Create a client for `uri`. With `timeout` unset a call may wait forever.
    pub fn new(uri: Uri, timeout: Option<Duration>) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        match timeout {
            Some(limit) => tracing::debug!(
                upstream = %uri,
                timeout_secs = limit.as_secs_f64(),
                "Upstream client ready"
            ),
            None => tracing::debug!(upstream = %uri, "Upstream client ready, no deadline"),
        }

        Self {
            client,
            uri,
            timeout,
            tracker: UpstreamTracker::new(),
        }
    }

    /// Build a client from the frontend's configuration.
    pub fn from_config(config: &FrontendConfig) -> Result<Self, ConfigError> {
        let uri = parse_upstream_url(&config.upstream_url)
            .map_err(|e| ConfigError::Validation(vec![e]))?;
        let timeout = config.upstream_timeout_secs.map(Duration::from_secs);
        Ok(Self::new(uri, timeout))
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Tracker for bodies this client is currently reading.
    pub fn tracker(&self) -> &UpstreamTracker {
        &self.tracker
    }

    /// GET the upstream resource and read the whole body.
    ///
    /// The upstream status is not inspected. `request_id`, when given, is
    /// forwarded so both services log under the same ID.
    pub async fn fetch(&self, request_id: Option<&HeaderValue>) -> Result<Bytes, UpstreamError> {
        let start = Instant::now();

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.exchange(request_id)).await {
                Ok(result) => result,
                Err(_) => Err(UpstreamError::Timeout {
                    url: self.uri.to_string(),
                    limit,
                }),
            },
            None => self.exchange(request_id).await,
        };

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::record_upstream_call(outcome, start);
        result
    }

    async fn exchange(&self, request_id: Option<&HeaderValue>) -> Result<Bytes, UpstreamError> {
        let url = self.uri.to_string();

        let mut builder = Request::builder()
            .method(Method::GET)
            .uri(self.uri.clone())
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(id) = request_id {
            builder = builder.header(X_REQUEST_ID, id.clone());
        }
        let request = builder
            .body(Body::empty())
            .map_err(|source| UpstreamError::Request {
                url: url.clone(),
                source,
            })?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| UpstreamError::Connect {
                url: url.clone(),
                reason: error_chain(&e),
            })?;

        tracing::debug!(upstream = %url, status = %response.status(), "Upstream responded");

        let lease = self
            .tracker
            .acquire(request_id.and_then(|id| id.to_str().ok()));
        let body = UpstreamBody::new(response.into_body(), lease);
        body.read_to_end().await.map_err(|e| UpstreamError::Read {
            url,
            reason: error_chain(&e),
        })
    }
}
