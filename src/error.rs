//! Error types shared by the sample services.

use std::time::Duration;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors raised while starting or running a sample service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The listener could not bind its address.
    #[error("listen tcp {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The metrics exporter could not be installed.
    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// The server loop failed after startup.
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}

/// Failure to reach the upstream API or to read its response.
///
/// The `Display` output is what the frontend writes after
/// `Error calling API: `, so variants render the full cause chain.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The outbound request could not be constructed.
    #[error("GET {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: axum::http::Error,
    },

    /// The connection could not be established or the request failed in flight.
    #[error("GET {url}: {reason}")]
    Connect { url: String, reason: String },

    /// The response body could not be read to completion.
    #[error("GET {url}: reading body: {reason}")]
    Read { url: String, reason: String },

    /// The configured deadline expired before the body was read.
    #[error("GET {url}: timed out after {}s", .limit.as_secs_f64())]
    Timeout { url: String, limit: Duration },
}

impl UpstreamError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Request { .. } => "request",
            UpstreamError::Connect { .. } => "connect",
            UpstreamError::Read { .. } => "read",
            UpstreamError::Timeout { .. } => "timeout",
        }
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("outer")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn error_chain_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error_chain(&err), "outer: connection refused");
    }

    #[test]
    fn timeout_renders_limit() {
        let err = UpstreamError::Timeout {
            url: "http://api:8080/api".into(),
            limit: Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "GET http://api:8080/api: timed out after 2s");
        assert_eq!(err.kind(), "timeout");
    }
}
