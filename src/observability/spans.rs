//! Per-request spans.

use axum::http::Request;
use tracing::Span;

use crate::http::request::request_id_of;

/// Build the span `TraceLayer` opens for each request.
///
/// The request ID is set by an outer layer, so it is always present here
/// unless the client sent a non-ASCII value.
pub fn request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id_of(request).unwrap_or("unknown"),
    )
}
