//! Frontend relay: calls the API on every request and relays its body.
//!
//! The response is always 200. A failure to reach or read the upstream is
//! reported in the body as `Error calling API: <err>` and goes no further.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
    routing::any,
    Router,
};

use crate::error::UpstreamError;
use crate::http::{response::plain_text, X_REQUEST_ID};
use crate::upstream::UpstreamClient;

/// Prefix of a successful relay body.
pub const RELAY_PREFIX: &str = "Frontend calling API: ";

/// Prefix of a failed relay body.
pub const ERROR_PREFIX: &str = "Error calling API: ";

#[derive(Debug, Clone)]
struct FrontendState {
    upstream: Arc<UpstreamClient>,
}

/// Build the frontend router around `upstream`. Every path relays.
pub fn router(upstream: UpstreamClient) -> Router {
    let state = FrontendState {
        upstream: Arc::new(upstream),
    };

    Router::new()
        .route("/", any(relay))
        .route("/{*path}", any(relay))
        .with_state(state)
}

/// Render the relay body for an upstream outcome.
pub fn compose(outcome: &Result<Bytes, UpstreamError>) -> Vec<u8> {
    match outcome {
        Ok(body) => {
            let mut out = Vec::with_capacity(RELAY_PREFIX.len() + body.len());
            out.extend_from_slice(RELAY_PREFIX.as_bytes());
            out.extend_from_slice(body);
            out
        }
        Err(e) => format!("{ERROR_PREFIX}{e}").into_bytes(),
    }
}

async fn relay(State(state): State<FrontendState>, headers: HeaderMap) -> Response {
    let request_id = headers.get(&X_REQUEST_ID);

    let outcome = state.upstream.fetch(request_id).await;
    if let Err(e) = &outcome {
        tracing::warn!(
            upstream = %state.upstream.uri(),
            kind = e.kind(),
            error = %e,
            "Upstream call failed"
        );
    }

    plain_text(compose(&outcome))
}
