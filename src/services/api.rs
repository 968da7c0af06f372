//! API stub: one route, one fixed JSON payload.

use axum::{response::Response, routing::any, Router};

use crate::http::response::json_text;

/// Route served by the stub.
pub const API_ROUTE: &str = "/api";

/// Payload returned on every call, byte for byte.
pub const API_MESSAGE: &str = r#"{"message": "Hello from API!"}"#;

/// Build the API router. Every other path is a 404.
pub fn router() -> Router {
    Router::new().route(API_ROUTE, any(message))
}

async fn message() -> Response {
    json_text(API_MESSAGE)
}
