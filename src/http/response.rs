//! Response construction helpers.
//!
//! The samples only ever answer 200 with a fixed content type, so these
//! helpers take the body and nothing else.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

const TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain; charset=utf-8");
const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// 200 with a `text/plain` body.
pub fn plain_text(body: impl Into<Body>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        body.into(),
    )
        .into_response()
}

/// 200 with a pre-rendered `application/json` body.
pub fn json_text(body: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, APPLICATION_JSON)],
        body,
    )
        .into_response()
}
