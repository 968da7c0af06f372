//! Hot-reload sample: a single greeting on every path.

use axum::{response::Response, routing::any, Router};

use crate::http::response::plain_text;

/// Body returned on every request.
pub const GREETING: &str = "Hello hello!\n";

/// Build the hot-reload router.
pub fn router() -> Router {
    Router::new()
        .route("/", any(greet))
        .route("/{*path}", any(greet))
}

async fn greet() -> Response {
    tracing::info!("Handler called");
    plain_text(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn greets_on_every_path() {
        for uri in ["/", "/anything", "/a/b/c"] {
            let response = router()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"Hello hello!\n");
        }
    }
}
