//! Minimal app: an environment-aware greeting plus a health check.

use std::sync::Arc;

use axum::{extract::State, response::Response, routing::any, Router};

use crate::config::MinimalAppConfig;
use crate::http::response::plain_text;

/// Route answered with a bare `OK`.
pub const HEALTH_ROUTE: &str = "/health";

#[derive(Debug, Clone)]
struct MinimalState {
    environment: Arc<str>,
}

/// Build the minimal app router. `/health` is exact; every other path greets.
pub fn router(config: &MinimalAppConfig) -> Router {
    let state = MinimalState {
        environment: Arc::from(config.environment.as_str()),
    };

    Router::new()
        .route(HEALTH_ROUTE, any(health))
        .route("/", any(greet))
        .route("/{*path}", any(greet))
        .with_state(state)
}

/// The greeting body for `environment`.
pub fn greeting(environment: &str) -> String {
    format!("Hello from DevSpace! Environment: {environment}\n")
}

async fn greet(State(state): State<MinimalState>) -> Response {
    tracing::info!(environment = %state.environment, "Handling request");
    plain_text(greeting(&state.environment))
}

async fn health() -> Response {
    plain_text("OK")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_minimal_config_from;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn app_with(vars: &[(&str, &str)]) -> Router {
        let config = load_minimal_config_from(
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap();
        router(&config)
    }

    #[tokio::test]
    async fn unset_environment_reports_development() {
        let (status, body) = get(app_with(&[]), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello from DevSpace! Environment: development\n");
    }

    #[tokio::test]
    async fn staging_environment_is_reported() {
        let (_, body) = get(app_with(&[("ENVIRONMENT", "staging")]), "/").await;
        assert!(body.contains("staging"));
        assert!(!body.contains("development"));
    }

    #[tokio::test]
    async fn unknown_paths_greet() {
        let (status, body) = get(app_with(&[]), "/some/page").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, greeting("development"));
    }

    #[tokio::test]
    async fn health_is_ok_regardless_of_environment() {
        for vars in [&[][..], &[("ENVIRONMENT", "production")][..]] {
            let (status, body) = get(app_with(vars), "/health").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "OK");
        }
    }

    #[tokio::test]
    async fn greeting_is_stable_across_requests() {
        let app = app_with(&[("ENVIRONMENT", "qa")]);
        let (_, first) = get(app.clone(), "/").await;
        let (_, second) = get(app, "/").await;
        assert_eq!(first, second);
    }
}
