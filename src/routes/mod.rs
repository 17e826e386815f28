//! Router assembly: HTTP endpoints, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - JSON API under `/api/v1/...`
/// - Static front-end from `./static` with index fallback
/// - CORS (allow any origin/method/headers); adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/couplet", post(http::http_post_couplet))
        .route("/api/v1/samples", get(http::http_get_samples))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::CoupletMatcher;
    use crate::seeds::seed_couplets;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let matcher = CoupletMatcher::new(seed_couplets()).unwrap();
        build_router(Arc::new(AppState::from_parts(matcher, None, None)))
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_couplet(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/couplet")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_remote_state() {
        let res = app()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let v = json_body(res).await;
        assert_eq!(v["ok"], true);
        assert_eq!(v["remote_enabled"], false);
    }

    #[tokio::test]
    async fn couplet_endpoint_serves_local_match() {
        let res = app()
            .oneshot(post_couplet(r#"{"scenario":"I'm dealing with heartbreak"}"#))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let v = json_body(res).await;
        assert_eq!(v["theme"], "Love's Pain");
        assert_eq!(v["source"], "local_match");
        assert!(v["hindi"].as_str().unwrap().contains('\n'));
        assert!(v.get("keywords").is_none());
    }

    #[tokio::test]
    async fn missing_or_blank_scenario_is_rejected() {
        for body in [r#"{}"#, r#"{"scenario":"   "}"#] {
            let res = app().oneshot(post_couplet(body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert_eq!(json_body(res).await["error"], "Missing scenario");
        }
    }

    #[tokio::test]
    async fn invalid_json_is_a_client_error() {
        let res = app().oneshot(post_couplet("{not json")).await.unwrap();
        assert!(res.status().is_client_error());
    }

    #[tokio::test]
    async fn samples_are_listed() {
        let res = app()
            .oneshot(Request::get("/api/v1/samples").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let v = json_body(res).await;
        assert_eq!(v["scenarios"].as_array().unwrap().len(), 8);
    }
}
