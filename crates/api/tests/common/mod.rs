#![allow(dead_code)]

use std::sync::Arc;

use apiflow_api::config::{LogFormat, ServerConfig};
use apiflow_api::router::build_app_router;
use apiflow_api::state::AppState;
use apiflow_core::latency::LatencyProfile;
use apiflow_core::outcome::{OutcomeSource, ScriptedOutcomes};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Sample that passes every simulated success roll.
pub const ALWAYS_SUCCEED: f64 = 0.5;
/// Sample that fails every simulated success roll.
pub const ALWAYS_FAIL: f64 = 0.05;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no artificial latency.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        latency_scale: 0.0,
        outcome_seed: None,
        log_format: LogFormat::Pretty,
    }
}

/// Fresh seeded state whose random draws come from `outcomes`.
pub fn test_state(outcomes: impl OutcomeSource + 'static) -> AppState {
    AppState {
        pool: apiflow_db::create_seeded_pool().expect("embedded seed must load"),
        config: Arc::new(test_config()),
        outcomes: Arc::new(outcomes),
        latency: LatencyProfile::instant(),
    }
}

/// State where every simulated operation succeeds.
pub fn succeeding_state() -> AppState {
    test_state(ScriptedOutcomes::constant(ALWAYS_SUCCEED))
}

/// State where every simulated operation fails.
pub fn failing_state() -> AppState {
    test_state(ScriptedOutcomes::constant(ALWAYS_FAIL))
}

/// Build the full application router with all middleware layers over
/// `state`, exactly as `main.rs` does.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, json).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, json).await
}

/// POST a raw body labelled as JSON, for exercising malformed payloads.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
