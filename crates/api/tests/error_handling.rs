//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use apiflow_api::error::AppError;
use apiflow_api::router::handle_panic;
use apiflow_core::error::{CoreError, SimulatedFailure};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Workflow",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Workflow with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("unknown difficulty 'expert'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "unknown difficulty 'expert'");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict(
        "cannot move workflow from draft to error".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Simulated upstream failures keep their user-facing message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simulated_failures_return_502_with_specific_codes() {
    let cases = [
        (
            SimulatedFailure::NetworkTimeout,
            "NETWORK_TIMEOUT",
            "API request failed: Network timeout",
        ),
        (
            SimulatedFailure::MissingCredentials,
            "MISSING_CREDENTIALS",
            "Deployment failed: Missing API credentials",
        ),
        (
            SimulatedFailure::ExecutionTimeout,
            "EXECUTION_FAILED",
            "Workflow execution failed: API timeout in node 2",
        ),
    ];

    for (failure, code, message) in cases {
        let (status, json) = error_to_response(CoreError::from(failure).into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["code"], code);
        assert_eq!(json["error"], message);
    }
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("lock poisoned at store.rs:88".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_keeps_its_message() {
    let (status, json) =
        error_to_response(AppError::BadRequest("Failed to parse the request body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Failed to parse the request body");
}

#[tokio::test]
async fn caught_panics_become_sanitized_internal_errors() {
    let payloads: [Box<dyn std::any::Any + Send>; 3] = [
        Box::new("index out of bounds"),
        Box::new(String::from("seed table corrupt")),
        Box::new(42_u8),
    ];
    for payload in payloads {
        let response = handle_panic(payload);
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}
