//! Handlers for the test history and its statistics.

use apiflow_db::models::test_history::{CreateTestRecord, RecentParams, TestHistoryParams};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;
use crate::services::TestHistoryService;
use crate::state::AppState;

/// GET /api/v1/test-history
pub async fn list_history(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TestHistoryParams>,
) -> AppResult<impl IntoResponse> {
    let records = TestHistoryService::filter(&state, &params).await?;

    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/test-history
pub async fn create_record(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTestRecord>,
) -> AppResult<impl IntoResponse> {
    let record = TestHistoryService::create(&state, input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/test-history/recent
pub async fn recent_history(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let records = TestHistoryService::recent(&state, params.limit).await?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/test-history/stats
pub async fn history_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = TestHistoryService::stats(&state).await;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/test-history/marketing
pub async fn marketing_metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let metrics = TestHistoryService::marketing_metrics(&state).await;

    Ok(Json(DataResponse { data: metrics }))
}
