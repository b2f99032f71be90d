//! Handlers for workflows and their campaign view.

use apiflow_core::types::DbId;
use apiflow_db::models::workflow::{CreateWorkflow, UpdateWorkflow};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::services::WorkflowService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/workflows
pub async fn list_workflows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let workflows = WorkflowService::list_all(&state).await;

    Ok(Json(DataResponse { data: workflows }))
}

/// POST /api/v1/workflows
///
/// New workflows start as `draft` with a zero success rate.
pub async fn create_workflow(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWorkflow>,
) -> AppResult<impl IntoResponse> {
    let workflow = WorkflowService::create(&state, input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: workflow })))
}

/// GET /api/v1/workflows/{id}
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let workflow = WorkflowService::get_by_id(&state, workflow_id).await?;

    Ok(Json(DataResponse { data: workflow }))
}

/// PUT /api/v1/workflows/{id}
///
/// Shallow merge. A status change must be an allowed transition or the
/// request is rejected with 409.
pub async fn update_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
    AppJson(input): AppJson<UpdateWorkflow>,
) -> AppResult<impl IntoResponse> {
    let workflow = WorkflowService::update(&state, workflow_id, input).await?;

    Ok(Json(DataResponse { data: workflow }))
}

/// DELETE /api/v1/workflows/{id}
pub async fn delete_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
) -> AppResult<StatusCode> {
    WorkflowService::delete(&state, workflow_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Execution and views
// ---------------------------------------------------------------------------

/// POST /api/v1/workflows/{id}/run
pub async fn run_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let result = WorkflowService::run(&state, workflow_id).await?;

    Ok(Json(DataResponse { data: result }))
}

/// GET /api/v1/workflows/active
pub async fn active_workflows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let workflows = WorkflowService::active(&state).await;

    Ok(Json(DataResponse { data: workflows }))
}

/// GET /api/v1/workflows/campaigns
///
/// Projected figures are freshly drawn on every call.
pub async fn list_campaigns(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let campaigns = WorkflowService::campaigns(&state).await;

    Ok(Json(DataResponse { data: campaigns }))
}
