//! Handlers for the API catalog.

use apiflow_core::types::DbId;
use apiflow_db::models::api::{ApiSearchParams, TestCallRequest};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;
use crate::services::CatalogService;
use crate::state::AppState;

/// GET /api/v1/apis
///
/// Search by `q` and `category`. With neither set this is the full catalog.
pub async fn list_apis(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ApiSearchParams>,
) -> AppResult<impl IntoResponse> {
    let apis =
        CatalogService::search(&state, params.q.as_deref(), params.category.as_deref()).await?;

    Ok(Json(DataResponse { data: apis }))
}

/// GET /api/v1/apis/trending
pub async fn trending_apis(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let apis = CatalogService::trending(&state).await;

    Ok(Json(DataResponse { data: apis }))
}

/// GET /api/v1/apis/category/{category}
pub async fn apis_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<impl IntoResponse> {
    let apis = CatalogService::by_category(&state, &category).await?;

    Ok(Json(DataResponse { data: apis }))
}

/// GET /api/v1/apis/{id}
pub async fn get_api(
    State(state): State<AppState>,
    Path(api_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let api = CatalogService::get_by_id(&state, api_id).await?;

    Ok(Json(DataResponse { data: api }))
}

/// POST /api/v1/apis/{id}/test
///
/// Run a simulated test call and append it to the test history. A simulated
/// timeout is recorded first and then returned as a 502.
pub async fn test_api(
    State(state): State<AppState>,
    Path(api_id): Path<DbId>,
    AppJson(input): AppJson<TestCallRequest>,
) -> AppResult<impl IntoResponse> {
    let recorded = CatalogService::test_and_record(&state, api_id, input).await?;

    Ok(Json(DataResponse { data: recorded }))
}
