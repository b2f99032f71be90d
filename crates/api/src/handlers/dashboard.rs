use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::DashboardService;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = DashboardService::summary(&state).await;

    Ok(Json(DataResponse { data: summary }))
}
