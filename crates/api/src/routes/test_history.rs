use axum::routing::get;
use axum::Router;

use crate::handlers::test_history;
use crate::state::AppState;

/// Routes mounted at `/test-history`.
///
/// ```text
/// GET  /             -> list_history (?api_id, ?status)
/// POST /             -> create_record
/// GET  /recent       -> recent_history (?limit)
/// GET  /stats        -> history_stats
/// GET  /marketing    -> marketing_metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(test_history::list_history).post(test_history::create_record),
        )
        .route("/recent", get(test_history::recent_history))
        .route("/stats", get(test_history::history_stats))
        .route("/marketing", get(test_history::marketing_metrics))
}
