pub mod apis;
pub mod dashboard;
pub mod health;
pub mod recipes;
pub mod test_history;
pub mod workflows;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /apis                                 search catalog (?q, ?category)
/// /apis/trending                        popularity >= 80, top 8
/// /apis/category/{category}             list by category
/// /apis/{id}                            get
/// /apis/{id}/test                       simulated test call (POST)
///
/// /recipes                              list, filter (?q, ?category, ?difficulty)
/// /recipes/popular                      top 6 by uses
/// /recipes/{id}                         get
/// /recipes/{id}/deploy                  simulated deployment (POST)
///
/// /workflows                            list, create
/// /workflows/active                     active workflows
/// /workflows/campaigns                  campaign view with projections
/// /workflows/{id}                       get, update, delete
/// /workflows/{id}/run                   simulated run (POST)
///
/// /test-history                         list (?api_id, ?status), append
/// /test-history/recent                  newest first (?limit)
/// /test-history/stats                   aggregate statistics
/// /test-history/marketing               statistics with marketing metrics
///
/// /dashboard/summary                    dashboard aggregate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/apis", apis::router())
        .nest("/recipes", recipes::router())
        .nest("/workflows", workflows::router())
        .nest("/test-history", test_history::router())
        .nest("/dashboard", dashboard::router())
}
