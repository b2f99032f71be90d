use axum::routing::{get, post};
use axum::Router;

use crate::handlers::apis;
use crate::state::AppState;

/// Routes mounted at `/apis`.
///
/// ```text
/// GET  /                       -> list_apis (?q, ?category)
/// GET  /trending               -> trending_apis
/// GET  /category/{category}    -> apis_by_category
/// GET  /{id}                   -> get_api
/// POST /{id}/test              -> test_api
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(apis::list_apis))
        .route("/trending", get(apis::trending_apis))
        .route("/category/{category}", get(apis::apis_by_category))
        .route("/{id}", get(apis::get_api))
        .route("/{id}/test", post(apis::test_api))
}
