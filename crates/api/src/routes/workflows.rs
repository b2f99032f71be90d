use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workflows;
use crate::state::AppState;

/// Routes mounted at `/workflows`.
///
/// ```text
/// GET    /              -> list_workflows
/// POST   /              -> create_workflow
/// GET    /active        -> active_workflows
/// GET    /campaigns     -> list_campaigns
/// GET    /{id}          -> get_workflow
/// PUT    /{id}          -> update_workflow
/// DELETE /{id}          -> delete_workflow
/// POST   /{id}/run      -> run_workflow
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(workflows::list_workflows).post(workflows::create_workflow),
        )
        .route("/active", get(workflows::active_workflows))
        .route("/campaigns", get(workflows::list_campaigns))
        .route(
            "/{id}",
            get(workflows::get_workflow)
                .put(workflows::update_workflow)
                .delete(workflows::delete_workflow),
        )
        .route("/{id}/run", post(workflows::run_workflow))
}
