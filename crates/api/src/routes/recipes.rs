use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET  /               -> list_recipes (?q, ?category, ?difficulty)
/// GET  /popular        -> popular_recipes
/// GET  /{id}           -> get_recipe
/// POST /{id}/deploy    -> deploy_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes))
        .route("/popular", get(recipes::popular_recipes))
        .route("/{id}", get(recipes::get_recipe))
        .route("/{id}/deploy", post(recipes::deploy_recipe))
}
