use apiflow_core::types::DbId;
use apiflow_db::models::recipe::RecipeListParams;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::response::DataResponse;
use crate::services::RecipeService;
use crate::state::AppState;

/// GET /api/v1/recipes
///
/// Optional `q`, `category`, and `difficulty` filters; `all` means no filter.
pub async fn list_recipes(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecipeListParams>,
) -> AppResult<impl IntoResponse> {
    let recipes = RecipeService::filter(&state, &params).await?;

    Ok(Json(DataResponse { data: recipes }))
}

/// GET /api/v1/recipes/popular
pub async fn popular_recipes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = RecipeService::popular(&state).await;

    Ok(Json(DataResponse { data: recipes }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeService::get_by_id(&state, recipe_id).await?;

    Ok(Json(DataResponse { data: recipe }))
}

/// POST /api/v1/recipes/{id}/deploy
pub async fn deploy_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let result = RecipeService::deploy(&state, recipe_id).await?;

    Ok(Json(DataResponse { data: result }))
}
