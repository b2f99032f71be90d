//! Recipe facade: listing, filtering, and simulated deployment.

use apiflow_core::error::{CoreError, SimulatedFailure};
use apiflow_core::latency::{DEPLOY_DELAY, LIST_DELAY, LOOKUP_DELAY, SEARCH_DELAY};
use apiflow_core::recipe::{deploy_result, deploy_succeeds, DeployResult, Difficulty};
use apiflow_core::search::{optional_filter, SearchTerm};
use apiflow_core::types::DbId;
use apiflow_db::models::recipe::{Recipe, RecipeListParams};
use apiflow_db::repositories::RecipeRepo;

use crate::state::AppState;

pub struct RecipeService;

impl RecipeService {
    pub async fn list_all(state: &AppState) -> Vec<Recipe> {
        state.latency.pause(LIST_DELAY).await;
        RecipeRepo::list_all(&state.pool).await
    }

    pub async fn get_by_id(state: &AppState, id: DbId) -> Result<Recipe, CoreError> {
        state.latency.pause(LOOKUP_DELAY).await;
        find_recipe(state, id).await
    }

    /// Combined search and filter used by the listing endpoint.
    pub async fn filter(
        state: &AppState,
        params: &RecipeListParams,
    ) -> Result<Vec<Recipe>, CoreError> {
        let term = SearchTerm::parse(params.q.as_deref())?;
        let difficulty = optional_filter(params.difficulty.as_deref())
            .map(str::parse::<Difficulty>)
            .transpose()?;
        let category = optional_filter(params.category.as_deref());
        state.latency.pause(SEARCH_DELAY).await;
        Ok(RecipeRepo::filter(&state.pool, &term, category, difficulty).await)
    }

    pub async fn search(state: &AppState, query: Option<&str>) -> Result<Vec<Recipe>, CoreError> {
        let term = SearchTerm::parse(query)?;
        state.latency.pause(SEARCH_DELAY).await;
        Ok(RecipeRepo::search(&state.pool, &term).await)
    }

    pub async fn by_category(state: &AppState, category: &str) -> Vec<Recipe> {
        state.latency.pause(SEARCH_DELAY).await;
        RecipeRepo::list_by_category(&state.pool, category).await
    }

    pub async fn by_difficulty(state: &AppState, difficulty: Difficulty) -> Vec<Recipe> {
        state.latency.pause(LOOKUP_DELAY).await;
        RecipeRepo::list_by_difficulty(&state.pool, difficulty).await
    }

    pub async fn popular(state: &AppState) -> Vec<Recipe> {
        state.latency.pause(LOOKUP_DELAY).await;
        RecipeRepo::popular(&state.pool).await
    }

    /// Deploy a recipe.
    ///
    /// Waits the fixed deployment time, then succeeds about 85% of the time,
    /// incrementing `uses` by one. Failures leave the recipe untouched.
    pub async fn deploy(state: &AppState, id: DbId) -> Result<DeployResult, CoreError> {
        state.latency.pause(DEPLOY_DELAY).await;

        let recipe = find_recipe(state, id).await?;
        let outcomes = state.outcomes.as_ref();

        if !deploy_succeeds(outcomes) {
            tracing::warn!(recipe_id = id, "Recipe deployment failed");
            return Err(SimulatedFailure::MissingCredentials.into());
        }

        let updated = RecipeRepo::increment_uses(&state.pool, id)
            .await
            .ok_or(CoreError::NotFound {
                entity: "Recipe",
                id,
            })?;
        let result = deploy_result(&recipe.title, outcomes);

        tracing::info!(
            recipe_id = id,
            uses = updated.uses,
            workflow_id = result.workflow_id,
            "Recipe deployed",
        );
        Ok(result)
    }
}

async fn find_recipe(state: &AppState, id: DbId) -> Result<Recipe, CoreError> {
    RecipeRepo::find_by_id(&state.pool, id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "Recipe",
            id,
        })
}
