//! Repository for recipes.

use apiflow_core::recipe::{Difficulty, POPULAR_LIMIT};
use apiflow_core::search::SearchTerm;
use apiflow_core::types::DbId;

use crate::models::recipe::Recipe;
use crate::DbPool;

pub struct RecipeRepo;

impl RecipeRepo {
    pub async fn list_all(pool: &DbPool) -> Vec<Recipe> {
        pool.recipes.read().await.clone()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Recipe> {
        pool.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Combined filter: free text over title/description/tags, then optional
    /// category and difficulty restrictions.
    pub async fn filter(
        pool: &DbPool,
        term: &SearchTerm,
        category: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Vec<Recipe> {
        pool.recipes
            .read()
            .await
            .iter()
            .filter(|r| category.map_or(true, |c| r.category.eq_ignore_ascii_case(c)))
            .filter(|r| difficulty.map_or(true, |d| r.difficulty == d))
            .filter(|r| {
                term.matches_any(
                    [r.title.as_str(), r.description.as_str()]
                        .into_iter()
                        .chain(r.tags.iter().map(String::as_str)),
                )
            })
            .cloned()
            .collect()
    }

    pub async fn search(pool: &DbPool, term: &SearchTerm) -> Vec<Recipe> {
        Self::filter(pool, term, None, None).await
    }

    pub async fn list_by_category(pool: &DbPool, category: &str) -> Vec<Recipe> {
        Self::filter(pool, &SearchTerm::default(), Some(category), None).await
    }

    pub async fn list_by_difficulty(pool: &DbPool, difficulty: Difficulty) -> Vec<Recipe> {
        Self::filter(pool, &SearchTerm::default(), None, Some(difficulty)).await
    }

    /// Most-used recipes first, capped at [`POPULAR_LIMIT`]. Does not reorder
    /// the underlying table.
    pub async fn popular(pool: &DbPool) -> Vec<Recipe> {
        let mut recipes = Self::list_all(pool).await;
        recipes.sort_by(|a, b| b.uses.cmp(&a.uses));
        recipes.truncate(POPULAR_LIMIT);
        recipes
    }

    /// Increment the usage counter by exactly one. Returns the updated recipe,
    /// or `None` if the id is unknown.
    pub async fn increment_uses(pool: &DbPool, id: DbId) -> Option<Recipe> {
        let mut recipes = pool.recipes.write().await;
        let recipe = recipes.iter_mut().find(|r| r.id == id)?;
        recipe.uses += 1;
        Some(recipe.clone())
    }
}
