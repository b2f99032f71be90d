//! Recipe model and query DTOs.

use apiflow_core::recipe::Difficulty;
use apiflow_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A deployable automation template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Free-form range such as `"40-70%"`.
    pub estimated_roi: String,
    /// API names, not ids.
    pub required_apis: Vec<String>,
    pub tags: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub code_sample: Option<String>,
    pub uses: i64,
}

/// Query parameters for `GET /api/v1/recipes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}
