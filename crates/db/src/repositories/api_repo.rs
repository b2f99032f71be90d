//! Repository for the read-only API catalog.

use apiflow_core::catalog::{ApiCategory, TRENDING_LIMIT, TRENDING_MIN_POPULARITY};
use apiflow_core::search::SearchTerm;
use apiflow_core::types::DbId;

use crate::models::api::ApiDescriptor;
use crate::DbPool;

pub struct ApiRepo;

impl ApiRepo {
    /// Every catalogued API in seed order.
    pub async fn list_all(pool: &DbPool) -> Vec<ApiDescriptor> {
        pool.apis.clone()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<ApiDescriptor> {
        pool.apis.iter().find(|api| api.id == id).cloned()
    }

    /// Free-text search over name, description, and category, optionally
    /// narrowed to one category.
    pub async fn search(
        pool: &DbPool,
        term: &SearchTerm,
        category: Option<ApiCategory>,
    ) -> Vec<ApiDescriptor> {
        pool.apis
            .iter()
            .filter(|api| category.map_or(true, |c| api.category == c))
            .filter(|api| {
                term.matches_any([
                    api.name.as_str(),
                    api.description.as_str(),
                    api.category.as_str(),
                ])
            })
            .cloned()
            .collect()
    }

    pub async fn list_by_category(pool: &DbPool, category: ApiCategory) -> Vec<ApiDescriptor> {
        pool.apis
            .iter()
            .filter(|api| api.category == category)
            .cloned()
            .collect()
    }

    /// APIs with popularity at or above the trending threshold, most popular
    /// first, capped at [`TRENDING_LIMIT`]. Ties keep seed order.
    pub async fn trending(pool: &DbPool) -> Vec<ApiDescriptor> {
        let mut trending: Vec<ApiDescriptor> = pool
            .apis
            .iter()
            .filter(|api| api.popularity >= TRENDING_MIN_POPULARITY)
            .cloned()
            .collect();
        trending.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        trending.truncate(TRENDING_LIMIT);
        trending
    }
}
