//! In-memory data layer: entity models, the seeded [`Store`], and one
//! repository per table.

use std::sync::Arc;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{SeedData, Store, StoreError, TableCounts};

/// Shared handle to the process-wide store.
pub type DbPool = Arc<Store>;

/// Build the store from a seed snapshot.
pub fn create_pool(seed: SeedData) -> Result<DbPool, StoreError> {
    Ok(Arc::new(Store::new(seed)?))
}

/// Build the store from the seed files compiled into this crate.
pub fn create_seeded_pool() -> Result<DbPool, StoreError> {
    create_pool(SeedData::embedded()?)
}

/// Report per-table row counts; used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> TableCounts {
    pool.table_counts().await
}
