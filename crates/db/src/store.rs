//! The in-memory store backing every repository.
//!
//! A [`Store`] is built once per process from a [`SeedData`] snapshot and then
//! mutated in place for the rest of the process lifetime. Nothing is written
//! back to disk.

use tokio::sync::RwLock;

use apiflow_core::types::DbId;

use crate::models::api::ApiDescriptor;
use crate::models::recipe::Recipe;
use crate::models::test_history::TestHistoryRecord;
use crate::models::workflow::Workflow;

const APIS_JSON: &str = include_str!("../seed/apis.json");
const RECIPES_JSON: &str = include_str!("../seed/recipes.json");
const WORKFLOWS_JSON: &str = include_str!("../seed/workflows.json");
const TEST_HISTORY_JSON: &str = include_str!("../seed/test_history.json");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to parse seed table '{table}': {source}")]
    Seed {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate id {id} in seed table '{table}'")]
    DuplicateId { table: &'static str, id: DbId },
}

/// Initial contents of every table.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub apis: Vec<ApiDescriptor>,
    pub recipes: Vec<Recipe>,
    pub workflows: Vec<Workflow>,
    pub test_history: Vec<TestHistoryRecord>,
}

impl SeedData {
    /// Parse the seed files compiled into this crate.
    pub fn embedded() -> Result<Self, StoreError> {
        Ok(Self {
            apis: parse_table("apis", APIS_JSON)?,
            recipes: parse_table("recipes", RECIPES_JSON)?,
            workflows: parse_table("workflows", WORKFLOWS_JSON)?,
            test_history: parse_table("test_history", TEST_HISTORY_JSON)?,
        })
    }

    fn check_unique_ids(&self) -> Result<(), StoreError> {
        ensure_unique("apis", self.apis.iter().map(|a| a.id))?;
        ensure_unique("recipes", self.recipes.iter().map(|r| r.id))?;
        ensure_unique("workflows", self.workflows.iter().map(|w| w.id))?;
        ensure_unique("test_history", self.test_history.iter().map(|t| t.id))
    }
}

fn parse_table<T: serde::de::DeserializeOwned>(
    table: &'static str,
    raw: &str,
) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Seed { table, source })
}

fn ensure_unique(table: &'static str, ids: impl Iterator<Item = DbId>) -> Result<(), StoreError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId { table, id });
        }
    }
    Ok(())
}

/// In-memory tables. Each mutable table sits behind its own `RwLock`; a
/// repository mutation holds the write guard for the whole read-modify-write.
#[derive(Debug)]
pub struct Store {
    pub(crate) apis: Vec<ApiDescriptor>,
    pub(crate) recipes: RwLock<Vec<Recipe>>,
    pub(crate) workflows: RwLock<Vec<Workflow>>,
    pub(crate) test_history: RwLock<Vec<TestHistoryRecord>>,
}

impl Store {
    /// Build a store from a seed snapshot, rejecting duplicate ids.
    pub fn new(seed: SeedData) -> Result<Self, StoreError> {
        seed.check_unique_ids()?;
        tracing::debug!(
            apis = seed.apis.len(),
            recipes = seed.recipes.len(),
            workflows = seed.workflows.len(),
            test_history = seed.test_history.len(),
            "Building in-memory store",
        );
        Ok(Self {
            apis: seed.apis,
            recipes: RwLock::new(seed.recipes),
            workflows: RwLock::new(seed.workflows),
            test_history: RwLock::new(seed.test_history),
        })
    }

    /// Row counts per table, for startup logging and health reporting.
    pub async fn table_counts(&self) -> TableCounts {
        TableCounts {
            apis: self.apis.len(),
            recipes: self.recipes.read().await.len(),
            workflows: self.workflows.read().await.len(),
            test_history: self.test_history.read().await.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TableCounts {
    pub apis: usize,
    pub recipes: usize,
    pub workflows: usize,
    pub test_history: usize,
}

/// Next identity for a table: `max(existing) + 1`, or `1` when empty.
pub(crate) fn next_id(ids: impl Iterator<Item = DbId>) -> DbId {
    ids.max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert!(!seed.apis.is_empty());
        assert!(!seed.recipes.is_empty());
        assert!(!seed.workflows.is_empty());
        assert!(!seed.test_history.is_empty());
        assert!(seed.check_unique_ids().is_ok());
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id([3, 9, 4].into_iter()), 10);
        assert_eq!(next_id(std::iter::empty()), 1);
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let mut seed = SeedData::embedded().unwrap();
        let dup = seed.recipes[0].clone();
        seed.recipes.push(dup);
        assert_matches!(
            Store::new(seed),
            Err(StoreError::DuplicateId {
                table: "recipes",
                id: 1
            })
        );
    }
}
