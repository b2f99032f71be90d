//! Repositories over the in-memory [`Store`](crate::Store).
//!
//! Repositories are zero-sized types with associated async functions taking
//! the pool, so callers read the same way regardless of the backing store.
//! Lookups return `Option` and deletes return `bool`; mapping absence to
//! `NotFound` is the caller's job.

pub mod api_repo;
pub mod recipe_repo;
pub mod test_history_repo;
pub mod workflow_repo;

pub use api_repo::ApiRepo;
pub use recipe_repo::RecipeRepo;
pub use test_history_repo::TestHistoryRepo;
pub use workflow_repo::WorkflowRepo;
