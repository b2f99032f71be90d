//! Facades over the in-memory store.
//!
//! Each service applies the artificial latency, validates input, draws any
//! random outcome, and delegates storage to the matching repository.

pub mod catalog;
pub mod dashboard;
pub mod recipes;
pub mod test_history;
pub mod workflows;

pub use catalog::{CatalogService, RecordedTestCall};
pub use dashboard::{DashboardService, DashboardSummary};
pub use recipes::RecipeService;
pub use test_history::TestHistoryService;
pub use workflows::WorkflowService;
