//! Dashboard summary assembled from the other facades.

use apiflow_core::test_history::TestStats;
use apiflow_core::workflow::WorkflowStatus;
use apiflow_db::models::api::ApiDescriptor;
use apiflow_db::models::recipe::Recipe;
use apiflow_db::models::test_history::TestHistoryRecord;
use serde::Serialize;

use crate::services::{CatalogService, RecipeService, TestHistoryService, WorkflowService};
use crate::state::AppState;

/// Number of test records shown on the dashboard.
pub const DASHBOARD_RECENT_TESTS: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub workflow_count: usize,
    pub active_workflow_count: usize,
    pub test_stats: TestStats,
    pub recent_tests: Vec<TestHistoryRecord>,
    pub trending_apis: Vec<ApiDescriptor>,
    pub popular_recipes: Vec<Recipe>,
}

pub struct DashboardService;

impl DashboardService {
    /// Fetch every dashboard section concurrently, so the total wait is the
    /// slowest section rather than the sum.
    pub async fn summary(state: &AppState) -> DashboardSummary {
        let (workflows, test_stats, recent_tests, trending_apis, popular_recipes) = tokio::join!(
            WorkflowService::list_all(state),
            TestHistoryService::stats(state),
            TestHistoryService::list_all(state),
            CatalogService::trending(state),
            RecipeService::popular(state),
        );

        let active_workflow_count = workflows
            .iter()
            .filter(|w| w.status == WorkflowStatus::Active)
            .count();

        DashboardSummary {
            workflow_count: workflows.len(),
            active_workflow_count,
            test_stats,
            recent_tests: recent_tests
                .into_iter()
                .take(DASHBOARD_RECENT_TESTS)
                .collect(),
            trending_apis,
            popular_recipes,
        }
    }
}
