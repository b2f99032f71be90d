//! Test-history facade: listing, appending, and aggregate statistics.

use apiflow_core::error::CoreError;
use apiflow_core::latency::LOOKUP_DELAY;
use apiflow_core::search::optional_filter;
use apiflow_core::test_history::{
    resolve_recent_limit, validate_method, MarketingMetrics, TestStats, TestStatus,
};
use apiflow_db::models::test_history::{CreateTestRecord, TestHistoryParams, TestHistoryRecord};
use apiflow_db::repositories::TestHistoryRepo;
use validator::Validate;

use crate::state::AppState;

pub struct TestHistoryService;

impl TestHistoryService {
    /// All records, newest first.
    pub async fn list_all(state: &AppState) -> Vec<TestHistoryRecord> {
        state.latency.pause(LOOKUP_DELAY).await;
        TestHistoryRepo::list_all(&state.pool).await
    }

    /// Listing with optional `api_id` and `status` filters, newest first.
    /// `all` or an absent value means no filter.
    pub async fn filter(
        state: &AppState,
        params: &TestHistoryParams,
    ) -> Result<Vec<TestHistoryRecord>, CoreError> {
        let status = optional_filter(params.status.as_deref())
            .map(str::parse::<TestStatus>)
            .transpose()?;

        let records = match optional_filter(params.api_id.as_deref()) {
            Some(api_id) => Self::by_api_id(state, api_id).await,
            None => Self::list_all(state).await,
        };
        Ok(records
            .into_iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .collect())
    }

    pub async fn by_api_id(state: &AppState, api_id: &str) -> Vec<TestHistoryRecord> {
        state.latency.pause(LOOKUP_DELAY).await;
        TestHistoryRepo::list_by_api_id(&state.pool, api_id.trim()).await
    }

    pub async fn by_status(state: &AppState, status: TestStatus) -> Vec<TestHistoryRecord> {
        state.latency.pause(LOOKUP_DELAY).await;
        TestHistoryRepo::list_by_status(&state.pool, status).await
    }

    /// The `limit` most recent records (default 10, at most 100).
    pub async fn recent(
        state: &AppState,
        limit: Option<usize>,
    ) -> Result<Vec<TestHistoryRecord>, CoreError> {
        let limit = resolve_recent_limit(limit)?;
        state.latency.pause(LOOKUP_DELAY).await;
        Ok(TestHistoryRepo::recent(&state.pool, limit).await)
    }

    /// Append a record, assigning the next id and the current time.
    pub async fn create(
        state: &AppState,
        mut input: CreateTestRecord,
    ) -> Result<TestHistoryRecord, CoreError> {
        input.validate()?;
        input.method = validate_method(&input.method)?;
        state.latency.pause(LOOKUP_DELAY).await;
        let record = TestHistoryRepo::create(&state.pool, input, chrono::Utc::now()).await;
        tracing::debug!(history_id = record.id, api_id = %record.api_id, "Test record appended");
        Ok(record)
    }

    pub async fn stats(state: &AppState) -> TestStats {
        state.latency.pause(LOOKUP_DELAY).await;
        TestHistoryRepo::stats(&state.pool).await
    }

    pub async fn marketing_metrics(state: &AppState) -> MarketingMetrics {
        MarketingMetrics::from(Self::stats(state).await)
    }
}
