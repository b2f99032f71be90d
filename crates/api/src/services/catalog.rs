//! Catalog facade: API listing, search, trending, and simulated test calls.

use std::time::Duration;

use apiflow_core::catalog::{
    build_test_response, test_call_fails, ApiCategory, TestCallResult, TEST_CALL_TIMEOUT_STATUS,
};
use apiflow_core::error::{CoreError, SimulatedFailure};
use apiflow_core::latency::{
    LIST_DELAY, LOOKUP_DELAY, SEARCH_DELAY, TEST_CALL_DELAY_SPAN_MS, TEST_CALL_MIN_DELAY_MS,
};
use apiflow_core::search::{optional_filter, SearchTerm};
use apiflow_core::test_history::{validate_method, TestStatus};
use apiflow_core::types::DbId;
use apiflow_db::models::api::{ApiDescriptor, TestCallRequest};
use apiflow_db::models::test_history::{CreateTestRecord, TestHistoryRecord};
use apiflow_db::repositories::{ApiRepo, TestHistoryRepo};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// A successful test call together with the history row it produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTestCall {
    pub result: TestCallResult,
    pub history_id: DbId,
}

pub struct CatalogService;

impl CatalogService {
    pub async fn list_all(state: &AppState) -> Vec<ApiDescriptor> {
        state.latency.pause(LIST_DELAY).await;
        ApiRepo::list_all(&state.pool).await
    }

    pub async fn get_by_id(state: &AppState, id: DbId) -> Result<ApiDescriptor, CoreError> {
        state.latency.pause(LOOKUP_DELAY).await;
        find_api(state, id).await
    }

    /// Search by free text plus an optional category (`"all"` or absent means
    /// every category).
    pub async fn search(
        state: &AppState,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<ApiDescriptor>, CoreError> {
        let term = SearchTerm::parse(query)?;
        let category = optional_filter(category)
            .map(str::parse::<ApiCategory>)
            .transpose()?;
        state.latency.pause(SEARCH_DELAY).await;
        Ok(ApiRepo::search(&state.pool, &term, category).await)
    }

    pub async fn by_category(
        state: &AppState,
        category: &str,
    ) -> Result<Vec<ApiDescriptor>, CoreError> {
        let category: ApiCategory = category.parse()?;
        state.latency.pause(LOOKUP_DELAY).await;
        Ok(ApiRepo::list_by_category(&state.pool, category).await)
    }

    pub async fn trending(state: &AppState) -> Vec<ApiDescriptor> {
        state.latency.pause(LOOKUP_DELAY).await;
        ApiRepo::trending(&state.pool).await
    }

    /// Simulate a call against `endpoint` of the given API.
    ///
    /// Waits a randomized 500–1500 ms, then fails with a network timeout about
    /// 10% of the time. The reported `duration` is decorative and unrelated to
    /// the wait. `params` is only logged.
    pub async fn test_call(
        state: &AppState,
        api_id: DbId,
        endpoint: &str,
        params: &serde_json::Value,
    ) -> Result<TestCallResult, CoreError> {
        let api = find_api(state, api_id).await?;
        let outcomes = state.outcomes.as_ref();

        let wait_ms = outcomes.sample_range(TEST_CALL_MIN_DELAY_MS, TEST_CALL_DELAY_SPAN_MS);
        state
            .latency
            .pause(Duration::from_secs_f64(wait_ms / 1000.0))
            .await;

        if test_call_fails(outcomes) {
            tracing::warn!(api_id, endpoint, "Simulated test call timed out");
            return Err(SimulatedFailure::NetworkTimeout.into());
        }

        let result = build_test_response(api.category, outcomes);
        tracing::debug!(
            api_id,
            endpoint,
            param_count = params.as_object().map_or(0, |p| p.len()),
            duration = result.duration,
            "Simulated test call succeeded",
        );
        Ok(result)
    }

    /// Run a test call and append its outcome to the test history.
    ///
    /// Failures are recorded with status `error` and a 504 status code before
    /// the error is returned to the caller.
    pub async fn test_and_record(
        state: &AppState,
        api_id: DbId,
        request: TestCallRequest,
    ) -> Result<RecordedTestCall, CoreError> {
        let method = validate_method(&request.method)?;
        let endpoint = if request.endpoint.trim().is_empty() {
            "/test".to_string()
        } else {
            request.endpoint.trim().to_string()
        };

        let outcome = Self::test_call(state, api_id, &endpoint, &request.params).await;

        let (record, result) = match outcome {
            Ok(result) => {
                let record = CreateTestRecord {
                    api_id: api_id.to_string(),
                    endpoint,
                    method,
                    request: request.params,
                    response: result.data.clone(),
                    duration: result.duration,
                    status: TestStatus::Success,
                    status_code: result.status_code,
                };
                (record, Ok(result))
            }
            Err(CoreError::Simulated(failure)) => {
                let record = CreateTestRecord {
                    api_id: api_id.to_string(),
                    endpoint,
                    method,
                    request: request.params,
                    response: json!({ "error": failure.to_string() }),
                    duration: 0,
                    status: TestStatus::Error,
                    status_code: TEST_CALL_TIMEOUT_STATUS,
                };
                (record, Err(CoreError::Simulated(failure)))
            }
            Err(other) => return Err(other),
        };

        let saved: TestHistoryRecord =
            TestHistoryRepo::create(&state.pool, record, chrono::Utc::now()).await;
        tracing::info!(api_id, history_id = saved.id, status = %saved.status, "Test call recorded");

        result.map(|result| RecordedTestCall {
            result,
            history_id: saved.id,
        })
    }
}

async fn find_api(state: &AppState, id: DbId) -> Result<ApiDescriptor, CoreError> {
    ApiRepo::find_by_id(&state.pool, id)
        .await
        .ok_or(CoreError::NotFound { entity: "API", id })
}
