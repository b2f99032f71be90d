//! Test-history record model and DTOs.

use apiflow_core::test_history::TestStatus;
use apiflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One recorded test call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestHistoryRecord {
    pub id: DbId,
    /// String-typed reference to [`ApiDescriptor::id`](crate::models::api::ApiDescriptor).
    pub api_id: String,
    pub endpoint: String,
    pub method: String,
    pub request: serde_json::Value,
    pub response: serde_json::Value,
    /// Milliseconds.
    pub duration: i64,
    pub status: TestStatus,
    pub status_code: u16,
    pub timestamp: Timestamp,
}

/// DTO for appending a record. The id and timestamp are assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRecord {
    #[validate(length(min = 1, message = "apiId is required"))]
    pub api_id: String,
    #[validate(length(min = 1, max = 500, message = "endpoint must be 1-500 characters"))]
    pub endpoint: String,
    pub method: String,
    #[serde(default)]
    pub request: serde_json::Value,
    #[serde(default)]
    pub response: serde_json::Value,
    #[validate(range(
        min = 0,
        max = 86_400_000,
        message = "duration must be between 0 and 86400000 ms"
    ))]
    pub duration: i64,
    pub status: TestStatus,
    pub status_code: u16,
}

/// Query parameters for `GET /api/v1/test-history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestHistoryParams {
    pub api_id: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for `GET /api/v1/test-history/recent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}
