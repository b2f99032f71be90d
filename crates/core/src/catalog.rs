//! API catalog categories, trending rules, and test-call simulation data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::CoreError;
use crate::outcome::OutcomeSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum popularity for an API to be listed as trending.
pub const TRENDING_MIN_POPULARITY: i32 = 80;
/// Maximum number of trending APIs returned.
pub const TRENDING_LIMIT: usize = 8;

/// Probability that a simulated test call fails with a network timeout.
pub const TEST_CALL_FAILURE_RATE: f64 = 0.1;
/// Lower bound of the decorative duration reported by a test call.
pub const TEST_CALL_MIN_DURATION_MS: i64 = 100;
/// Width of the decorative duration window.
pub const TEST_CALL_DURATION_SPAN_MS: i64 = 500;
/// Status code reported by a successful simulated call.
pub const TEST_CALL_OK_STATUS: u16 = 200;
/// Status code recorded in history when a simulated call times out.
pub const TEST_CALL_TIMEOUT_STATUS: u16 = 504;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Catalog category of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApiCategory {
    Social,
    Analytics,
    Content,
    #[serde(rename = "E-commerce")]
    ECommerce,
    Data,
    Utility,
}

impl ApiCategory {
    pub const ALL: [ApiCategory; 6] = [
        Self::Social,
        Self::Analytics,
        Self::Content,
        Self::ECommerce,
        Self::Data,
        Self::Utility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Social => "Social",
            Self::Analytics => "Analytics",
            Self::Content => "Content",
            Self::ECommerce => "E-commerce",
            Self::Data => "Data",
            Self::Utility => "Utility",
        }
    }

    /// Canned payload returned by a successful test call against an API of
    /// this category.
    pub fn canned_response(self) -> serde_json::Value {
        match self {
            Self::Social => json!({
                "data": [
                    { "id": "123", "text": "Sample social media post", "likes": 42, "shares": 8 }
                ],
                "meta": { "total_count": 1 }
            }),
            Self::Analytics => json!({
                "sessions": 1247,
                "users": 892,
                "pageviews": 3456,
                "bounce_rate": 0.34
            }),
            Self::Content => json!({
                "results": [
                    { "id": "img_123", "url": "https://example.com/image.jpg", "title": "Sample Image" }
                ]
            }),
            Self::ECommerce => json!({
                "id": "pi_123",
                "amount": 2000,
                "currency": "usd",
                "status": "succeeded"
            }),
            Self::Data => json!({
                "temperature": 72,
                "humidity": 65,
                "conditions": "partly cloudy",
                "location": "San Francisco"
            }),
            Self::Utility => json!({
                "message": "Operation completed successfully",
                "id": "op_123",
                "status": "success"
            }),
        }
    }
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown API category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Test call
// ---------------------------------------------------------------------------

/// Result of a successful simulated test call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCallResult {
    pub status: &'static str,
    pub status_code: u16,
    pub data: serde_json::Value,
    pub headers: BTreeMap<String, String>,
    /// Decorative duration in ms, independent of the simulated wait.
    pub duration: i64,
}

/// The fixed header set attached to every simulated response.
pub fn fixed_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        ("x-ratelimit-remaining".to_string(), "4999".to_string()),
    ])
}

/// Whether a test call draw lands in the failure band.
pub fn test_call_fails(outcomes: &dyn OutcomeSource) -> bool {
    outcomes.sample() < TEST_CALL_FAILURE_RATE
}

/// Build the successful response for `category`, drawing the decorative
/// duration from `outcomes`.
pub fn build_test_response(category: ApiCategory, outcomes: &dyn OutcomeSource) -> TestCallResult {
    TestCallResult {
        status: "success",
        status_code: TEST_CALL_OK_STATUS,
        data: category.canned_response(),
        headers: fixed_headers(),
        duration: outcomes.sample_int(TEST_CALL_MIN_DURATION_MS, TEST_CALL_DURATION_SPAN_MS),
    }
}
