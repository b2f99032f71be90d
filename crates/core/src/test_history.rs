//! Test-history status values and aggregate statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default number of records returned by the "recent" listing.
pub const DEFAULT_RECENT_LIMIT: usize = 10;
/// Maximum number of records the "recent" listing may return.
pub const MAX_RECENT_LIMIT: usize = 100;

/// Longest duration a recorded test call may claim: one day, in ms.
pub const MAX_TEST_DURATION_MS: i64 = 86_400_000;

/// HTTP methods accepted in a test record.
pub const VALID_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Success,
    Error,
}

impl TestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            other => Err(CoreError::Validation(format!(
                "unknown test status '{other}'"
            ))),
        }
    }
}

/// Normalize and validate an HTTP method name.
pub fn validate_method(method: &str) -> Result<String, CoreError> {
    let upper = method.trim().to_ascii_uppercase();
    if VALID_METHODS.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(CoreError::Validation(format!(
            "method must be one of {}",
            VALID_METHODS.join(", ")
        )))
    }
}

/// Resolve an optional "recent" limit against the default and bounds.
pub fn resolve_recent_limit(limit: Option<usize>) -> Result<usize, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    if (1..=MAX_RECENT_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_RECENT_LIMIT}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregate statistics over the full test history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// `successful / total * 100`, or `0` for an empty history.
    pub success_rate: f64,
    /// Mean duration in ms rounded to the nearest integer, or `0` when empty.
    pub avg_duration: i64,
}

impl TestStats {
    /// Compute statistics from `(status, duration_ms)` pairs.
    pub fn compute(records: impl IntoIterator<Item = (TestStatus, i64)>) -> Self {
        let mut stats = Self::default();
        let mut duration_sum: i128 = 0;
        for (status, duration) in records {
            stats.total += 1;
            duration_sum += i128::from(duration);
            match status {
                TestStatus::Success => stats.successful += 1,
                TestStatus::Error => stats.failed += 1,
            }
        }
        if stats.total > 0 {
            let total = stats.total as f64;
            stats.success_rate = stats.successful as f64 / total * 100.0;
            stats.avg_duration = (duration_sum as f64 / total).round() as i64;
        }
        stats
    }
}

/// Marketing view of the test statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingMetrics {
    #[serde(flatten)]
    pub stats: TestStats,
    pub conversions: i64,
    pub leads: i64,
    pub roi: i64,
}

impl From<TestStats> for MarketingMetrics {
    fn from(stats: TestStats) -> Self {
        Self {
            conversions: (stats.successful as f64 * 0.7).floor() as i64,
            leads: (stats.total as f64 * 2.3).floor() as i64,
            roi: (stats.success_rate * 2.5).floor() as i64,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_yields_zeros() {
        let stats = TestStats::compute(Vec::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.successful, 0);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.avg_duration, 0);
    }

    #[test]
    fn huge_durations_do_not_overflow_the_average() {
        let stats = TestStats::compute(vec![
            (TestStatus::Success, i64::MAX),
            (TestStatus::Error, i64::MAX),
        ]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.avg_duration, i64::MAX);
    }

    #[test]
    fn stats_count_and_average() {
        let stats = TestStats::compute(vec![
            (TestStatus::Success, 100),
            (TestStatus::Success, 201),
            (TestStatus::Error, 0),
            (TestStatus::Success, 300),
        ]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.successful, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.success_rate, 75.0);
        // 601 / 4 = 150.25
        assert_eq!(stats.avg_duration, 150);
    }

    #[test]
    fn marketing_metrics_floor_derived_values() {
        let stats = TestStats::compute(vec![
            (TestStatus::Success, 10),
            (TestStatus::Success, 10),
            (TestStatus::Error, 10),
        ]);
        let metrics = MarketingMetrics::from(stats);
        assert_eq!(metrics.conversions, 1);
        assert_eq!(metrics.leads, 6);
        // 66.66.. * 2.5 = 166.66..
        assert_eq!(metrics.roi, 166);

        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["successRate"].as_f64().unwrap().floor(), 66.0);
    }

    #[test]
    fn methods_are_normalized() {
        assert_eq!(validate_method("post").unwrap(), "POST");
        assert!(validate_method("TRACE").is_err());
    }

    #[test]
    fn recent_limit_bounds() {
        assert_eq!(resolve_recent_limit(None).unwrap(), DEFAULT_RECENT_LIMIT);
        assert_eq!(resolve_recent_limit(Some(5)).unwrap(), 5);
        assert!(resolve_recent_limit(Some(0)).is_err());
        assert!(resolve_recent_limit(Some(MAX_RECENT_LIMIT + 1)).is_err());
    }

    #[test]
    fn status_parses() {
        assert_eq!("Success".parse::<TestStatus>().unwrap(), TestStatus::Success);
        assert!("pending".parse::<TestStatus>().is_err());
    }
}
