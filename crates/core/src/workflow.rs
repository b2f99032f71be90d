//! Workflow status machine, run outcome rules, and campaign classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::outcome::OutcomeSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Draws at or below this value fail a run (roughly 20%).
pub const RUN_FAILURE_THRESHOLD: f64 = 0.2;
/// Upper bound (exclusive) of the success-rate increase after a good run.
pub const SUCCESS_NUDGE_MAX: f64 = 5.0;
/// Upper bound (exclusive) of the success-rate decrease after a failed run.
pub const FAILURE_NUDGE_MAX: f64 = 10.0;
/// Reported execution time of a successful run, in ms.
pub const REPORTED_EXECUTION_MS: i64 = 1847;

pub const MIN_SUCCESS_RATE: f64 = 0.0;
pub const MAX_SUCCESS_RATE: f64 = 100.0;

/// Campaign label used when no keyword matches.
pub const DEFAULT_CAMPAIGN_TYPE: &str = "Growth Campaign";

/// Keyword → campaign label, checked in order.
const CAMPAIGN_KEYWORDS: [(&str, &str); 4] = [
    ("email", "Email Campaign"),
    ("social", "Social Media Campaign"),
    ("lead", "Lead Generation"),
    ("content", "Content Marketing"),
];

// ---------------------------------------------------------------------------
// Status machine
// ---------------------------------------------------------------------------

/// Lifecycle status of a workflow.
///
/// ```text
/// draft  -> active | paused
/// active -> paused | error | draft
/// paused -> active | draft
/// error  -> active | draft
/// ```
///
/// Run outcomes are accepted from every status; explicit changes made through
/// an update must follow [`WorkflowStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Error,
}

impl WorkflowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Error => "error",
        }
    }

    /// Whether an explicit status change from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: WorkflowStatus) -> bool {
        use WorkflowStatus::*;
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Draft, Active)
                | (Draft, Paused)
                | (Active, Paused)
                | (Active, Error)
                | (Active, Draft)
                | (Paused, Active)
                | (Paused, Draft)
                | (Error, Active)
                | (Error, Draft)
        )
    }

    /// Validate an explicit transition, returning the new status.
    pub fn transition_to(self, next: WorkflowStatus) -> Result<WorkflowStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::Conflict(format!(
                "cannot change workflow status from {self} to {next}"
            )))
        }
    }

    /// Status after a run completes with the given outcome.
    pub fn after_run(self, succeeded: bool) -> WorkflowStatus {
        if succeeded {
            Self::Active
        } else {
            Self::Error
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// The decided outcome of a single run, applied atomically to the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    pub succeeded: bool,
    /// Signed change to apply to the success rate before clamping.
    pub rate_delta: f64,
}

impl RunOutcome {
    /// Roll the outcome and the size of the success-rate nudge.
    pub fn roll(outcomes: &dyn OutcomeSource) -> Self {
        let succeeded = outcomes.sample() > RUN_FAILURE_THRESHOLD;
        let rate_delta = if succeeded {
            outcomes.sample_range(0.0, SUCCESS_NUDGE_MAX)
        } else {
            -outcomes.sample_range(0.0, FAILURE_NUDGE_MAX)
        };
        Self {
            succeeded,
            rate_delta,
        }
    }

    /// New success rate after applying this outcome to `current`.
    pub fn apply_to_rate(&self, current: f64) -> f64 {
        clamp_success_rate(current + self.rate_delta)
    }
}

/// Clamp a success rate into `[0, 100]`. Non-finite values become `0`.
pub fn clamp_success_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.clamp(MIN_SUCCESS_RATE, MAX_SUCCESS_RATE)
    } else {
        MIN_SUCCESS_RATE
    }
}

/// Payload returned by a successful run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub success: bool,
    pub execution_time: i64,
    pub nodes_executed: usize,
    pub result: String,
}

impl RunResult {
    pub fn completed(nodes_executed: usize) -> Self {
        Self {
            success: true,
            execution_time: REPORTED_EXECUTION_MS,
            nodes_executed,
            result: "Workflow completed successfully".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// Classify a workflow into a marketing campaign type by its name.
pub fn campaign_type(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    CAMPAIGN_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_CAMPAIGN_TYPE)
}

/// Projected marketing figures attached to a campaign view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProjection {
    /// Percent, in `[150, 450)`.
    pub expected_roi: i64,
    /// In `[200, 1200)`.
    pub estimated_leads: i64,
    /// Percent, in `[5, 20)`.
    pub conversion_rate: i64,
}

impl CampaignProjection {
    pub fn draw(outcomes: &dyn OutcomeSource) -> Self {
        Self {
            expected_roi: outcomes.sample_int(150, 300),
            estimated_leads: outcomes.sample_int(200, 1000),
            conversion_rate: outcomes.sample_int(5, 15),
        }
    }
}
