//! Recipe difficulty levels and deployment outcome rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::outcome::OutcomeSource;
use crate::types::DbId;

/// Number of recipes returned by the "popular" listing.
pub const POPULAR_LIMIT: usize = 6;

/// Draws at or below this value fail deployment (roughly 15%).
pub const DEPLOY_FAILURE_THRESHOLD: f64 = 0.15;

/// Range of fabricated workflow ids returned by a successful deploy.
pub const DEPLOYED_WORKFLOW_ID_MIN: i64 = 100;
pub const DEPLOYED_WORKFLOW_ID_SPAN: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown difficulty '{s}'")))
    }
}

/// Result of a successful recipe deployment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    pub success: bool,
    pub workflow_id: DbId,
    pub message: String,
}

/// Roll the deployment outcome. `true` means the deploy succeeds.
pub fn deploy_succeeds(outcomes: &dyn OutcomeSource) -> bool {
    outcomes.sample() > DEPLOY_FAILURE_THRESHOLD
}

/// Build the success payload, drawing the fabricated workflow id.
pub fn deploy_result(title: &str, outcomes: &dyn OutcomeSource) -> DeployResult {
    DeployResult {
        success: true,
        workflow_id: outcomes.sample_int(DEPLOYED_WORKFLOW_ID_MIN, DEPLOYED_WORKFLOW_ID_SPAN),
        message: format!("Recipe \"{title}\" deployed successfully!"),
    }
}
