//! Workflow model and DTOs.

use apiflow_core::types::{DbId, Timestamp};
use apiflow_core::workflow::WorkflowStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One step within a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    /// `api`, `trigger`, `condition`, `delay`, `transform`, ...
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub nodes: Vec<WorkflowNode>,
    /// Opaque to the backend.
    #[serde(default = "empty_connections")]
    pub connections: serde_json::Value,
    pub status: WorkflowStatus,
    /// Always within `[0, 100]`.
    pub success_rate: f64,
    pub last_run: Option<Timestamp>,
    pub created_at: Timestamp,
}

fn empty_connections() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// DTO for creating a workflow.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkflow {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default = "empty_connections")]
    pub connections: serde_json::Value,
}

impl CreateWorkflow {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            nodes: Vec::new(),
            connections: empty_connections(),
        }
    }
}

/// DTO for a shallow-merge update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflow {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub nodes: Option<Vec<WorkflowNode>>,
    pub connections: Option<serde_json::Value>,
    pub status: Option<WorkflowStatus>,
    #[validate(range(min = 0.0, max = 100.0, message = "successRate must be within 0-100"))]
    pub success_rate: Option<f64>,
}

/// A workflow presented as a marketing campaign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignView {
    #[serde(flatten)]
    pub workflow: Workflow,
    pub campaign_type: &'static str,
    #[serde(flatten)]
    pub projection: apiflow_core::workflow::CampaignProjection,
}
