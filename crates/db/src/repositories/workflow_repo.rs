//! Repository for workflows.

use apiflow_core::error::CoreError;
use apiflow_core::types::{DbId, Timestamp};
use apiflow_core::workflow::{RunOutcome, WorkflowStatus};

use crate::models::workflow::{CreateWorkflow, UpdateWorkflow, Workflow};
use crate::store::next_id;
use crate::DbPool;

pub struct WorkflowRepo;

impl WorkflowRepo {
    pub async fn list_all(pool: &DbPool) -> Vec<Workflow> {
        pool.workflows.read().await.clone()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Workflow> {
        pool.workflows
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub async fn list_by_status(pool: &DbPool, status: WorkflowStatus) -> Vec<Workflow> {
        pool.workflows
            .read()
            .await
            .iter()
            .filter(|w| w.status == status)
            .cloned()
            .collect()
    }

    /// Insert a new draft workflow with the next id.
    pub async fn create(pool: &DbPool, input: CreateWorkflow, now: Timestamp) -> Workflow {
        let mut workflows = pool.workflows.write().await;
        let workflow = Workflow {
            id: next_id(workflows.iter().map(|w| w.id)),
            name: input.name,
            description: input.description,
            nodes: input.nodes,
            connections: input.connections,
            status: WorkflowStatus::Draft,
            success_rate: 0.0,
            last_run: None,
            created_at: now,
        };
        workflows.push(workflow.clone());
        workflow
    }

    /// Shallow-merge `patch` into the workflow.
    ///
    /// Returns `Ok(None)` if the id is unknown. An explicit status change that
    /// the status machine forbids fails with `Conflict` and leaves the record
    /// untouched.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        patch: UpdateWorkflow,
    ) -> Result<Option<Workflow>, CoreError> {
        let mut workflows = pool.workflows.write().await;
        let Some(workflow) = workflows.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };

        let status = match patch.status {
            Some(next) => workflow.status.transition_to(next)?,
            None => workflow.status,
        };

        workflow.status = status;
        if let Some(name) = patch.name {
            workflow.name = name;
        }
        if let Some(description) = patch.description {
            workflow.description = description;
        }
        if let Some(nodes) = patch.nodes {
            workflow.nodes = nodes;
        }
        if let Some(connections) = patch.connections {
            workflow.connections = connections;
        }
        if let Some(rate) = patch.success_rate {
            workflow.success_rate = rate;
        }
        Ok(Some(workflow.clone()))
    }

    /// Remove a workflow. Test-history rows are not touched.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        let mut workflows = pool.workflows.write().await;
        let before = workflows.len();
        workflows.retain(|w| w.id != id);
        workflows.len() != before
    }

    /// Apply a decided run outcome: status, clamped success rate, and
    /// `last_run`, all under one write guard.
    pub async fn record_run(
        pool: &DbPool,
        id: DbId,
        outcome: RunOutcome,
        now: Timestamp,
    ) -> Option<Workflow> {
        let mut workflows = pool.workflows.write().await;
        let workflow = workflows.iter_mut().find(|w| w.id == id)?;
        workflow.last_run = Some(now);
        workflow.status = workflow.status.after_run(outcome.succeeded);
        workflow.success_rate = outcome.apply_to_rate(workflow.success_rate);
        Some(workflow.clone())
    }
}
