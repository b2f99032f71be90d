//! Workflow facade: CRUD, simulated runs, and campaign views.

use apiflow_core::error::{CoreError, SimulatedFailure};
use apiflow_core::latency::{CREATE_DELAY, LIST_DELAY, LOOKUP_DELAY, RUN_DELAY};
use apiflow_core::types::DbId;
use apiflow_core::workflow::{
    campaign_type, CampaignProjection, RunOutcome, RunResult, WorkflowStatus,
};
use apiflow_db::models::workflow::{CampaignView, CreateWorkflow, UpdateWorkflow, Workflow};
use apiflow_db::repositories::WorkflowRepo;
use validator::Validate;

use crate::state::AppState;

pub struct WorkflowService;

impl WorkflowService {
    pub async fn list_all(state: &AppState) -> Vec<Workflow> {
        state.latency.pause(LIST_DELAY).await;
        WorkflowRepo::list_all(&state.pool).await
    }

    pub async fn get_by_id(state: &AppState, id: DbId) -> Result<Workflow, CoreError> {
        state.latency.pause(LOOKUP_DELAY).await;
        WorkflowRepo::find_by_id(&state.pool, id)
            .await
            .ok_or(not_found(id))
    }

    /// Create a draft workflow with the next id.
    pub async fn create(state: &AppState, input: CreateWorkflow) -> Result<Workflow, CoreError> {
        input.validate()?;
        state.latency.pause(CREATE_DELAY).await;
        let workflow = WorkflowRepo::create(&state.pool, input, chrono::Utc::now()).await;
        tracing::info!(workflow_id = workflow.id, name = %workflow.name, "Workflow created");
        Ok(workflow)
    }

    /// Shallow-merge `patch` into an existing workflow.
    pub async fn update(
        state: &AppState,
        id: DbId,
        patch: UpdateWorkflow,
    ) -> Result<Workflow, CoreError> {
        patch.validate()?;
        state.latency.pause(LIST_DELAY).await;
        let workflow = WorkflowRepo::update(&state.pool, id, patch)
            .await?
            .ok_or(not_found(id))?;
        tracing::info!(workflow_id = id, status = %workflow.status, "Workflow updated");
        Ok(workflow)
    }

    pub async fn delete(state: &AppState, id: DbId) -> Result<(), CoreError> {
        state.latency.pause(LOOKUP_DELAY).await;
        if !WorkflowRepo::delete(&state.pool, id).await {
            return Err(not_found(id));
        }
        tracing::info!(workflow_id = id, "Workflow deleted");
        Ok(())
    }

    /// Execute a workflow.
    ///
    /// Waits the fixed run time, then succeeds about 80% of the time. Either
    /// way the record's status, success rate, and `last_run` are updated; a
    /// failed run is reported as an execution error.
    pub async fn run(state: &AppState, id: DbId) -> Result<RunResult, CoreError> {
        if WorkflowRepo::find_by_id(&state.pool, id).await.is_none() {
            return Err(not_found(id));
        }

        state.latency.pause(RUN_DELAY).await;

        let outcome = RunOutcome::roll(state.outcomes.as_ref());
        let workflow = WorkflowRepo::record_run(&state.pool, id, outcome, chrono::Utc::now())
            .await
            .ok_or(not_found(id))?;

        if !outcome.succeeded {
            tracing::warn!(
                workflow_id = id,
                success_rate = workflow.success_rate,
                "Workflow run failed",
            );
            return Err(SimulatedFailure::ExecutionTimeout.into());
        }

        tracing::info!(
            workflow_id = id,
            nodes = workflow.nodes.len(),
            success_rate = workflow.success_rate,
            "Workflow run succeeded",
        );
        Ok(RunResult::completed(workflow.nodes.len()))
    }

    pub async fn active(state: &AppState) -> Vec<Workflow> {
        state.latency.pause(LOOKUP_DELAY).await;
        WorkflowRepo::list_by_status(&state.pool, WorkflowStatus::Active).await
    }

    pub fn campaign_type(name: &str) -> &'static str {
        campaign_type(name)
    }

    /// Every workflow with its campaign classification and projected figures.
    pub async fn campaigns(state: &AppState) -> Vec<CampaignView> {
        state.latency.pause(LOOKUP_DELAY).await;
        let outcomes = state.outcomes.as_ref();
        WorkflowRepo::list_all(&state.pool)
            .await
            .into_iter()
            .map(|workflow| CampaignView {
                campaign_type: campaign_type(&workflow.name),
                projection: CampaignProjection::draw(outcomes),
                workflow,
            })
            .collect()
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Workflow",
        id,
    }
}
