use crate::types::DbId;

/// Randomized business-outcome failures used to model real-world unreliability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimulatedFailure {
    #[error("API request failed: Network timeout")]
    NetworkTimeout,

    #[error("Deployment failed: Missing API credentials")]
    MissingCredentials,

    #[error("Workflow execution failed: API timeout in node 2")]
    ExecutionTimeout,
}

impl SimulatedFailure {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn code(self) -> &'static str {
        match self {
            Self::NetworkTimeout => "NETWORK_TIMEOUT",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::ExecutionTimeout => "EXECUTION_FAILED",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Simulated(#[from] SimulatedFailure),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
