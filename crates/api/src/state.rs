use std::sync::Arc;

use apiflow_core::latency::LatencyProfile;
use apiflow_core::outcome::{SeededOutcomes, SharedOutcomes, ThreadOutcomes};
use apiflow_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory store.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of every randomized outcome.
    pub outcomes: SharedOutcomes,
    /// Artificial delay applied by the services.
    pub latency: LatencyProfile,
}

impl AppState {
    /// Assemble state from configuration: seeded outcomes when `OUTCOME_SEED`
    /// is set, thread RNG otherwise.
    pub fn from_config(pool: DbPool, config: ServerConfig) -> Self {
        let outcomes: SharedOutcomes = match config.outcome_seed {
            Some(seed) => Arc::new(SeededOutcomes::new(seed)),
            None => Arc::new(ThreadOutcomes),
        };
        Self {
            pool,
            latency: LatencyProfile::new(config.latency_scale),
            config: Arc::new(config),
            outcomes,
        }
    }
}
