//! Injectable source of random draws for simulated outcomes.
//!
//! Every randomized decision in the system (success/failure rolls, decorative
//! durations, success-rate nudges, projected campaign figures) pulls a uniform
//! sample in `[0, 1)` from an [`OutcomeSource`]. Production uses the thread
//! RNG; tests inject [`SeededOutcomes`] or [`ScriptedOutcomes`] so specific
//! paths can be forced without relying on statistical convergence.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A supplier of uniform samples in `[0, 1)`.
pub trait OutcomeSource: Send + Sync {
    /// Draw the next sample. Must be in `[0, 1)`.
    fn sample(&self) -> f64;

    /// Draw a value uniformly from `[low, low + span)`.
    fn sample_range(&self, low: f64, span: f64) -> f64 {
        low + self.sample() * span
    }

    /// Draw an integer uniformly from `[low, low + span)`.
    fn sample_int(&self, low: i64, span: i64) -> i64 {
        low + (self.sample() * span as f64).floor() as i64
    }
}

/// Shared handle type stored in application state.
pub type SharedOutcomes = Arc<dyn OutcomeSource>;

/// Outcome source backed by the per-thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadOutcomes;

impl OutcomeSource for ThreadOutcomes {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic outcome source seeded from a `u64`.
#[derive(Debug)]
pub struct SeededOutcomes {
    rng: Mutex<StdRng>,
}

impl SeededOutcomes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OutcomeSource for SeededOutcomes {
    fn sample(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random::<f64>()
    }
}

/// Replays a fixed script of samples, cycling when exhausted.
///
/// Values are clamped into `[0, 1)` so a script can use `1.0` to mean
/// "the highest possible draw".
#[derive(Debug)]
pub struct ScriptedOutcomes {
    script: Vec<f64>,
    cursor: Mutex<VecDeque<f64>>,
}

impl ScriptedOutcomes {
    pub fn new(script: impl Into<Vec<f64>>) -> Self {
        let script: Vec<f64> = script
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, MAX_SAMPLE))
            .collect();
        let script = if script.is_empty() { vec![0.0] } else { script };
        Self {
            cursor: Mutex::new(script.iter().copied().collect()),
            script,
        }
    }

    /// A source that always returns the same sample.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

/// Largest `f64` strictly below 1.0.
const MAX_SAMPLE: f64 = 1.0 - f64::EPSILON;

impl OutcomeSource for ScriptedOutcomes {
    fn sample(&self) -> f64 {
        let mut cursor = self.cursor.lock().unwrap_or_else(|e| e.into_inner());
        if cursor.is_empty() {
            cursor.extend(self.script.iter().copied());
        }
        cursor.pop_front().unwrap_or(0.0)
    }
}
