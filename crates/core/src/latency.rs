//! Artificial latency applied by the facades before touching the store.

use std::time::Duration;

/// Delay used by plain list/get operations on the catalog and recipes.
pub const LIST_DELAY: Duration = Duration::from_millis(300);
/// Delay used by single-record lookups and small queries.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(200);
/// Delay used by search operations.
pub const SEARCH_DELAY: Duration = Duration::from_millis(250);
/// Delay used when creating a workflow.
pub const CREATE_DELAY: Duration = Duration::from_millis(400);
/// Fixed deployment time for a recipe.
pub const DEPLOY_DELAY: Duration = Duration::from_millis(1500);
/// Fixed execution time for a workflow run.
pub const RUN_DELAY: Duration = Duration::from_millis(2000);
/// Lower bound of the randomized test-call delay.
pub const TEST_CALL_MIN_DELAY_MS: f64 = 500.0;
/// Width of the randomized test-call delay window.
pub const TEST_CALL_DELAY_SPAN_MS: f64 = 1000.0;

/// Largest accepted latency multiplier.
pub const MAX_LATENCY_SCALE: f64 = 100.0;

/// Scales every simulated delay by a constant factor.
///
/// A scale of `0.0` disables sleeping entirely, which is what tests use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyProfile {
    scale: f64,
}

impl LatencyProfile {
    /// Create a profile; negative or non-finite scales are treated as `0.0`
    /// and anything above [`MAX_LATENCY_SCALE`] is capped.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale.min(MAX_LATENCY_SCALE)
        } else {
            0.0
        };
        Self { scale }
    }

    /// A profile that never sleeps.
    pub fn instant() -> Self {
        Self { scale: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The delay actually applied for a nominal `base` duration.
    ///
    /// Falls back to `base` if the product is not representable.
    pub fn scaled(&self, base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() * self.scale).unwrap_or(base)
    }

    /// Sleep for the scaled equivalent of `base`.
    pub async fn pause(&self, base: Duration) {
        let delay = self.scaled(base);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scales_collapse_to_instant() {
        assert_eq!(LatencyProfile::new(-1.0), LatencyProfile::instant());
        assert_eq!(LatencyProfile::new(f64::NAN), LatencyProfile::instant());
        assert_eq!(LatencyProfile::new(f64::INFINITY), LatencyProfile::instant());
    }

    #[test]
    fn oversized_scales_are_capped() {
        let profile = LatencyProfile::new(1e30);
        assert_eq!(profile.scale(), MAX_LATENCY_SCALE);
        assert_eq!(profile.scaled(RUN_DELAY), Duration::from_secs(200));
    }

    #[test]
    fn scaled_never_panics_on_huge_bases() {
        let profile = LatencyProfile::new(MAX_LATENCY_SCALE);
        assert_eq!(profile.scaled(Duration::MAX), Duration::MAX);
    }

    #[test]
    fn scaled_multiplies_base() {
        let half = LatencyProfile::new(0.5);
        assert_eq!(half.scaled(RUN_DELAY), Duration::from_millis(1000));
        assert_eq!(LatencyProfile::default().scaled(DEPLOY_DELAY), DEPLOY_DELAY);
    }

    #[tokio::test]
    async fn instant_profile_does_not_sleep() {
        let start = std::time::Instant::now();
        LatencyProfile::instant().pause(RUN_DELAY).await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
