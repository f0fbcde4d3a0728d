use crate::error::{EstimateError, Result};

/// Percentage of the target piece count searched in either direction
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Extra badness per piece away from the target
pub const DEFAULT_PENALTY: f64 = 1.005;

/// Tuning knobs of the search.
///
/// `threshold` sets the width of the tolerance band around the target piece count: with the
/// default of `0.1` every count from 90% to 110% of the target is considered. `penalty` is the
/// base of the exponential distance penalty and must be greater than `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    threshold: f64,
    penalty: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            threshold: DEFAULT_THRESHOLD,
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl EstimatorConfig {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn threshold_value(&self) -> f64 {
        self.threshold
    }

    pub fn penalty_value(&self) -> f64 {
        self.penalty
    }

    /// Checks that both knobs are in their allowed ranges
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(EstimateError::InvalidThreshold(self.threshold));
        }
        if !self.penalty.is_finite() || self.penalty <= 1.0 {
            return Err(EstimateError::InvalidPenalty(self.penalty));
        }
        Ok(())
    }
}
