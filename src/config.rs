//! Solver configuration.
//!
//! Every option is fixed for the lifetime of a solver. Defaults exist only as
//! named constants for callers to pick up; the engine never fills anything in.

use crate::error::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISCOUNT: f64 = 0.9;

pub const DEFAULT_THETA: f64 = 1e-5;

fn default_theta() -> f64 {
    DEFAULT_THETA
}

/// Which update discipline drives value iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Full synchronous sweep per round.
    Batch,

    /// One state per round, cycling through the state enumeration.
    Cyclic,

    /// Largest Bellman residual first, waking predecessors whose residual exceeds `theta`.
    PrioritizedSweeping {
        #[serde(default = "default_theta")]
        theta: f64,
    },
}

impl UpdateStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            UpdateStrategy::Batch => "batch",
            UpdateStrategy::Cyclic => "cyclic",
            UpdateStrategy::PrioritizedSweeping { .. } => "prioritized_sweeping",
        }
    }

    /// Conventional iteration budget for this strategy. Cyclic rounds touch a
    /// single state, hence the larger budget.
    pub fn default_iterations(&self) -> usize {
        match self {
            UpdateStrategy::Batch => 100,
            UpdateStrategy::Cyclic => 1000,
            UpdateStrategy::PrioritizedSweeping { .. } => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub discount: f64,
    pub iterations: usize,
    #[serde(flatten)]
    pub strategy: UpdateStrategy,
}

impl SolverConfig {
    pub fn new(strategy: UpdateStrategy, discount: f64, iterations: usize) -> Self {
        Self {
            discount,
            iterations,
            strategy,
        }
    }

    pub fn batch(discount: f64, iterations: usize) -> Self {
        Self::new(UpdateStrategy::Batch, discount, iterations)
    }

    pub fn cyclic(discount: f64, iterations: usize) -> Self {
        Self::new(UpdateStrategy::Cyclic, discount, iterations)
    }

    pub fn prioritized_sweeping(discount: f64, iterations: usize, theta: f64) -> Self {
        Self::new(
            UpdateStrategy::PrioritizedSweeping { theta },
            discount,
            iterations,
        )
    }

    /// Parses and validates a config such as
    /// `{"strategy": "prioritized_sweeping", "discount": 0.9, "iterations": 100}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(json).map_err(JsonError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.discount > 0. && self.discount <= 1.) {
            return Err(SolverError::InvalidDiscount(self.discount));
        }

        if self.iterations == 0 {
            return Err(SolverError::ZeroIterations);
        }

        if let UpdateStrategy::PrioritizedSweeping { theta } = self.strategy {
            if !(theta.is_finite() && theta > 0.) {
                return Err(SolverError::InvalidTheta(theta));
            }
        }

        Ok(())
    }
}
