//! Predictor configuration.
//!
//! Iteration counts arrive from outside (config files, commands) as signed
//! integers and are validated here, once, at the boundary.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ITERATIONS;
use crate::error::PredictError;

/// A validated, non-negative refinement pass count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Iterations(u32);

impl Iterations {
    pub const ZERO: Iterations = Iterations(0);

    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Self(DEFAULT_ITERATIONS)
    }
}

impl TryFrom<i64> for Iterations {
    type Error = PredictError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 0 {
            return Err(PredictError::DegenerateInput(count));
        }
        // Counts beyond u32::MAX saturate.
        Ok(Self(u32::try_from(count).unwrap_or(u32::MAX)))
    }
}

impl From<Iterations> for i64 {
    fn from(iterations: Iterations) -> Self {
        i64::from(iterations.0)
    }
}

/// How the predictor iterates and when it stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Maximum refinement passes.
    pub iterations: Iterations,
    /// Stop early once a pass moves the candidate by at most this distance.
    /// `None` always runs every pass.
    pub tolerance: Option<f64>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            iterations: Iterations::default(),
            tolerance: None,
        }
    }
}

impl PredictorConfig {
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations: Iterations::new(iterations),
            ..Default::default()
        }
    }
}
