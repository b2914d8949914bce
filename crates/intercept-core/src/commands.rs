//! Commands sent to the simulation by its driver.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Freeze the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Change the predictor's refinement pass count. Negative values are rejected.
    SetIterations { iterations: i64 },
    /// Change the shot muzzle speed. Zero makes every target unreachable.
    SetShotSpeed { speed: f64 },
    /// Replace the current missile with one on explicit kinematics.
    SpawnTarget {
        position: Point2D,
        heading_degrees: f64,
        speed: f64,
    },
}
