//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new missile entered the arena.
    TargetSpawned {
        position: Point2D,
        heading_degrees: f64,
        speed: f64,
    },
    /// The cannon fired toward a predicted aim point.
    ShotFired {
        aim_point: Point2D,
        time_to_intercept: f64,
    },
    /// The shot reached the missile.
    TargetHit { position: Point2D },
    /// The shot left the arena without hitting anything.
    ShotExpired,
    /// The missile left the arena.
    TargetEscaped,
    /// No firing solution: the shot cannot reach the target.
    Unreachable,
}
