//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Kinematics use
//! [`MovingActor`](crate::types::MovingActor) directly as a component.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// Marker for the static cannon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cannon;

/// Marker for the target missile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile;

/// A shot in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    /// Aim point the shot was fired at.
    pub aim_point: Point2D,
    /// Tick the shot was fired on.
    pub fired_tick: u64,
}
