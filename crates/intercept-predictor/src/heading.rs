//! Turning an aim point into a heading for the shooter.

use intercept_core::{Heading, Point2D};

/// Heading from `shooter_pos` toward `aim_point`.
///
/// Uses the same convention as [`Heading::direction`]: `atan2(dy, dx)`
/// shifted by -90° so that 0° points along +y. A shot fired along the
/// returned heading passes through `aim_point`. Coincident points have no
/// bearing and return 0°.
pub fn aim_heading(shooter_pos: Point2D, aim_point: Point2D) -> Heading {
    Heading::from_direction(aim_point - shooter_pos)
}
