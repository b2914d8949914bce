//! Arena bounds.

use intercept_core::constants::{ARENA_HALF_HEIGHT, ARENA_HALF_WIDTH};
use intercept_core::Point2D;

/// Whether `point` lies inside the arena grown by `margin` on every side.
pub fn contains(point: &Point2D, margin: f64) -> bool {
    point.x.abs() <= ARENA_HALF_WIDTH + margin && point.y.abs() <= ARENA_HALF_HEIGHT + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges_and_margin() {
        assert!(contains(&Point2D::ORIGIN, 0.0));
        assert!(contains(&Point2D::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT), 0.0));
        assert!(!contains(&Point2D::new(ARENA_HALF_WIDTH + 0.5, 0.0), 0.0));
        assert!(contains(&Point2D::new(ARENA_HALF_WIDTH + 0.5, 0.0), 1.0));
        assert!(!contains(&Point2D::new(0.0, -ARENA_HALF_HEIGHT - 2.0), 1.0));
    }
}
