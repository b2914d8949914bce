//! One refinement pass of the intercept estimate.

use intercept_core::{MovingActor, Point2D, PredictError};

/// Re-estimate the intercept point from a previous candidate.
///
/// Computes how long a shot from `shooter_pos` takes to reach `candidate`,
/// then returns where `target` will be after that long if it holds its
/// current heading and speed. The motion model is first order: target
/// acceleration and turns during the flight are ignored.
///
/// Returns [`PredictError::Unreachable`] when `shooter_speed` is zero or the
/// flight time overflows, and [`PredictError::Diverged`] when the new
/// candidate is not finite. A candidate at the shooter position is valid and yields the target's
/// current position (zero flight time).
pub fn refine(
    shooter_pos: Point2D,
    candidate: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
) -> Result<Point2D, PredictError> {
    validate(shooter_pos, shooter_speed, target)?;
    if !candidate.is_finite() {
        return Err(PredictError::NonFinite);
    }
    refine_unchecked(shooter_pos, candidate, shooter_speed, target)
}

/// Validate the inputs shared by every pass of a prediction.
pub(crate) fn validate(
    shooter_pos: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
) -> Result<(), PredictError> {
    if !shooter_pos.is_finite() || !target.position.is_finite() || !target.heading.is_finite() {
        return Err(PredictError::NonFinite);
    }
    for speed in [shooter_speed, target.speed] {
        if !speed.is_finite() || speed < 0.0 {
            return Err(PredictError::InvalidSpeed { value: speed });
        }
    }
    if shooter_speed == 0.0 {
        return Err(PredictError::Unreachable);
    }
    Ok(())
}

/// The pass itself. Callers must have run [`validate`].
pub(crate) fn refine_unchecked(
    shooter_pos: Point2D,
    candidate: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
) -> Result<Point2D, PredictError> {
    let travel_time = flight_time(shooter_pos, candidate, shooter_speed)?;
    let displacement = travel_time * target.speed;
    let next = target.position + target.heading.direction() * displacement;
    if !next.is_finite() {
        return Err(PredictError::Diverged);
    }
    Ok(next)
}

/// Shot flight time from `shooter_pos` to `point`.
///
/// A distance that overflows means the candidate ran off to infinity; a
/// finite distance with an overflowing time means the shot is too slow.
pub(crate) fn flight_time(
    shooter_pos: Point2D,
    point: Point2D,
    shooter_speed: f64,
) -> Result<f64, PredictError> {
    let distance = shooter_pos.distance(&point);
    if !distance.is_finite() {
        return Err(PredictError::Diverged);
    }
    let time = distance / shooter_speed;
    if !time.is_finite() {
        return Err(PredictError::Unreachable);
    }
    Ok(time)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use intercept_core::Heading;

    use super::*;

    fn falling_target() -> MovingActor {
        MovingActor::new(Point2D::new(0.0, 10.0), Heading::from_degrees(180.0), 0.5)
    }

    #[test]
    fn test_refine_first_pass_moves_along_heading() {
        // 10 units away at speed 1 => 10s flight, target drops 5 units.
        let next = refine(Point2D::ORIGIN, Point2D::new(0.0, 10.0), 1.0, &falling_target()).unwrap();
        assert_abs_diff_eq!(next.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_refine_uses_candidate_distance_not_target_distance() {
        let next = refine(Point2D::ORIGIN, Point2D::new(0.0, 5.0), 1.0, &falling_target()).unwrap();
        assert_abs_diff_eq!(next.y, 7.5, epsilon = 1e-9);
    }

    #[test]
    fn test_refine_zero_speed_is_unreachable() {
        // Chosen policy: a shooter that cannot move gets an error, not a
        // fallback aim point.
        let result = refine(Point2D::ORIGIN, Point2D::new(0.0, 10.0), 0.0, &falling_target());
        assert_eq!(result, Err(PredictError::Unreachable));
    }

    #[test]
    fn test_refine_tiny_speed_overflow_is_unreachable() {
        let target = MovingActor::new(Point2D::new(0.0, 10.0), Heading::UP, 1.0);
        let result = refine(Point2D::ORIGIN, target.position, 1e-320, &target);
        assert_eq!(result, Err(PredictError::Unreachable));
    }

    #[test]
    fn test_refine_overflowing_candidate_diverges() {
        let target = MovingActor::new(Point2D::new(0.0, 10.0), Heading::UP, 4.0);
        let far = refine(Point2D::ORIGIN, Point2D::new(0.0, 1e200), 1.0, &target);
        assert_eq!(far, Err(PredictError::Diverged));

        let runaway = MovingActor { speed: f64::MAX, ..target };
        let result = refine(Point2D::ORIGIN, target.position, 1.0, &runaway);
        assert_eq!(result, Err(PredictError::Diverged));
    }

    #[test]
    fn test_refine_candidate_at_shooter_is_valid() {
        let target = falling_target();
        let next = refine(Point2D::ORIGIN, Point2D::ORIGIN, 1.0, &target).unwrap();
        assert_eq!(next, target.position);
    }

    #[test]
    fn test_refine_rejects_bad_inputs() {
        let target = falling_target();
        assert_eq!(
            refine(Point2D::ORIGIN, Point2D::new(0.0, 1.0), -1.0, &target),
            Err(PredictError::InvalidSpeed { value: -1.0 })
        );
        assert_eq!(
            refine(Point2D::new(f64::NAN, 0.0), Point2D::new(0.0, 1.0), 1.0, &target),
            Err(PredictError::NonFinite)
        );
        assert_eq!(
            refine(Point2D::ORIGIN, Point2D::new(0.0, f64::INFINITY), 1.0, &target),
            Err(PredictError::NonFinite)
        );
        let reversing = MovingActor { speed: -0.5, ..target };
        assert!(matches!(
            refine(Point2D::ORIGIN, Point2D::new(0.0, 1.0), 1.0, &reversing),
            Err(PredictError::InvalidSpeed { .. })
        ));
    }
}
