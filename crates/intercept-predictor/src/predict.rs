//! Iteration driver and termination policy.
//!
//! Starting from the target's current position (the "stationary target"
//! guess), each pass of [`refine`](crate::refine) re-aims at where the
//! target will be after the previous guess's flight time. The pass map is a
//! contraction with factor at most `target.speed / shooter_speed`, so for
//! targets slower than the shot the candidate converges geometrically on the
//! true intercept point. At ratio 1 or above nothing is guaranteed; the
//! candidate after the configured passes is returned as long as it stays
//! finite, and [`PredictError::Diverged`] is returned once it does not.

use log::{debug, trace as trace_log};

use intercept_core::config::PredictorConfig;
use intercept_core::{MovingActor, Point2D, PredictError, PredictionResult};

use crate::refine::{flight_time, refine_unchecked, validate};

/// Predict the aim point after exactly `iterations` refinement passes.
///
/// Zero passes aims at the target's current position.
pub fn predict(
    shooter_pos: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
    iterations: u32,
) -> Result<PredictionResult, PredictError> {
    Predictor::new(PredictorConfig::with_iterations(iterations)).predict(
        shooter_pos,
        shooter_speed,
        target,
    )
}

/// Every candidate visited by `iterations` passes, starting with the
/// target's current position. Always `iterations + 1` points long.
pub fn trace(
    shooter_pos: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
    iterations: u32,
) -> Result<Vec<Point2D>, PredictError> {
    validate(shooter_pos, shooter_speed, target)?;

    let mut candidates = Vec::with_capacity(iterations as usize + 1);
    let mut candidate = target.position;
    candidates.push(candidate);
    for _ in 0..iterations {
        candidate = refine_unchecked(shooter_pos, candidate, shooter_speed, target)?;
        candidates.push(candidate);
    }
    Ok(candidates)
}

/// Configured predictor: a pass budget plus an optional early exit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Run up to `config.iterations` passes, stopping early once a pass moves
    /// the candidate by no more than `config.tolerance`.
    pub fn predict(
        &self,
        shooter_pos: Point2D,
        shooter_speed: f64,
        target: &MovingActor,
    ) -> Result<PredictionResult, PredictError> {
        validate(shooter_pos, shooter_speed, target)?;

        let max_passes = self.config.iterations.get();
        if target.speed >= shooter_speed {
            debug!(
                "target speed {:.3} >= shot speed {:.3}: refinement may not converge",
                target.speed, shooter_speed
            );
        }

        let mut candidate = target.position;
        let mut residual = 0.0;
        let mut passes = 0;
        while passes < max_passes {
            let next = refine_unchecked(shooter_pos, candidate, shooter_speed, target)
                .inspect_err(|e| debug!("pass {} of {max_passes} failed: {e}", passes + 1))?;
            residual = next.distance(&candidate);
            if !residual.is_finite() {
                debug!("pass {} of {max_passes}: step overflowed", passes + 1);
                return Err(PredictError::Diverged);
            }
            candidate = next;
            passes += 1;
            trace_log!(
                "pass {passes}: candidate ({:.4}, {:.4}), moved {residual:.6}",
                candidate.x,
                candidate.y
            );

            if let Some(tolerance) = self.config.tolerance {
                if residual <= tolerance {
                    debug!("converged after {passes}/{max_passes} passes (residual {residual:.6})");
                    break;
                }
            }
        }

        Ok(PredictionResult {
            aim_point: candidate,
            time_to_intercept: flight_time(shooter_pos, candidate, shooter_speed)?,
            iterations_run: passes,
            residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use intercept_core::config::Iterations;
    use intercept_core::Heading;

    use super::*;

    fn falling_target() -> MovingActor {
        MovingActor::new(Point2D::new(0.0, 10.0), Heading::from_degrees(180.0), 0.5)
    }

    #[test]
    fn test_zero_iterations_aims_at_current_position() {
        let target = falling_target();
        let result = predict(Point2D::ORIGIN, 1.0, &target, 0).unwrap();
        assert_eq!(result.aim_point, target.position);
        assert_eq!(result.iterations_run, 0);
        assert_eq!(result.residual, 0.0);
        assert_abs_diff_eq!(result.time_to_intercept, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_head_on_scenario_after_three_passes() {
        // Candidates: 10 -> 5 -> 7.5 -> 6.25
        let result = predict(Point2D::ORIGIN, 1.0, &falling_target(), 3).unwrap();
        assert!(result.aim_point.y < 10.0);
        assert_abs_diff_eq!(result.aim_point.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.aim_point.y, 6.25, epsilon = 1e-9);
        assert_abs_diff_eq!(result.residual, 1.25, epsilon = 1e-9);
    }

    #[test]
    fn test_head_on_scenario_converges_to_analytic_intercept() {
        // Closing speed 1.5 over a 10 unit gap.
        let analytic_y = 10.0 / 1.5;
        let result = predict(Point2D::ORIGIN, 1.0, &falling_target(), 10).unwrap();
        assert_abs_diff_eq!(result.aim_point.y, analytic_y, epsilon = 0.05);
        assert_abs_diff_eq!(result.time_to_intercept, analytic_y, epsilon = 0.05);
    }

    #[test]
    fn test_trace_matches_predict() {
        let target = falling_target();
        let points = trace(Point2D::ORIGIN, 1.0, &target, 4).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], target.position);
        let result = predict(Point2D::ORIGIN, 1.0, &target, 4).unwrap();
        assert_eq!(points[4], result.aim_point);
    }

    #[test]
    fn test_tolerance_stops_early() {
        let predictor = Predictor::new(PredictorConfig {
            iterations: Iterations::new(100),
            tolerance: Some(1e-6),
        });
        let result = predictor
            .predict(Point2D::ORIGIN, 1.0, &falling_target())
            .unwrap();
        assert!(result.iterations_run < 100, "ran {} passes", result.iterations_run);
        assert!(result.is_converged(1e-6));
        assert_abs_diff_eq!(result.aim_point.y, 10.0 / 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_without_tolerance_runs_every_pass() {
        let predictor = Predictor::new(PredictorConfig::with_iterations(40));
        let result = predictor
            .predict(Point2D::ORIGIN, 1.0, &falling_target())
            .unwrap();
        assert_eq!(result.iterations_run, 40);
    }

    #[test]
    fn test_default_predictor_runs_three_passes() {
        let result = Predictor::default()
            .predict(Point2D::ORIGIN, 1.0, &falling_target())
            .unwrap();
        assert_eq!(result.iterations_run, 3);
    }

    #[test]
    fn test_unreachable_even_with_zero_passes() {
        let result = predict(Point2D::ORIGIN, 0.0, &falling_target(), 0);
        assert_eq!(result, Err(PredictError::Unreachable));
        assert_eq!(
            trace(Point2D::ORIGIN, 0.0, &falling_target(), 3),
            Err(PredictError::Unreachable)
        );
    }

    #[test]
    fn test_target_on_shooter_is_valid() {
        let target = MovingActor::new(Point2D::ORIGIN, Heading::from_degrees(45.0), 3.0);
        let result = predict(Point2D::ORIGIN, 1.0, &target, 5).unwrap();
        assert_eq!(result.aim_point, Point2D::ORIGIN);
        assert_eq!(result.time_to_intercept, 0.0);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_fast_target_still_returns_bounded_candidate() {
        // Target outruns the shot: no convergence, but no error either.
        let target = MovingActor::new(Point2D::new(0.0, 10.0), Heading::from_degrees(0.0), 2.0);
        let result = predict(Point2D::ORIGIN, 1.0, &target, 3).unwrap();
        assert!(result.aim_point.is_finite());
        assert!(result.aim_point.y > 10.0);
        assert!(!result.is_converged(1.0));
    }

    #[test]
    fn test_fleeing_target_diverges_instead_of_nan() {
        // Twice the shot speed: each pass roughly doubles the candidate.
        let target = MovingActor::new(Point2D::new(0.0, 10.0), Heading::UP, 2.0);
        assert_eq!(
            predict(Point2D::ORIGIN, 1.0, &target, 1100),
            Err(PredictError::Diverged)
        );
        assert_eq!(
            trace(Point2D::ORIGIN, 1.0, &target, 1100),
            Err(PredictError::Diverged)
        );
        // Short budgets stay finite.
        assert!(predict(Point2D::ORIGIN, 1.0, &target, 20).unwrap().aim_point.is_finite());
    }

    #[test]
    fn test_tiny_shot_speed_is_unreachable() {
        let target = MovingActor::new(Point2D::new(0.0, 10.0), Heading::UP, 1.0);
        for iterations in [0, 1, 3] {
            assert_eq!(
                predict(Point2D::ORIGIN, 1e-320, &target, iterations),
                Err(PredictError::Unreachable),
                "{iterations} passes"
            );
        }
    }
}
