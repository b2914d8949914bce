//! Closed-form intercept for straight-line targets.
//!
//! Solves `|D + v t| = s t` for the smallest `t >= 0`, where `D` is the
//! target's offset from the shooter, `v` its velocity and `s` the shot speed.
//! Squaring gives `(v·v - s²) t² + 2 (D·v) t + D·D = 0`. Used to measure how
//! far the iterative estimate is from the exact answer.

use intercept_core::{MovingActor, Point2D};

use crate::refine::validate;

/// Exact intercept of a straight-line target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub point: Point2D,
    /// Shot flight time to `point`.
    pub time: f64,
}

const EPSILON: f64 = 1e-12;

/// Exact intercept point and time, or `None` if the shot can never catch
/// the target. Inputs the iterative predictor rejects also give `None`.
pub fn solve_intercept(
    shooter_pos: Point2D,
    shooter_speed: f64,
    target: &MovingActor,
) -> Option<Intercept> {
    validate(shooter_pos, shooter_speed, target).ok()?;

    let offset = target.position - shooter_pos;
    let velocity = target.velocity();

    let a = dot(velocity, velocity) - shooter_speed * shooter_speed;
    let b = 2.0 * dot(offset, velocity);
    let c = dot(offset, offset);

    let time = if c < EPSILON {
        Some(0.0)
    } else if a.abs() < EPSILON {
        // Equal speeds: the equation is linear.
        (b < 0.0).then(|| -c / b)
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            None
        } else {
            // Cancellation-free form of the quadratic formula. q != 0 since c > 0.
            let q = -0.5 * (b + b.signum() * disc.sqrt());
            let t1 = q / a;
            let t2 = c / q;
            match (t1 >= 0.0, t2 >= 0.0) {
                (true, true) => Some(t1.min(t2)),
                (true, false) => Some(t1),
                (false, true) => Some(t2),
                (false, false) => None,
            }
        }
    }?;

    Some(Intercept {
        point: target.position_after(time),
        time,
    })
}

fn dot(a: Point2D, b: Point2D) -> f64 {
    a.x * b.x + a.y * b.y
}
