//! Collision system: shot-versus-missile proximity check.
//!
//! Runs after movement, so both actors have already advanced one tick. The
//! check uses their closest approach over that tick rather than the end
//! positions, otherwise a fast shot steps straight through the missile.

use hecs::{Entity, World};
use log::info;

use intercept_core::components::{Missile, Shot};
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;
use intercept_core::constants::DT;
use intercept_core::{MovingActor, Point2D};

/// Remove shot and missile when they came within `hit_radius` of each other
/// during the last tick.
pub fn run(
    world: &mut World,
    hit_radius: f64,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let missiles: Vec<(Entity, MovingActor)> = world
        .query::<(&MovingActor, &Missile)>()
        .iter()
        .map(|(entity, (actor, _))| (entity, *actor))
        .collect();

    for (shot_entity, (shot, _)) in world.query::<(&MovingActor, &Shot)>().iter() {
        for (missile_entity, missile) in &missiles {
            if despawn_buffer.contains(missile_entity) {
                continue;
            }
            if closest_approach(shot, missile, DT) <= hit_radius {
                info!(
                    "hit at ({:.2}, {:.2})",
                    missile.position.x, missile.position.y
                );
                events.push(SimEvent::TargetHit {
                    position: missile.position,
                });
                score.hits += 1;
                despawn_buffer.push(shot_entity);
                despawn_buffer.push(*missile_entity);
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Smallest distance between two actors over the `dt` seconds leading up to
/// their current positions, both moving in straight lines.
pub fn closest_approach(a: &MovingActor, b: &MovingActor, dt: f64) -> f64 {
    let offset = b.position - a.position;
    let closing = b.velocity() - a.velocity();
    let closing_sq = dot(closing, closing);

    // Time before the end of the tick at which the gap is smallest.
    let before = if closing_sq > 1e-12 {
        (dot(offset, closing) / closing_sq).clamp(0.0, dt)
    } else {
        0.0
    };
    (offset - closing * before).length()
}

fn dot(a: Point2D, b: Point2D) -> f64 {
    a.x * b.x + a.y * b.y
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use intercept_core::Heading;

    use super::*;

    #[test]
    fn test_closest_approach_catches_pass_through() {
        // Shot moved from y = -1 to y = 1 this tick, straight through a
        // parked missile at the origin.
        let shot = MovingActor::new(Point2D::new(0.0, 1.0), Heading::UP, 2.0);
        let missile = MovingActor::stationary(Point2D::ORIGIN);
        assert_abs_diff_eq!(shot.position.distance(&missile.position), 1.0);
        assert_abs_diff_eq!(closest_approach(&shot, &missile, 1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closest_approach_clamps_to_tick() {
        // Still closing at the end of the tick: the current gap is the minimum.
        let shot = MovingActor::new(Point2D::new(0.0, -3.0), Heading::UP, 1.0);
        let missile = MovingActor::stationary(Point2D::ORIGIN);
        assert_abs_diff_eq!(closest_approach(&shot, &missile, 1.0), 3.0, epsilon = 1e-12);

        // Already separating for the whole tick: the gap at the start was smaller.
        let receding = MovingActor::new(Point2D::new(0.0, 3.0), Heading::UP, 1.0);
        assert_abs_diff_eq!(closest_approach(&receding, &missile, 1.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closest_approach_same_velocity() {
        let a = MovingActor::new(Point2D::new(1.0, 0.0), Heading::UP, 5.0);
        let b = MovingActor::new(Point2D::new(4.0, 4.0), Heading::UP, 5.0);
        assert_abs_diff_eq!(closest_approach(&a, &b, 1.0), 5.0, epsilon = 1e-12);
    }
}
