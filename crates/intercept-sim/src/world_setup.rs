//! Entity spawn factories for setting up the simulation world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use intercept_core::components::{Cannon, Missile, Shot};
use intercept_core::constants::*;
use intercept_core::{MovingActor, Point2D};
use intercept_predictor::aim_heading;

/// Spawn the static cannon at the bottom center of the arena.
pub fn spawn_cannon(world: &mut World) -> Entity {
    world.spawn((
        Cannon,
        MovingActor::stationary(Point2D::new(CANNON_X, CANNON_Y)),
    ))
}

/// Spawn a missile on explicit kinematics.
pub fn spawn_missile(world: &mut World, actor: MovingActor) -> Entity {
    world.spawn((Missile, actor))
}

/// Spawn a shot leaving `muzzle` toward `aim_point`.
pub fn spawn_shot(world: &mut World, muzzle: MovingActor, aim_point: Point2D, tick: u64) -> Entity {
    world.spawn((
        muzzle,
        Shot {
            aim_point,
            fired_tick: tick,
        },
    ))
}

/// Random missile kinematics: enters from the left, right, or top edge and
/// heads for a random point in the inner part of the arena.
pub fn random_missile(rng: &mut ChaCha8Rng) -> MovingActor {
    let position = match rng.gen_range(0..3) {
        0 => Point2D::new(-ARENA_HALF_WIDTH, rng.gen_range(0.0..ARENA_HALF_HEIGHT)),
        1 => Point2D::new(ARENA_HALF_WIDTH, rng.gen_range(0.0..ARENA_HALF_HEIGHT)),
        _ => Point2D::new(
            rng.gen_range(-ARENA_HALF_WIDTH..ARENA_HALF_WIDTH),
            ARENA_HALF_HEIGHT,
        ),
    };

    let half_w = ARENA_HALF_WIDTH * MISSILE_AIM_REGION;
    let half_h = ARENA_HALF_HEIGHT * MISSILE_AIM_REGION;
    let destination = Point2D::new(
        rng.gen_range(-half_w..half_w),
        rng.gen_range(-half_h..half_h),
    );

    let speed = rng.gen_range(MISSILE_SPEED_MIN..MISSILE_SPEED_MAX);
    MovingActor::new(position, aim_heading(position, destination), speed)
}

/// Remove every missile from the world.
pub fn despawn_missiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, _missile) in world.query_mut::<&Missile>() {
        despawn_buffer.push(entity);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
