//! Cleanup system: removes actors that left the arena.

use hecs::{Entity, World};
use log::debug;

use intercept_core::components::{Missile, Shot};
use intercept_core::constants::ARENA_MARGIN;
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;
use intercept_core::MovingActor;

use crate::arena;

/// Remove shots and missiles beyond the arena margin.
/// An escaping shot is a miss; an escaping missile is an escape.
pub fn run(
    world: &mut World,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (actor, _shot)) in world.query_mut::<(&MovingActor, &Shot)>() {
        if !arena::contains(&actor.position, ARENA_MARGIN) {
            debug!("shot left the arena");
            events.push(SimEvent::ShotExpired);
            score.misses += 1;
            despawn_buffer.push(entity);
        }
    }

    for (entity, (actor, _missile)) in world.query_mut::<(&MovingActor, &Missile)>() {
        if !arena::contains(&actor.position, ARENA_MARGIN) {
            debug!("missile left the arena");
            events.push(SimEvent::TargetEscaped);
            score.escapes += 1;
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
