//! Target spawner: keeps exactly one missile in the arena.

use hecs::World;
use log::info;
use rand_chacha::ChaCha8Rng;

use intercept_core::components::Missile;
use intercept_core::events::SimEvent;

use crate::world_setup;

/// Spawn a random missile when none exists.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<SimEvent>) {
    if world.query_mut::<&Missile>().into_iter().next().is_some() {
        return;
    }

    let actor = world_setup::random_missile(rng);
    info!(
        "missile spawned at ({:.2}, {:.2}) heading {:.1} speed {:.2}",
        actor.position.x,
        actor.position.y,
        actor.heading.degrees(),
        actor.speed
    );
    world_setup::spawn_missile(world, actor);
    events.push(SimEvent::TargetSpawned {
        position: actor.position,
        heading_degrees: actor.heading.degrees(),
        speed: actor.speed,
    });
}
