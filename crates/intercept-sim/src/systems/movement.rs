//! Kinematic integration system.
//!
//! Advances every actor along its heading: position += direction * speed * dt.
//! Uses the same heading convention as the predictor, so a shot fired along
//! an aim heading actually passes through the aim point.

use hecs::World;

use intercept_core::constants::DT;
use intercept_core::MovingActor;

/// Run kinematic integration for all entities with a `MovingActor`.
pub fn run(world: &mut World) {
    for (_entity, actor) in world.query_mut::<&mut MovingActor>() {
        actor.position = actor.position_after(DT);
    }
}
