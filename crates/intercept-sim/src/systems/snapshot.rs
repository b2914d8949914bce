//! Snapshot builder: reads the world and produces a `SimSnapshot`.

use hecs::World;

use intercept_core::components::{Cannon, Missile, Shot};
use intercept_core::events::SimEvent;
use intercept_core::state::{ScoreView, SimPhase, SimSnapshot};
use intercept_core::types::SimTime;
use intercept_core::{MovingActor, PredictionResult};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    solution: Option<PredictionResult>,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        cannon: first_actor::<Cannon>(world).unwrap_or_default(),
        missile: first_actor::<Missile>(world),
        shot: first_actor::<Shot>(world),
        solution,
        events,
        score: *score,
    }
}

fn first_actor<T: hecs::Component>(world: &World) -> Option<MovingActor> {
    world
        .query::<(&MovingActor, &T)>()
        .iter()
        .map(|(_, (actor, _))| *actor)
        .next()
}
