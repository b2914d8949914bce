//! Fire control system.
//!
//! Each tick: predict the intercept point for the current missile, turn the
//! cannon toward it, and fire when no shot is in flight and the aim point
//! lies inside the arena. Holds fire when the target is unreachable or the
//! estimate diverges.

use hecs::World;
use log::{debug, info, warn};

use intercept_core::components::{Cannon, Missile, Shot};
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;
use intercept_core::{MovingActor, PredictError, PredictionResult};
use intercept_predictor::{aim_heading, Predictor};

use crate::{arena, world_setup};

/// Fire control inputs that persist between ticks.
#[derive(Debug, Clone, Copy)]
pub struct FireControl {
    pub predictor: Predictor,
    pub shot_speed: f64,
    /// Set while the target is unreachable so the event fires once.
    pub unreachable_reported: bool,
}

/// Run fire control. Returns the current firing solution, if any.
pub fn run(
    world: &mut World,
    fire_control: &mut FireControl,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    tick: u64,
) -> Option<PredictionResult> {
    let missile = world
        .query::<(&MovingActor, &Missile)>()
        .iter()
        .map(|(_, (actor, _))| *actor)
        .next()?;
    let shot_in_flight = world.query::<&Shot>().iter().next().is_some();

    let mut cannon_query = world.query::<(&mut MovingActor, &Cannon)>();
    let (_, (cannon, _)) = cannon_query.iter().next()?;

    let solution = match fire_control
        .predictor
        .predict(cannon.position, fire_control.shot_speed, &missile)
    {
        Ok(solution) => solution,
        Err(e @ (PredictError::Unreachable | PredictError::Diverged)) => {
            if !fire_control.unreachable_reported {
                info!("{e} (shot speed {})", fire_control.shot_speed);
                events.push(SimEvent::Unreachable);
                fire_control.unreachable_reported = true;
            }
            return None;
        }
        Err(e) => {
            warn!("no firing solution: {e}");
            return None;
        }
    };
    fire_control.unreachable_reported = false;

    cannon.heading = aim_heading(cannon.position, solution.aim_point);
    let muzzle = MovingActor::new(cannon.position, cannon.heading, fire_control.shot_speed);
    drop(cannon_query);

    if shot_in_flight {
        return Some(solution);
    }
    if !arena::contains(&solution.aim_point, 0.0) {
        debug!(
            "holding fire: aim point ({:.2}, {:.2}) outside arena",
            solution.aim_point.x, solution.aim_point.y
        );
        return Some(solution);
    }

    world_setup::spawn_shot(world, muzzle, solution.aim_point, tick);
    score.shots_fired += 1;
    info!(
        "fired at ({:.2}, {:.2}), {:.2}s to intercept after {} passes",
        solution.aim_point.x,
        solution.aim_point.y,
        solution.time_to_intercept,
        solution.iterations_run
    );
    events.push(SimEvent::ShotFired {
        aim_point: solution.aim_point,
        time_to_intercept: solution.time_to_intercept,
    });

    Some(solution)
}
