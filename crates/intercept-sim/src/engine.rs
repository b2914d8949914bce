//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems, and produces `SimSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use intercept_core::commands::SimCommand;
use intercept_core::config::{Iterations, PredictorConfig};
use intercept_core::constants::{HIT_RADIUS, SHOT_SPEED};
use intercept_core::events::SimEvent;
use intercept_core::state::{ScoreView, SimPhase, SimSnapshot};
use intercept_core::types::SimTime;
use intercept_core::{Heading, MovingActor, PredictionResult};
use intercept_predictor::Predictor;

use crate::systems;
use crate::systems::fire_control::FireControl;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Predictor pass budget and early-exit tolerance.
    pub predictor: PredictorConfig,
    /// Shot muzzle speed (units/second).
    pub shot_speed: f64,
    /// Shot-to-missile distance that counts as a hit.
    pub hit_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            predictor: PredictorConfig::default(),
            shot_speed: SHOT_SPEED,
            hit_radius: HIT_RADIUS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    fire_control: FireControl,
    hit_radius: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    solution: Option<PredictionResult>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_cannon(&mut world);

        Self {
            world,
            time: SimTime::default(),
            phase: SimPhase::default(),
            fire_control: FireControl {
                predictor: Predictor::new(config.predictor),
                shot_speed: config.shot_speed,
                unreachable_reported: false,
            },
            hit_radius: config.hit_radius,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            solution: None,
            score: ScoreView::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.solution,
            events,
            &self.score,
        )
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    /// Latest firing solution.
    pub fn solution(&self) -> Option<PredictionResult> {
        self.solution
    }

    pub fn predictor_config(&self) -> &PredictorConfig {
        self.fire_control.predictor.config()
    }

    pub fn shot_speed(&self) -> f64 {
        self.fire_control.shot_speed
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::SetIterations { iterations } => match Iterations::try_from(iterations) {
                Ok(iterations) => {
                    info!("predictor passes set to {}", iterations.get());
                    let config = PredictorConfig {
                        iterations,
                        ..*self.fire_control.predictor.config()
                    };
                    self.fire_control.predictor = Predictor::new(config);
                }
                Err(e) => warn!("ignoring SetIterations: {e}"),
            },
            SimCommand::SetShotSpeed { speed } => {
                if speed.is_finite() && speed >= 0.0 {
                    info!("shot speed set to {speed}");
                    self.fire_control.shot_speed = speed;
                } else {
                    warn!("ignoring SetShotSpeed: invalid speed {speed}");
                }
            }
            SimCommand::SpawnTarget {
                position,
                heading_degrees,
                speed,
            } => {
                if !position.is_finite() || !heading_degrees.is_finite() {
                    warn!("ignoring SpawnTarget: non-finite kinematics");
                    return;
                }
                if !speed.is_finite() || speed < 0.0 {
                    warn!("ignoring SpawnTarget: invalid speed {speed}");
                    return;
                }
                world_setup::despawn_missiles(&mut self.world, &mut self.despawn_buffer);
                let actor =
                    MovingActor::new(position, Heading::from_degrees(heading_degrees), speed);
                world_setup::spawn_missile(&mut self.world, actor);
                self.events.push(SimEvent::TargetSpawned {
                    position,
                    heading_degrees: actor.heading.degrees(),
                    speed,
                });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Keep a missile in the arena
        systems::spawner::run(&mut self.world, &mut self.rng, &mut self.events);
        // 2. Predict, aim, fire
        self.solution = systems::fire_control::run(
            &mut self.world,
            &mut self.fire_control,
            &mut self.events,
            &mut self.score,
            self.time.tick,
        );
        // 3. Movement integration
        systems::movement::run(&mut self.world);
        // 4. Shot/missile proximity
        systems::collision::run(
            &mut self.world,
            self.hit_radius,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 5. Cleanup (out of arena)
        systems::cleanup::run(
            &mut self.world,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
    }
}
