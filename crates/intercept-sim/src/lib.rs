//! Headless cannon-versus-missile simulation.
//!
//! Drives the predictor the way a game loop would: a static cannon re-aims
//! at a missile crossing the arena every tick and fires one shot at a time
//! toward the predicted intercept point. Owns the hecs ECS world, runs
//! systems at a fixed tick rate, and produces `SimSnapshot`s. No rendering,
//! camera, or input handling: the driver queues `SimCommand`s.

pub mod arena;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use intercept_core as core;
