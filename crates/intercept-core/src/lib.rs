//! Core types and definitions for the interception predictor.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric value types, the heading convention, prediction errors,
//! predictor configuration, and the simulation's components, commands,
//! events, and snapshots. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::PredictError;
pub use types::{Heading, MovingActor, Point2D, PredictionResult};
