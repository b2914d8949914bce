//! Iterative predictive interception.
//!
//! Given a shooter at a fixed position firing at a fixed muzzle speed and a
//! target moving in a straight line, find the point to aim at so the shot
//! meets the target where it *will* be. The aim point satisfies a
//! self-referential equation (flight time depends on the aim point, which
//! depends on flight time); [`predict`] approximates it by fixed-point
//! iteration starting from the target's current position.
//!
//! Every function here is pure: no state survives a call.

pub mod analytic;
pub mod heading;
pub mod predict;
pub mod refine;

pub use analytic::{solve_intercept, Intercept};
pub use heading::aim_heading;
pub use predict::{predict, trace, Predictor};
pub use refine::refine;

pub use intercept_core::config::{Iterations, PredictorConfig};
pub use intercept_core::{Heading, MovingActor, Point2D, PredictError, PredictionResult};
