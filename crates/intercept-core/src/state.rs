//! Simulation snapshot: the complete visible state handed to the driver each tick.

use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::types::{MovingActor, PredictionResult, SimTime};

/// Whether the simulation advances on `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub cannon: MovingActor,
    pub missile: Option<MovingActor>,
    pub shot: Option<MovingActor>,
    /// Latest firing solution, if the target is reachable.
    pub solution: Option<PredictionResult>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// Running tally of engagement outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
    pub escapes: u32,
}
