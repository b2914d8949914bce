//! Prediction errors.

use thiserror::Error;

/// Why a prediction could not be produced.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PredictError {
    /// The shot never arrives: shooter speed is zero, or so small that the
    /// flight time overflows. Reporting zero speed as an error rather than
    /// aiming at the target's current position is a chosen policy, applied
    /// even when no refinement pass would run. Callers should not fire.
    #[error("target unreachable: shot flight time is undefined")]
    Unreachable,

    /// A refinement pass produced a non-finite candidate. Happens when the
    /// target outruns the shot and the candidate grows without bound.
    #[error("refinement diverged: candidate is no longer finite")]
    Diverged,

    /// Negative iteration count. Zero iterations is valid.
    #[error("iteration count must not be negative, got {0}")]
    DegenerateInput(i64),

    /// Negative or non-finite speed.
    #[error("speed must be finite and non-negative, got {value}")]
    InvalidSpeed { value: f64 },

    /// An input position or heading contains NaN or infinity.
    #[error("non-finite position or heading")]
    NonFinite,
}
