//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Predictor ---

/// Refinement passes used when the caller does not choose.
pub const DEFAULT_ITERATIONS: u32 = 3;

// --- Arena ---

/// Half the arena width. The arena spans x in [-ARENA_HALF_WIDTH, ARENA_HALF_WIDTH].
pub const ARENA_HALF_WIDTH: f64 = 10.0;

/// Half the arena height. The arena spans y in [-ARENA_HALF_HEIGHT, ARENA_HALF_HEIGHT].
pub const ARENA_HALF_HEIGHT: f64 = 6.0;

/// Distance past the arena edge before an actor is removed.
pub const ARENA_MARGIN: f64 = 1.0;

// --- Cannon and shot ---

/// Cannon position: bottom center of the arena.
pub const CANNON_X: f64 = 0.0;
pub const CANNON_Y: f64 = -5.0;

/// Shot muzzle speed (units/second).
pub const SHOT_SPEED: f64 = 10.0;

/// Shot-to-missile distance that counts as a hit.
pub const HIT_RADIUS: f64 = 0.5;

// --- Missile ---

/// Missile speed range (units/second). Kept well below SHOT_SPEED so the
/// predictor converges quickly.
pub const MISSILE_SPEED_MIN: f64 = 2.0;
pub const MISSILE_SPEED_MAX: f64 = 4.0;

/// Fraction of the arena the missile's entry course is aimed into.
/// Spawned missiles head for a random point inside this inner region.
pub const MISSILE_AIM_REGION: f64 = 0.5;
