//! Fundamental geometric and simulation types.

use std::ops::{Add, Mul, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position (or displacement) in world units.
/// x = right, y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

/// Direction an actor faces or moves, in degrees normalized into `[0, 360)`.
///
/// 0° points along +y ("up"). The direction vector of heading `h` is
/// `(-sin h, cos h)`: 90° points along -x and 180° along -y, so positive
/// angles turn counterclockwise when +y is drawn upward (Euler-Z rotation).
/// Every conversion between headings and vectors goes through
/// [`Heading::direction`] and [`Heading::from_direction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Heading(f64);

/// Position plus straight-line motion: heading and scalar speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingActor {
    pub position: Point2D,
    pub heading: Heading,
    /// Units per second, never negative.
    pub speed: f64,
}

/// Output of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Point the shooter should aim at.
    pub aim_point: Point2D,
    /// Shot flight time from the shooter to `aim_point`.
    pub time_to_intercept: f64,
    /// Refinement passes actually executed.
    pub iterations_run: u32,
    /// Distance the candidate moved in the last pass (0 with no passes).
    pub residual: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2D) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Length of this point taken as a vector from the origin.
    pub fn length(&self) -> f64 {
        DVec2::from(*self).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Heading {
    /// Heading pointing along +y.
    pub const UP: Heading = Heading(0.0);

    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round tiny negatives up to exactly 360.0
        if normalized >= 360.0 {
            Self(0.0)
        } else {
            Self(normalized)
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Unit direction vector: `(-sin h, cos h)`.
    pub fn direction(&self) -> Point2D {
        let (sin, cos) = self.radians().sin_cos();
        Point2D::new(-sin, cos)
    }

    /// Inverse of [`Heading::direction`]: `atan2(dy, dx) - 90°`.
    /// A zero vector has no direction and maps to [`Heading::UP`].
    pub fn from_direction(delta: Point2D) -> Self {
        if delta.x == 0.0 && delta.y == 0.0 {
            return Self::UP;
        }
        Self::from_degrees(delta.y.atan2(delta.x).to_degrees() - 90.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<Heading> for f64 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

impl MovingActor {
    pub fn new(position: Point2D, heading: Heading, speed: f64) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }

    /// An actor that does not move (the cannon).
    pub fn stationary(position: Point2D) -> Self {
        Self::new(position, Heading::UP, 0.0)
    }

    /// Build from a velocity vector using the heading convention.
    pub fn from_velocity(position: Point2D, velocity: Point2D) -> Self {
        Self::new(position, Heading::from_direction(velocity), velocity.length())
    }

    /// Velocity vector (units per second).
    pub fn velocity(&self) -> Point2D {
        self.heading.direction() * self.speed
    }

    /// Linear extrapolation of the position `secs` seconds ahead.
    pub fn position_after(&self, secs: f64) -> Point2D {
        self.position + self.velocity() * secs
    }
}

impl PredictionResult {
    pub fn is_converged(&self, tolerance: f64) -> bool {
        self.residual <= tolerance
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
