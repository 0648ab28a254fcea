//! 3D positions and distance checks.
//!
//! Positions come from the game engine as `{x, y, z}` records. Instructions
//! compare them against fixed targets with a Euclidean (L2) tolerance.

use serde::{Deserialize, Serialize};

/// Tolerance for checking where an object ended up after an action.
pub const DEFAULT_POSITION_TOLERANCE: f64 = 0.01;

/// Tolerance for room-scale "is the object near this spot" checks.
pub const DEFAULT_LOCATION_TOLERANCE: f64 = 0.25;

/// A point or delta in engine space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Read a single component.
    #[must_use]
    pub const fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Components as an array, in x/y/z order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// One of the three engine axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Euclidean distance between two points.
#[must_use]
pub fn l2_distance(a: Vec3, b: Vec3) -> f64 {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .map(|(p, q)| (p - q).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// True iff `a` lies strictly closer than `tolerance` to `b`.
#[must_use]
pub fn within_tolerance(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    l2_distance(a, b) < tolerance
}
