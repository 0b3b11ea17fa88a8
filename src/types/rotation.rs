//! Axis-aligned rotations for orienting canonical shapes.

use super::{Direction, DirectionSet};
use serde::{Deserialize, Serialize};

/// A rotation composed of independent 90-degree-stepped turns about the
/// three world axes, applied in fixed order X, then Y, then Z. Angles are
/// in degrees, each one of -90, 0, 90 or 180.
///
/// Two different `AxisRotation` values may produce the same net transform;
/// the enumeration below intentionally keeps those redundant
/// representations because the resolver's tie-break depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRotation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AxisRotation {
    pub const IDENTITY: AxisRotation = AxisRotation { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Check if this is an identity rotation (no turns).
    pub fn is_identity(&self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    /// Every combination of the four allowed turn values on each axis:
    /// (x,y,z) over {-90, 0, 90, 180} in triple-nested-loop order,
    /// 64 entries total. The order is part of the resolver's tie-break
    /// contract and must not change.
    pub fn enumerate() -> Vec<AxisRotation> {
        let mut rotations = Vec::with_capacity(64);
        for x in -1..3 {
            for y in -1..3 {
                for z in -1..3 {
                    rotations.push(AxisRotation::new(x * 90, y * 90, z * 90));
                }
            }
        }
        rotations
    }

    /// Apply the three axis turns to a direction, in X, Y, Z order.
    pub fn apply(&self, direction: Direction) -> Direction {
        direction.rotate_x(self.x).rotate_y(self.y).rotate_z(self.z)
    }

    /// Apply the rotation to every direction in a set.
    pub fn apply_set(&self, set: DirectionSet) -> DirectionSet {
        set.iter().map(|d| self.apply(d)).collect()
    }

    /// Number of axes with a nonzero turn (0-3).
    pub fn axes_used(&self) -> u32 {
        [self.x, self.y, self.z].iter().filter(|a| **a != 0).count() as u32
    }

    /// Scoring weight: (sum of squared turn angles in radians) raised to
    /// the number of axes used. Among geometrically equivalent rotations
    /// this biases toward solutions using more axes and larger angles at
    /// the same time.
    pub fn weight(&self) -> f64 {
        let sq = |deg: i32| {
            let rad = (deg as f64).to_radians();
            rad * rad
        };
        let sum = sq(self.x) + sq(self.y) + sq(self.z);
        sum.powi(self.axes_used() as i32)
    }

    /// The turn angles as a degree triple, for the applied-rotation record
    /// carried into the package.
    pub fn degrees(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::fmt::Display for AxisRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}
