//! Vehicle positions.

use std::fmt;

/// A position inside a named world.
///
/// Only used for log lines and as the item-drop point; no distance math is
/// needed by the scan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self { world: world.into(), x, y, z }
    }

    /// Integer block coordinates (floored, so `-0.5` is block `-1`).
    #[inline]
    pub fn block(&self) -> (i64, i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64, self.z.floor() as i64)
    }
}

impl fmt::Display for Location {
    /// `world, x, y, z` with block coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.block();
        write!(f, "{}, {}, {}, {}", self.world, x, y, z)
    }
}
