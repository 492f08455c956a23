//! Strongly typed vehicle identifier.
//!
//! The host assigns every live entity a stable numeric id.  `VehicleId` is
//! `Copy + Ord + Hash` so it can key the timer store and sort scan output
//! without ceremony.

use std::fmt;

/// Stable identity of a vehicle, assigned by the host world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u64);

impl VehicleId {
    /// Sentinel meaning "no valid vehicle": equivalent to `u64::MAX`.
    pub const INVALID: VehicleId = VehicleId(u64::MAX);
}

impl Default for VehicleId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<u64> for VehicleId {
    #[inline(always)]
    fn from(n: u64) -> VehicleId {
        VehicleId(n)
    }
}
