//! Host collaborator traits.

use vc_core::{ItemKind, Location, VehicleClass, VehicleId};

use crate::Vehicle;

/// One world of the host simulation.
///
/// Implementations must reflect live state at call time; the scan calls
/// `vehicles` once per class per pass and never holds snapshots over to the
/// next pass.
pub trait World {
    fn name(&self) -> &str;

    /// Live vehicles of `class`.  Non-rideable carts must never be returned
    /// for [`VehicleClass::RideableMinecart`].
    fn vehicles(&self, class: VehicleClass) -> Vec<Vehicle>;

    /// Destroy a vehicle.  Returns `false` if it was already gone.
    fn remove_vehicle(&mut self, id: VehicleId) -> bool;

    /// Place a dropped item at `at`.
    fn drop_item(&mut self, at: &Location, item: ItemKind);
}

/// The host process: resolves world names to worlds.
pub trait Host {
    type World: World;

    fn has_world(&self, name: &str) -> bool;

    fn world_mut(&mut self, name: &str) -> Option<&mut Self::World>;
}
