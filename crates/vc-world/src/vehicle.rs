//! Vehicle and passenger snapshots.

use vc_core::{EntityType, Location, VehicleId, VehicleKind};

/// A rider, as seen by the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub kind:        EntityType,
    /// Custom display name (name tag), if any.
    pub custom_name: Option<String>,
}

impl Passenger {
    pub fn new(kind: EntityType) -> Self {
        Self { kind, custom_name: None }
    }

    pub fn named(kind: EntityType, name: impl Into<String>) -> Self {
        Self { kind, custom_name: Some(name.into()) }
    }

    /// `true` if the passenger carries a non-empty custom name.
    #[inline]
    pub fn is_named(&self) -> bool {
        self.custom_name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// One vehicle at the moment it was enumerated.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id:         VehicleId,
    pub kind:       VehicleKind,
    pub location:   Location,
    /// Current riders; empty for an unoccupied vehicle.
    pub passengers: Vec<Passenger>,
    /// Occupied inventory slots.  Always 0 for kinds without an inventory.
    pub cargo:      u32,
}

impl Vehicle {
    pub fn new(id: VehicleId, kind: VehicleKind, location: Location) -> Self {
        Self { id, kind, location, passengers: Vec::new(), cargo: 0 }
    }

    pub fn with_passenger(mut self, passenger: Passenger) -> Self {
        self.passengers.push(passenger);
        self
    }

    pub fn with_cargo(mut self, slots: u32) -> Self {
        self.cargo = slots;
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn has_cargo(&self) -> bool {
        self.cargo > 0
    }

    /// Space-separated passenger types for log lines.
    pub fn passenger_summary(&self) -> String {
        self.passengers
            .iter()
            .map(|p| p.kind.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
