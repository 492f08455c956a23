//! In-memory host used by tests and the harbor demo.

use std::collections::BTreeMap;

use vc_core::{ItemKind, Location, VehicleClass, VehicleId, VehicleKind};

use crate::{Host, Passenger, Vehicle, World};

// ── MemoryWorld ───────────────────────────────────────────────────────────────

/// A world that stores its vehicles in a `BTreeMap`, so enumeration order is
/// ascending `VehicleId` and runs are reproducible.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    name:     String,
    vehicles: BTreeMap<VehicleId, Vehicle>,
    /// Every item dropped so far, in drop order.
    pub dropped: Vec<(Location, ItemKind)>,
    next_id:  u64,
}

impl MemoryWorld {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Spawn an unoccupied vehicle at `(x, y, z)` and return its id.
    pub fn spawn(&mut self, kind: VehicleKind, x: f64, y: f64, z: f64) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        let location = Location::new(self.name.clone(), x, y, z);
        self.vehicles.insert(id, Vehicle::new(id, kind, location));
        id
    }

    /// Insert a fully built vehicle, replacing any vehicle with the same id.
    pub fn insert(&mut self, vehicle: Vehicle) {
        self.next_id = self.next_id.max(vehicle.id.0 + 1);
        self.vehicles.insert(vehicle.id, vehicle);
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    /// Add a rider.  Returns `false` if the vehicle does not exist.
    pub fn board(&mut self, id: VehicleId, passenger: Passenger) -> bool {
        match self.vehicles.get_mut(&id) {
            Some(v) => {
                v.passengers.push(passenger);
                true
            }
            None => false,
        }
    }

    /// Remove every rider and return them.
    pub fn unboard_all(&mut self, id: VehicleId) -> Vec<Passenger> {
        self.vehicles
            .get_mut(&id)
            .map(|v| std::mem::take(&mut v.passengers))
            .unwrap_or_default()
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.vehicles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// All vehicle ids in ascending order.
    pub fn ids(&self) -> Vec<VehicleId> {
        self.vehicles.keys().copied().collect()
    }
}

impl World for MemoryWorld {
    fn name(&self) -> &str {
        &self.name
    }

    fn vehicles(&self, class: VehicleClass) -> Vec<Vehicle> {
        self.vehicles
            .values()
            .filter(|v| v.kind.class() == Some(class))
            .cloned()
            .collect()
    }

    fn remove_vehicle(&mut self, id: VehicleId) -> bool {
        self.vehicles.remove(&id).is_some()
    }

    fn drop_item(&mut self, at: &Location, item: ItemKind) {
        self.dropped.push((at.clone(), item));
    }
}

// ── MemoryHost ────────────────────────────────────────────────────────────────

/// A host holding any number of [`MemoryWorld`]s.
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub worlds: Vec<MemoryWorld>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add an empty world named `name`.
    pub fn with_world(mut self, name: impl Into<String>) -> Self {
        self.worlds.push(MemoryWorld::new(name));
        self
    }

    pub fn world(&self, name: &str) -> Option<&MemoryWorld> {
        self.worlds.iter().find(|w| w.name() == name)
    }
}

impl Host for MemoryHost {
    type World = MemoryWorld;

    fn has_world(&self, name: &str) -> bool {
        self.world(name).is_some()
    }

    fn world_mut(&mut self, name: &str) -> Option<&mut MemoryWorld> {
        self.worlds.iter_mut().find(|w| w.name() == name)
    }
}
