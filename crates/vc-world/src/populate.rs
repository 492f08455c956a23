//! Seeded random population and passenger churn for demo worlds.
//!
//! The same seed always produces the same world and the same sequence of
//! boardings, so a demo run can be replayed exactly.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use vc_core::{BoatWood, CartKind, EntityType, VehicleId, VehicleKind};

use crate::{MemoryWorld, Passenger};

/// Names handed to passengers that get a name tag.
const NAMES: &[&str] = &["Bob", "Alice", "Steve", "Marge", "Pip"];

/// Cart kinds spawned alongside rideable carts, so that exclusion from the
/// scan is visible in demo output.
const OTHER_CARTS: &[CartKind] = &[
    CartKind::Chest,
    CartKind::Furnace,
    CartKind::Hopper,
    CartKind::Tnt,
    CartKind::CommandBlock,
];

/// Deterministic world populator.
pub struct Populator {
    rng: SmallRng,
    /// Probability that a spawned vehicle starts with a rider.
    pub occupied_ratio: f64,
    /// Probability that a new rider has a custom name.
    pub named_ratio:    f64,
}

impl Populator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng:            SmallRng::seed_from_u64(seed),
            occupied_ratio: 0.4,
            named_ratio:    0.2,
        }
    }

    /// Spawn `count` vehicles scattered within ±`radius` blocks of the origin.
    ///
    /// Roughly half are boats of random wood, most of the rest rideable carts,
    /// and one in ten a non-rideable cart (with cargo for chest/hopper carts).
    pub fn populate(&mut self, world: &mut MemoryWorld, count: usize, radius: f64) {
        for _ in 0..count {
            let kind = self.random_kind();
            let x = self.rng.gen_range(-radius..=radius);
            let z = self.rng.gen_range(-radius..=radius);
            let id = world.spawn(kind, x, 64.0, z);

            if matches!(kind, VehicleKind::Minecart(CartKind::Chest | CartKind::Hopper)) {
                let slots = self.rng.gen_range(0..4);
                if let Some(v) = world.get_mut(id) {
                    v.cargo = slots;
                }
            }
            if kind.class().is_some() && self.rng.gen_bool(self.occupied_ratio.clamp(0.0, 1.0)) {
                let passenger = self.random_passenger();
                world.board(id, passenger);
            }
        }
    }

    /// Randomly board and unboard riders.
    ///
    /// Each vehicle independently has a `rate` chance of changing state: an
    /// occupied vehicle is emptied and an empty one gains a rider.  Carts
    /// that cannot carry riders are left alone.
    ///
    /// Returns the vehicles whose riders got off, for exit handling.
    pub fn churn(&mut self, world: &mut MemoryWorld, rate: f64) -> Vec<VehicleId> {
        let rate = rate.clamp(0.0, 1.0);
        let mut exited = Vec::new();
        for id in world.ids() {
            if !self.rng.gen_bool(rate) {
                continue;
            }
            let Some(vehicle) = world.get(id) else { continue };
            if vehicle.kind.class().is_none() {
                continue;
            }
            if !vehicle.is_empty() {
                world.unboard_all(id);
                exited.push(id);
            } else {
                let passenger = self.random_passenger();
                world.board(id, passenger);
            }
        }
        exited
    }

    fn random_kind(&mut self) -> VehicleKind {
        let roll: f64 = self.rng.r#gen();
        if roll < 0.5 {
            let wood = *BoatWood::ALL.choose(&mut self.rng).unwrap_or(&BoatWood::Oak);
            VehicleKind::Boat(wood)
        } else if roll < 0.9 {
            VehicleKind::Minecart(CartKind::Rideable)
        } else {
            let cart = *OTHER_CARTS.choose(&mut self.rng).unwrap_or(&CartKind::Chest);
            VehicleKind::Minecart(cart)
        }
    }

    fn random_passenger(&mut self) -> Passenger {
        let kind = *EntityType::ALL.choose(&mut self.rng).unwrap_or(&EntityType::Player);
        if self.rng.gen_bool(self.named_ratio.clamp(0.0, 1.0)) {
            let name = *NAMES.choose(&mut self.rng).unwrap_or(&"Bob");
            Passenger::named(kind, name)
        } else {
            Passenger::new(kind)
        }
    }
}
