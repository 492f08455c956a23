//! Vehicle removal with the break veto.

use std::fmt;

use vc_config::RuleSet;
use vc_core::{ItemKind, VehicleKind};
use vc_world::{Vehicle, World};

/// Why a break was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakVeto {
    /// The vehicle still holds items.
    Cargo,
    /// Spawner and command-block carts are never removed.
    Protected,
    /// The kind has no replacement item.
    NoDropItem,
}

impl fmt::Display for BreakVeto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreakVeto::Cargo      => "cargo",
            BreakVeto::Protected  => "protected kind",
            BreakVeto::NoDropItem => "no drop item",
        })
    }
}

/// Result of [`apply`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakOutcome {
    /// `true` if the world removed the vehicle.
    pub removed:      bool,
    /// The item placed at the vehicle's location, if any.
    pub dropped_item: Option<ItemKind>,
    /// Set when the veto rules refused the break.
    pub vetoed:       Option<BreakVeto>,
}

impl BreakOutcome {
    fn vetoed(veto: BreakVeto) -> Self {
        Self { vetoed: Some(veto), ..Self::default() }
    }
}

/// The veto that applies to `vehicle`, if any.
pub fn veto(vehicle: &Vehicle) -> Option<BreakVeto> {
    if vehicle.has_cargo() {
        return Some(BreakVeto::Cargo);
    }
    if matches!(vehicle.kind, VehicleKind::Minecart(cart) if cart.is_protected()) {
        return Some(BreakVeto::Protected);
    }
    if vehicle.kind.drop_item().is_none() {
        return Some(BreakVeto::NoDropItem);
    }
    None
}

/// Break `vehicle` unless vetoed.
///
/// The item is dropped only if `rules.drop_item` is set and the world actually
/// removed the vehicle; a vehicle that already vanished drops nothing.
pub fn apply<W: World + ?Sized>(world: &mut W, vehicle: &Vehicle, rules: &RuleSet) -> BreakOutcome {
    if let Some(v) = veto(vehicle) {
        return BreakOutcome::vetoed(v);
    }
    if !world.remove_vehicle(vehicle.id) {
        return BreakOutcome::default();
    }
    let dropped_item = if rules.drop_item { vehicle.kind.drop_item() } else { None };
    if let Some(item) = dropped_item {
        world.drop_item(&vehicle.location, item);
    }
    BreakOutcome { removed: true, dropped_item, vetoed: None }
}
