//! Remove-on-exit handling.

use tracing::debug;

use vc_config::RuleSet;
use vc_timer::TimerStore;
use vc_world::{Vehicle, World};

/// React to a rider leaving `vehicle`.
///
/// With `remove_on_exit` set, boats and rideable carts are removed at once,
/// without dropping an item, and their timer is forgotten.  Returns `true` if
/// the vehicle was removed.
pub fn on_vehicle_exit<W: World + ?Sized>(
    world:   &mut W,
    vehicle: &Vehicle,
    rules:   &RuleSet,
    timers:  &mut TimerStore,
) -> bool {
    if !rules.remove_on_exit || vehicle.kind.class().is_none() {
        return false;
    }
    timers.forget(vehicle.id);
    let removed = world.remove_vehicle(vehicle.id);
    if removed {
        debug!(vehicle = %vehicle.id, "Removed {} at {} on exit", vehicle.kind, vehicle.location);
    }
    removed
}
