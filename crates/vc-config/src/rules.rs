//! The breaking rules.

use std::collections::BTreeSet;

use vc_core::EntityType;

/// Immutable snapshot of the rules that decide when a vehicle breaks.
///
/// Grace periods are whole seconds.  Engine code converts them to
/// milliseconds when it stamps a timer.  Type sets are ordered so that log
/// output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Break vehicles that have no passengers.
    pub break_empty: bool,

    /// Grace period for an empty vehicle.
    pub break_empty_secs: u32,

    /// Break vehicles carrying a passenger of one of `breakable_types`.
    pub break_with_passenger: bool,

    /// Grace period while a breakable passenger is aboard.
    pub break_with_passenger_secs: u32,

    /// Passenger types that make a vehicle breakable.
    pub breakable_types: BTreeSet<EntityType>,

    /// Protect vehicles whose passengers of `exempt_named_types` have a
    /// custom name.
    pub exempt_named: bool,

    /// Passenger types protected by a custom name.
    pub exempt_named_types: BTreeSet<EntityType>,

    /// Drop the vehicle as an item when it breaks (otherwise it vanishes).
    pub drop_item: bool,

    /// Remove boats and rideable carts as soon as a rider exits.  The vehicle
    /// vanishes without dropping an item.
    pub remove_on_exit: bool,
}

impl RuleSet {
    /// `true` if the named-passenger exemption covers `ty`.
    #[inline]
    pub fn exempts_named(&self, ty: EntityType) -> bool {
        self.exempt_named && self.exempt_named_types.contains(&ty)
    }

    /// `true` if `ty` is configured to make a vehicle breakable.
    #[inline]
    pub fn breaks_with(&self, ty: EntityType) -> bool {
        self.break_with_passenger && self.breakable_types.contains(&ty)
    }
}
