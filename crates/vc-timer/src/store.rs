//! The `TimerStore`: sparse map of vehicles with a pending removal.

use std::collections::HashSet;

use vc_core::VehicleId;

use crate::TimerState;

#[cfg(not(feature = "fx-hash"))]
type TimerMap = std::collections::HashMap<VehicleId, TimerState>;
#[cfg(feature = "fx-hash")]
type TimerMap = rustc_hash::FxHashMap<VehicleId, TimerState>;

/// Timer state for every tracked vehicle.
///
/// Only vehicles with a pending removal have an entry; absence means
/// "untracked".  Entries are keyed by identity and never point back into the
/// host, so an entry for a vehicle that has since vanished is inert: the
/// vehicle is never enumerated again and the entry is never evaluated.
/// [`retain_live`](Self::retain_live) reclaims such entries after a pass.
#[derive(Debug, Default)]
pub struct TimerStore {
    timers: TimerMap,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, vehicle: VehicleId) -> Option<TimerState> {
        self.timers.get(&vehicle).copied()
    }

    /// Create or overwrite the timer for `vehicle`.
    #[inline]
    pub fn set(&mut self, vehicle: VehicleId, state: TimerState) {
        self.timers.insert(vehicle, state);
    }

    /// Stop tracking `vehicle`.  Returns the timer it had, if any.
    #[inline]
    pub fn clear(&mut self, vehicle: VehicleId) -> Option<TimerState> {
        self.timers.remove(&vehicle)
    }

    /// Drop the entry of a vehicle the host destroyed on its own.
    ///
    /// Same effect as [`clear`](Self::clear); kept separate so call sites read
    /// as notifications rather than decisions.
    #[inline]
    pub fn forget(&mut self, vehicle: VehicleId) {
        self.timers.remove(&vehicle);
    }

    /// Remove every entry whose vehicle is not in `live`.  Returns how many
    /// were reclaimed.
    pub fn retain_live(&mut self, live: &HashSet<VehicleId>) -> usize {
        let before = self.timers.len();
        self.timers.retain(|id, _| live.contains(id));
        before - self.timers.len()
    }

    #[inline]
    pub fn contains(&self, vehicle: VehicleId) -> bool {
        self.timers.contains_key(&vehicle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// All tracked `(vehicle, timer)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, TimerState)> + '_ {
        self.timers.iter().map(|(&id, &state)| (id, state))
    }
}
