//! Per-pass counters.

use std::time::Duration;

/// What one scan pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Vehicles enumerated across all scanned worlds.
    pub scanned:   usize,
    /// Timers created for untracked vehicles.
    pub tagged:    usize,
    /// Due timers replaced by a fresh occupied timer.
    pub extended:  usize,
    /// Timers dropped because only non-breakable riders remain.
    pub cleared:   usize,
    /// Vehicles removed from their world.
    pub broken:    usize,
    /// Breaks refused by the veto rules.
    pub vetoed:    usize,
    /// Timer entries reclaimed for vehicles that were not enumerated.
    pub reclaimed: usize,
    /// Occupied, untracked vehicles left alone because no rider is breakable.
    pub exempted:  usize,
    /// Wall time spent in the pass.
    pub elapsed:   Duration,
}

impl ScanStats {
    /// Number of vehicles whose timer state changed this pass.
    pub fn changed(&self) -> usize {
        self.tagged + self.extended + self.cleared + self.broken + self.vetoed
    }
}
