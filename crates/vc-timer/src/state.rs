//! Per-vehicle timer state.

use vc_core::Millis;

/// The pending-removal timer attached to one vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerState {
    /// The vehicle is eligible for removal once `now >= due_at`.
    pub due_at: Millis,

    /// `true` if a breakable passenger was aboard when the timer was created
    /// or last extended.
    ///
    /// Distinguishes "a breakable rider just boarded an empty-tagged vehicle,
    /// give it a fresh grace period" from "a breakable rider has been aboard
    /// since the previous due check, break it now".
    pub was_occupied_at_tag: bool,
}

impl TimerState {
    /// Timer for an empty vehicle, due `grace_secs` after `now`.
    #[inline]
    pub fn empty(now: Millis, grace_secs: u32) -> Self {
        Self { due_at: now.after_secs(grace_secs), was_occupied_at_tag: false }
    }

    /// Timer for a vehicle carrying a breakable passenger.
    #[inline]
    pub fn occupied(now: Millis, grace_secs: u32) -> Self {
        Self { due_at: now.after_secs(grace_secs), was_occupied_at_tag: true }
    }

    #[inline]
    pub fn is_due(&self, now: Millis) -> bool {
        now >= self.due_at
    }

    /// Milliseconds left until due; 0 once due.
    #[inline]
    pub fn remaining(&self, now: Millis) -> u64 {
        self.due_at.since(now)
    }
}
