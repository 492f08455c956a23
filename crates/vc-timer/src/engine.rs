//! The timeout decision.

use vc_config::RuleSet;
use vc_core::Millis;
use vc_world::{Passenger, Vehicle};

use crate::TimerState;

/// What the scan should do with one vehicle this pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Leave the vehicle and its timer (or lack of one) as they are.
    NoChange,
    /// Start tracking an untracked vehicle.
    SetTimer(TimerState),
    /// Replace a due timer with a fresh occupied-grace timer.
    UpdateTimer(TimerState),
    /// Stop tracking: the vehicle no longer qualifies for removal.
    ClearTimer,
    /// Remove the vehicle, subject to the break veto.
    Break,
}

/// `true` if named-passenger exemption protects `passenger`.
#[inline]
pub fn is_exempt(passenger: &Passenger, rules: &RuleSet) -> bool {
    passenger.is_named() && rules.exempts_named(passenger.kind)
}

/// `true` if `passenger` lets its vehicle break.
///
/// Occupied breaking must be enabled, the type must be listed, and the
/// passenger must not be exempt.
#[inline]
pub fn is_breakable(passenger: &Passenger, rules: &RuleSet) -> bool {
    rules.breaks_with(passenger.kind) && !is_exempt(passenger, rules)
}

/// `true` if at least one current passenger is breakable.
#[inline]
pub fn occupied_breakable(vehicle: &Vehicle, rules: &RuleSet) -> bool {
    vehicle.passengers.iter().any(|p| is_breakable(p, rules))
}

/// Decide the next timer state for `vehicle`.
///
/// Pure: reads only its arguments.  `existing` is the vehicle's current
/// timer, `now` the pass timestamp.
pub fn evaluate(
    vehicle:  &Vehicle,
    existing: Option<&TimerState>,
    now:      Millis,
    rules:    &RuleSet,
) -> Decision {
    let Some(timer) = existing else {
        // Untracked: tag it if it qualifies.
        if vehicle.is_empty() {
            return if rules.break_empty {
                Decision::SetTimer(TimerState::empty(now, rules.break_empty_secs))
            } else {
                Decision::NoChange
            };
        }
        return if occupied_breakable(vehicle, rules) {
            Decision::SetTimer(TimerState::occupied(now, rules.break_with_passenger_secs))
        } else {
            // Exempt or not configured.
            Decision::NoChange
        };
    };

    if !timer.is_due(now) {
        return Decision::NoChange;
    }

    if vehicle.is_empty() {
        Decision::Break
    } else if occupied_breakable(vehicle, rules) {
        if timer.was_occupied_at_tag {
            Decision::Break
        } else {
            // Boarded since an empty tag: restart the clock from now.
            Decision::UpdateTimer(TimerState::occupied(now, rules.break_with_passenger_secs))
        }
    } else {
        Decision::ClearTimer
    }
}
