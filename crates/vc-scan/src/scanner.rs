//! The `Scanner`: one pass over every configured world.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use vc_config::Settings;
use vc_core::time::MILLIS_PER_SEC;
use vc_core::{Millis, VehicleClass};
use vc_timer::{Decision, TimerState, TimerStore, evaluate};
use vc_world::{Host, Vehicle, World};

use crate::{BreakOutcome, ScanObserver, ScanStats, break_action};

/// Owns the timer store and applies decisions to the host.
///
/// The store is only touched from inside [`run_once`](Self::run_once) (and
/// the exit handler), so it needs no locking.
#[derive(Debug, Default)]
pub struct Scanner {
    pub timers: TimerStore,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one pass at time `now` against `settings`.
    ///
    /// Worlds are visited in configuration order, boats before rideable carts
    /// within each world.  Worlds the host does not know are skipped, and a
    /// world listed twice is scanned once.  After
    /// the pass, timers of vehicles that were not enumerated are reclaimed.
    pub fn run_once<H: Host, O: ScanObserver>(
        &mut self,
        host:     &mut H,
        settings: &Settings,
        now:      Millis,
        observer: &mut O,
    ) -> ScanStats {
        let started = Instant::now();
        let mut stats = ScanStats::default();
        let mut seen = HashSet::new();
        let mut visited = HashSet::new();

        for name in &settings.scan.worlds {
            if !visited.insert(name.as_str()) {
                continue;
            }
            let Some(world) = host.world_mut(name) else {
                debug!(world = %name, "skipping unknown world");
                continue;
            };
            for class in VehicleClass::SCANNED {
                for vehicle in world.vehicles(class) {
                    seen.insert(vehicle.id);
                    stats.scanned += 1;
                    self.check_vehicle(world, name, &vehicle, settings, now, &mut stats, observer);
                }
            }
        }

        stats.reclaimed = self.timers.retain_live(&seen);
        stats.elapsed = started.elapsed();
        stats
    }

    #[allow(clippy::too_many_arguments)]
    fn check_vehicle<W: World, O: ScanObserver>(
        &mut self,
        world:    &mut W,
        name:     &str,
        vehicle:  &Vehicle,
        settings: &Settings,
        now:      Millis,
        stats:    &mut ScanStats,
        observer: &mut O,
    ) {
        let existing = self.timers.get(vehicle.id);
        let decision = evaluate(vehicle, existing.as_ref(), now, &settings.rules);
        observer.on_decision(name, vehicle, &decision);
        let debug = &settings.debug;

        match decision {
            Decision::NoChange => {
                if existing.is_none() && !vehicle.is_empty() {
                    stats.exempted += 1;
                    if debug.exempt_vehicle {
                        info!(
                            "Exempted {} at {}, {}",
                            vehicle.kind,
                            vehicle.location,
                            describe_named(vehicle)
                        );
                    }
                }
            }
            Decision::SetTimer(state) => {
                self.timers.set(vehicle.id, state);
                stats.tagged += 1;
                if debug.tag_vehicle {
                    info!(
                        "Tagged {} at {}, {}, due in {} s",
                        vehicle.kind,
                        vehicle.location,
                        describe(vehicle),
                        due_in_secs(&state, now)
                    );
                }
            }
            Decision::UpdateTimer(state) => {
                self.timers.set(vehicle.id, state);
                stats.extended += 1;
                if debug.extend_vehicle {
                    info!(
                        "Extended {} at {}, {}, due in {} s",
                        vehicle.kind,
                        vehicle.location,
                        describe(vehicle),
                        due_in_secs(&state, now)
                    );
                }
            }
            Decision::ClearTimer => {
                self.timers.clear(vehicle.id);
                stats.cleared += 1;
                if debug.extend_vehicle {
                    info!("Cleared timer on {} at {}, {}", vehicle.kind, vehicle.location, describe(vehicle));
                }
            }
            Decision::Break => {
                let outcome = break_action::apply(world, vehicle, &settings.rules);
                // Vetoed vehicles start over with a fresh timer next pass.
                self.timers.clear(vehicle.id);
                if let Some(veto) = outcome.vetoed {
                    stats.vetoed += 1;
                    if debug.break_vehicle {
                        info!("Vetoed break of {} at {}: {veto}", vehicle.kind, vehicle.location);
                    }
                } else if outcome.removed {
                    stats.broken += 1;
                    if debug.break_vehicle {
                        info!("{}", break_message(vehicle, &outcome));
                    }
                }
                observer.on_break(name, vehicle, &outcome);
            }
        }
    }
}

fn due_in_secs(state: &TimerState, now: Millis) -> u64 {
    state.remaining(now) / MILLIS_PER_SEC
}

/// `empty` or `passenger ZOMBIE PLAYER`, for tag and extend lines.
fn describe(vehicle: &Vehicle) -> String {
    if vehicle.is_empty() {
        "empty".to_owned()
    } else {
        format!("passenger {}", vehicle.passenger_summary())
    }
}

/// Rider description including custom names.
fn describe_named(vehicle: &Vehicle) -> String {
    let riders: Vec<String> = vehicle
        .passengers
        .iter()
        .map(|p| match &p.custom_name {
            Some(name) => format!("{} custom name \"{name}\"", p.kind),
            None => p.kind.to_string(),
        })
        .collect();
    format!("passenger {}", riders.join(", "))
}

fn break_message(vehicle: &Vehicle, outcome: &BreakOutcome) -> String {
    let mut message = format!("Breaking {} at {}", vehicle.kind, vehicle.location);
    if let Some(item) = outcome.dropped_item {
        message.push_str(&format!(" dropping {item}"));
    }
    if vehicle.is_empty() {
        message.push_str(", no passenger");
    } else {
        message.push_str(&format!(", passenger {}", vehicle.passenger_summary()));
    }
    message
}
