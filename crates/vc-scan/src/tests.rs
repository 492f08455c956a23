//! Integration tests for vc-scan.

use vc_config::{ConfigHandle, DebugFlags, RuleSet, ScanSettings, Settings};
use vc_core::{BoatWood, CartKind, EntityType, ItemKind, Location, Millis, VehicleId, VehicleKind};
use vc_timer::Decision;
use vc_world::{Host, MemoryHost, MemoryWorld, Passenger, Vehicle, World};

use crate::{BreakOutcome, NoopObserver, ScanObserver, ScanStats, Scanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

const BOAT: VehicleKind = VehicleKind::Boat(BoatWood::Spruce);
const CART: VehicleKind = VehicleKind::Minecart(CartKind::Rideable);

/// Empty vehicles break after 60 s, zombie riders after 120 s, named
/// villagers are exempt.
fn settings() -> Settings {
    Settings {
        debug: DebugFlags {
            configuration:  false,
            overhead:       true,
            break_vehicle:  true,
            exempt_vehicle: true,
            tag_vehicle:    true,
            extend_vehicle: true,
        },
        scan: ScanSettings { period_secs: 30, worlds: vec!["world".into()] },
        rules: RuleSet {
            break_empty:               true,
            break_empty_secs:          60,
            break_with_passenger:      true,
            break_with_passenger_secs: 120,
            breakable_types:           [EntityType::Zombie, EntityType::Villager].into_iter().collect(),
            exempt_named:              true,
            exempt_named_types:        [EntityType::Villager].into_iter().collect(),
            drop_item:                 true,
            remove_on_exit:            false,
        },
    }
}

fn host() -> MemoryHost {
    MemoryHost::new().with_world("world")
}

fn world(host: &mut MemoryHost) -> &mut MemoryWorld {
    host.world_mut("world").unwrap()
}

fn pass(scanner: &mut Scanner, host: &mut MemoryHost, s: &Settings, now: u64) -> ScanStats {
    scanner.run_once(host, s, Millis(now), &mut NoopObserver)
}

/// Observer that records every hook call.
#[derive(Default)]
struct Recorder {
    starts:    usize,
    ends:      usize,
    decisions: Vec<(String, VehicleKind, Decision)>,
    breaks:    Vec<(VehicleId, BreakOutcome)>,
    loop_end:  Option<u64>,
}

impl ScanObserver for Recorder {
    fn on_pass_start(&mut self, _now: Millis) {
        self.starts += 1;
    }
    fn on_decision(&mut self, world: &str, vehicle: &Vehicle, decision: &Decision) {
        self.decisions.push((world.to_owned(), vehicle.kind, *decision));
    }
    fn on_break(&mut self, _world: &str, vehicle: &Vehicle, outcome: &BreakOutcome) {
        self.breaks.push((vehicle.id, *outcome));
    }
    fn on_pass_end(&mut self, _now: Millis, _stats: &ScanStats) {
        self.ends += 1;
    }
    fn on_loop_end(&mut self, passes: u64) {
        self.loop_end = Some(passes);
    }
}

// ── Scanner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scanner_tests {
    use super::*;

    #[test]
    fn empty_boat_breaks_after_grace_and_drops_its_item() {
        let s = settings();
        let mut h = host();
        let id = world(&mut h).spawn(BOAT, 1.5, 64.0, -2.5);
        let mut scanner = Scanner::new();

        let stats = pass(&mut scanner, &mut h, &s, 0);
        assert_eq!((stats.scanned, stats.tagged), (1, 1));
        assert!(scanner.timers.contains(id));

        let stats = pass(&mut scanner, &mut h, &s, 59_999);
        assert_eq!(stats.changed(), 0);

        let stats = pass(&mut scanner, &mut h, &s, 60_000);
        assert_eq!(stats.broken, 1);
        let w = world(&mut h);
        assert!(!w.contains(id));
        assert_eq!(w.dropped, vec![(Location::new("world", 1.5, 64.0, -2.5), ItemKind::Boat(BoatWood::Spruce))]);
        assert!(scanner.timers.is_empty());
    }

    #[test]
    fn repeated_world_is_scanned_once_per_pass() {
        let mut s = settings();
        s.scan.worlds = vec!["world".into(), "world".into()];
        s.rules.break_empty_secs = 0;
        let mut h = host();
        let id = world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        let mut scanner = Scanner::new();

        let stats = pass(&mut scanner, &mut h, &s, 0);
        assert_eq!((stats.scanned, stats.tagged, stats.broken), (1, 1, 0));
        assert!(world(&mut h).contains(id));

        let stats = pass(&mut scanner, &mut h, &s, 0);
        assert_eq!((stats.scanned, stats.broken), (1, 1));
    }

    #[test]
    fn drop_disabled_still_removes() {
        let mut s = settings();
        s.rules.drop_item = false;
        let mut h = host();
        let id = world(&mut h).spawn(CART, 0.0, 64.0, 0.0);
        let mut scanner = Scanner::new();

        pass(&mut scanner, &mut h, &s, 0);
        let stats = pass(&mut scanner, &mut h, &s, 60_000);
        assert_eq!(stats.broken, 1);
        assert!(!world(&mut h).contains(id));
        assert!(world(&mut h).dropped.is_empty());
    }

    #[test]
    fn cargo_vetoes_break_and_vehicle_is_retagged() {
        let s = settings();
        let mut h = host();
        let loc = Location::new("world", 0.0, 64.0, 0.0);
        world(&mut h).insert(Vehicle::new(VehicleId(10), BOAT, loc).with_cargo(3));
        let mut scanner = Scanner::new();

        pass(&mut scanner, &mut h, &s, 0);
        let stats = pass(&mut scanner, &mut h, &s, 60_000);
        assert_eq!((stats.broken, stats.vetoed), (0, 1));
        assert!(world(&mut h).contains(VehicleId(10)));
        assert!(world(&mut h).dropped.is_empty());
        assert!(!scanner.timers.contains(VehicleId(10)));

        let stats = pass(&mut scanner, &mut h, &s, 61_000);
        assert_eq!(stats.tagged, 1);
        assert_eq!(scanner.timers.get(VehicleId(10)).unwrap().due_at, Millis(121_000));
    }

    #[test]
    fn non_rideable_carts_are_never_enumerated() {
        let s = settings();
        let mut h = host();
        for cart in [CartKind::Chest, CartKind::Furnace, CartKind::Hopper, CartKind::Tnt,
                     CartKind::Spawner, CartKind::CommandBlock] {
            world(&mut h).spawn(VehicleKind::Minecart(cart), 0.0, 64.0, 0.0);
        }
        let mut scanner = Scanner::new();

        for now in [0, 60_000, 1_000_000] {
            let stats = pass(&mut scanner, &mut h, &s, now);
            assert_eq!(stats.scanned, 0);
        }
        assert_eq!(world(&mut h).len(), 6);
        assert!(scanner.timers.is_empty());
    }

    #[test]
    fn boarding_after_empty_tag_extends_then_breaks() {
        let s = settings();
        let mut h = host();
        let id = world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        let mut scanner = Scanner::new();

        pass(&mut scanner, &mut h, &s, 0);
        world(&mut h).board(id, Passenger::new(EntityType::Zombie));

        let stats = pass(&mut scanner, &mut h, &s, 30_000);
        assert_eq!(stats.changed(), 0);

        let stats = pass(&mut scanner, &mut h, &s, 60_000);
        assert_eq!(stats.extended, 1);
        assert_eq!(scanner.timers.get(id).unwrap().due_at, Millis(180_000));

        let stats = pass(&mut scanner, &mut h, &s, 180_000);
        assert_eq!(stats.broken, 1);
        assert!(!world(&mut h).contains(id));
    }

    #[test]
    fn safe_rider_clears_due_timer() {
        let s = settings();
        let mut h = host();
        let id = world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        let mut scanner = Scanner::new();

        pass(&mut scanner, &mut h, &s, 0);
        world(&mut h).board(id, Passenger::new(EntityType::Player));
        let stats = pass(&mut scanner, &mut h, &s, 60_000);
        assert_eq!(stats.cleared, 1);
        assert!(!scanner.timers.contains(id));
        assert!(world(&mut h).contains(id));
    }

    #[test]
    fn occupied_untracked_vehicles_count_as_exempted() {
        let s = settings();
        let mut h = host();
        let named = world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        world(&mut h).board(named, Passenger::named(EntityType::Villager, "Bob"));
        let player = world(&mut h).spawn(CART, 5.0, 64.0, 0.0);
        world(&mut h).board(player, Passenger::new(EntityType::Player));
        let mut scanner = Scanner::new();

        let stats = pass(&mut scanner, &mut h, &s, 0);
        assert_eq!((stats.scanned, stats.exempted, stats.tagged), (2, 2, 0));
        assert!(scanner.timers.is_empty());
    }

    #[test]
    fn timers_of_vanished_vehicles_are_reclaimed() {
        let s = settings();
        let mut h = host();
        let gone = world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        let kept = world(&mut h).spawn(BOAT, 9.0, 64.0, 0.0);
        let mut scanner = Scanner::new();

        pass(&mut scanner, &mut h, &s, 0);
        assert!(world(&mut h).remove_vehicle(gone));

        let stats = pass(&mut scanner, &mut h, &s, 1_000);
        assert_eq!(stats.reclaimed, 1);
        assert!(!scanner.timers.contains(gone));
        assert!(scanner.timers.contains(kept));
    }

    #[test]
    fn unknown_worlds_are_skipped() {
        let mut s = settings();
        s.scan.worlds = vec!["nowhere".into(), "world".into()];
        let mut h = host();
        world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        let stats = pass(&mut Scanner::new(), &mut h, &s, 0);
        assert_eq!(stats.scanned, 1);
    }

    #[test]
    fn worlds_in_config_order_boats_before_carts() {
        let mut s = settings();
        s.scan.worlds = vec!["nether".into(), "world".into()];
        let mut h = host().with_world("nether");
        world(&mut h).spawn(CART, 0.0, 64.0, 0.0);
        world(&mut h).spawn(BOAT, 0.0, 64.0, 0.0);
        h.world_mut("nether").unwrap().spawn(BOAT, 0.0, 64.0, 0.0);

        let mut rec = Recorder::default();
        Scanner::new().run_once(&mut h, &s, Millis(0), &mut rec);
        let order: Vec<_> = rec.decisions.iter().map(|(w, k, _)| (w.as_str(), *k)).collect();
        assert_eq!(order, [("nether", BOAT), ("world", BOAT), ("world", CART)]);
    }

    #[test]
    fn observer_sees_break_outcomes() {
        let s = settings();
        let mut h = host();
        let id = world(&mut h).spawn(CART, 0.0, 64.0, 0.0);
        let mut scanner = Scanner::new();
        let mut rec = Recorder::default();

        scanner.run_once(&mut h, &s, Millis(0), &mut rec);
        scanner.run_once(&mut h, &s, Millis(60_000), &mut rec);
        assert_eq!(rec.breaks.len(), 1);
        let (broken, outcome) = rec.breaks[0];
        assert_eq!(broken, id);
        assert!(outcome.removed);
        assert_eq!(outcome.dropped_item, Some(ItemKind::Minecart));
        assert_eq!(rec.decisions.last().map(|d| d.2), Some(Decision::Break));
    }
}

// ── Break action ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod break_tests {
    use super::*;
    use crate::BreakVeto;
    use crate::break_action::{apply, veto};

    fn spawned(kind: VehicleKind) -> (MemoryWorld, Vehicle) {
        let mut w = MemoryWorld::new("world");
        let id = w.spawn(kind, 0.0, 64.0, 0.0);
        let v = w.get(id).unwrap().clone();
        (w, v)
    }

    #[test]
    fn protected_carts_are_vetoed() {
        for cart in [CartKind::Spawner, CartKind::CommandBlock] {
            let (mut w, v) = spawned(VehicleKind::Minecart(cart));
            let outcome = apply(&mut w, &v, &settings().rules);
            assert_eq!(outcome.vetoed, Some(BreakVeto::Protected));
            assert!(!outcome.removed);
            assert!(w.contains(v.id));
        }
    }

    #[test]
    fn cargo_is_checked_first() {
        let (mut w, v) = spawned(VehicleKind::Minecart(CartKind::Chest));
        let v = v.with_cargo(1);
        assert_eq!(veto(&v), Some(BreakVeto::Cargo));
        assert!(!apply(&mut w, &v, &settings().rules).removed);
    }

    #[test]
    fn empty_storage_cart_drops_its_own_item() {
        let (mut w, v) = spawned(VehicleKind::Minecart(CartKind::Hopper));
        let outcome = apply(&mut w, &v, &settings().rules);
        assert!(outcome.removed);
        assert_eq!(outcome.dropped_item, Some(ItemKind::HopperMinecart));
        assert_eq!(w.dropped.len(), 1);
    }

    #[test]
    fn vanished_vehicle_drops_nothing() {
        let (mut w, v) = spawned(BOAT);
        w.remove_vehicle(v.id);
        let outcome = apply(&mut w, &v, &settings().rules);
        assert_eq!(outcome, BreakOutcome::default());
        assert!(w.dropped.is_empty());
    }

    #[test]
    fn veto_labels() {
        assert_eq!(BreakVeto::Cargo.to_string(), "cargo");
        assert_eq!(BreakVeto::Protected.to_string(), "protected kind");
    }
}

// ── Remove on exit ────────────────────────────────────────────────────────────

#[cfg(test)]
mod exit_tests {
    use super::*;
    use vc_timer::{TimerState, TimerStore};

    use crate::on_vehicle_exit;

    #[test]
    fn removes_and_forgets_when_enabled() {
        let mut rules = settings().rules;
        rules.remove_on_exit = true;
        let mut w = MemoryWorld::new("world");
        let id = w.spawn(CART, 0.0, 64.0, 0.0);
        let v = w.get(id).unwrap().clone();
        let mut timers = TimerStore::new();
        timers.set(id, TimerState::empty(Millis(0), 60));

        assert!(on_vehicle_exit(&mut w, &v, &rules, &mut timers));
        assert!(!w.contains(id));
        assert!(w.dropped.is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn ignored_when_disabled() {
        let rules = settings().rules;
        let mut w = MemoryWorld::new("world");
        let id = w.spawn(BOAT, 0.0, 64.0, 0.0);
        let v = w.get(id).unwrap().clone();
        assert!(!on_vehicle_exit(&mut w, &v, &rules, &mut TimerStore::new()));
        assert!(w.contains(id));
    }

    #[test]
    fn other_carts_are_kept() {
        let mut rules = settings().rules;
        rules.remove_on_exit = true;
        let mut w = MemoryWorld::new("world");
        let id = w.spawn(VehicleKind::Minecart(CartKind::Furnace), 0.0, 64.0, 0.0);
        let v = w.get(id).unwrap().clone();
        assert!(!on_vehicle_exit(&mut w, &v, &rules, &mut TimerStore::new()));
        assert!(w.contains(id));
    }
}

// ── ScanLoop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use std::io::Write;
    use std::time::{Duration, Instant};

    use vc_core::{Clock, ManualClock, SystemClock};

    use super::*;
    use crate::{CancelToken, ScanError, ScanLoop, ScanLoopBuilder, command};

    fn scan_loop(s: Settings) -> (ScanLoop<MemoryHost, ManualClock>, ManualClock) {
        let clock = ManualClock::new(Millis::ZERO);
        let scan = ScanLoopBuilder::new(host(), ConfigHandle::new(s))
            .clock(clock.clone())
            .build()
            .unwrap();
        (scan, clock)
    }

    fn write_config(dir: &tempfile::TempDir, empty_secs: u32) -> std::path::PathBuf {
        let path = dir.path().join("vc.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            "[scan]\nworlds = [\"world\"]\n[vehicles]\nbreak-empty-seconds = {empty_secs}\n"
        )
        .unwrap();
        path
    }

    #[test]
    fn builder_rejects_empty_world_list() {
        let mut s = settings();
        s.scan.worlds.clear();
        let result = ScanLoopBuilder::new(host(), ConfigHandle::new(s)).build();
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn builder_defaults_to_system_clock() {
        let scan: ScanLoop<MemoryHost, SystemClock> =
            ScanLoopBuilder::new(host(), ConfigHandle::new(settings())).build().unwrap();
        assert!(scan.clock.now() > Millis::ZERO);
    }

    #[test]
    fn builder_accepts_missing_worlds() {
        let mut s = settings();
        s.scan.worlds.push("nowhere".into());
        assert!(ScanLoopBuilder::new(host(), ConfigHandle::new(s)).build().is_ok());
    }

    #[test]
    fn passes_use_the_clock() {
        let (mut scan, clock) = scan_loop(settings());
        let id = world(&mut scan.host).spawn(BOAT, 0.0, 64.0, 0.0);

        scan.run_pass(&mut NoopObserver);
        clock.advance_secs(30);
        assert_eq!(scan.run_pass(&mut NoopObserver).changed(), 0);
        clock.advance_secs(30);
        assert_eq!(scan.run_pass(&mut NoopObserver).broken, 1);
        assert!(!world(&mut scan.host).contains(id));
        assert_eq!(scan.passes, 3);
    }

    #[test]
    fn run_passes_calls_pass_hooks() {
        let (mut scan, _clock) = scan_loop(settings());
        let mut rec = Recorder::default();
        scan.run_passes(3, &mut rec);
        assert_eq!((rec.starts, rec.ends), (3, 3));
        assert_eq!(rec.loop_end, None);
    }

    #[test]
    fn replaced_settings_apply_from_next_pass() {
        let (mut scan, _clock) = scan_loop(settings());
        let first = world(&mut scan.host).spawn(BOAT, 0.0, 64.0, 0.0);
        scan.run_pass(&mut NoopObserver);

        let mut s = settings();
        s.rules.break_empty_secs = 10;
        scan.config.replace(s);

        let second = world(&mut scan.host).spawn(BOAT, 5.0, 64.0, 0.0);
        scan.run_pass(&mut NoopObserver);
        assert_eq!(scan.scanner.timers.get(first).unwrap().due_at, Millis(60_000));
        assert_eq!(scan.scanner.timers.get(second).unwrap().due_at, Millis(10_000));
    }

    #[test]
    fn reload_command_reads_the_file_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, 60);
        let config = ConfigHandle::open(&path).unwrap();
        let clock = ManualClock::new(Millis::ZERO);
        let mut scan = ScanLoopBuilder::new(host(), config.clone())
            .clock(clock.clone())
            .build()
            .unwrap();

        let first = world(&mut scan.host).spawn(BOAT, 0.0, 64.0, 0.0);
        scan.run_pass(&mut NoopObserver);

        write_config(&dir, 10);
        let message = command::reload(&config, "VehicleControl").unwrap();
        assert_eq!(message, "VehicleControl configuration reloaded.");

        clock.advance_secs(1);
        let second = world(&mut scan.host).spawn(BOAT, 5.0, 64.0, 0.0);
        scan.run_pass(&mut NoopObserver);
        assert_eq!(scan.scanner.timers.get(first).unwrap().due_at, Millis(60_000));
        assert_eq!(scan.scanner.timers.get(second).unwrap().due_at, Millis(11_000));
    }

    #[test]
    fn bad_reload_keeps_previous_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, 45);
        let config = ConfigHandle::open(&path).unwrap();
        std::fs::write(&path, "[vehicles\nbroken").unwrap();

        let result = command::reload(&config, "VehicleControl");
        assert!(matches!(result, Err(ScanError::Settings(_))));
        assert_eq!(config.snapshot().rules.break_empty_secs, 45);
    }

    #[test]
    fn exit_hook_uses_current_settings() {
        let mut s = settings();
        s.rules.remove_on_exit = true;
        let (mut scan, _clock) = scan_loop(s);
        let id = world(&mut scan.host).spawn(BOAT, 0.0, 64.0, 0.0);
        scan.run_pass(&mut NoopObserver);

        let v = scan.host.world("world").unwrap().get(id).unwrap().clone();
        assert!(scan.vehicle_exited("world", &v));
        assert!(!scan.scanner.timers.contains(id));
        assert!(!scan.vehicle_exited("nowhere", &v));
    }

    #[test]
    fn cancelled_token_runs_no_pass() {
        let (mut scan, _clock) = scan_loop(settings());
        let token = CancelToken::new();
        token.cancel();
        let mut rec = Recorder::default();
        assert_eq!(scan.run(&mut rec, &token), 0);
        assert_eq!(rec.starts, 0);
        assert_eq!(rec.loop_end, Some(0));
    }

    #[test]
    fn cancel_wakes_the_inter_pass_sleep() {
        let (mut scan, _clock) = scan_loop(settings());
        let token = CancelToken::new();
        let remote = token.clone();
        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            remote.cancel();
        });

        let started = Instant::now();
        let ran = scan.run(&mut NoopObserver, &token);
        canceller.join().unwrap();
        assert_eq!(ran, 1);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn wait_times_out_without_cancel() {
        let token = CancelToken::new();
        assert!(!token.wait(Duration::from_millis(5)));
        assert!(!token.is_cancelled());
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod command_tests {
    use crate::AdminCommand;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(AdminCommand::parse(&["reload"]), Some(AdminCommand::Reload));
        assert_eq!(AdminCommand::parse(&["RELOAD"]), Some(AdminCommand::Reload));
        assert_eq!(AdminCommand::parse(&["Stop"]), Some(AdminCommand::Stop));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert_eq!(AdminCommand::parse::<&str>(&[]), None);
        assert_eq!(AdminCommand::parse(&["reload", "now"]), None);
        assert_eq!(AdminCommand::parse(&["restart"]), None);
    }

    #[test]
    fn usage_names_the_command() {
        assert!(AdminCommand::usage("/vehiclecontrol").starts_with("Usage: /vehiclecontrol reload"));
    }
}
