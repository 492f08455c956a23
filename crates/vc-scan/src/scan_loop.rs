//! The `ScanLoop` and its pass schedule.

use std::sync::Arc;

use tracing::{info, warn};

use vc_config::{ConfigHandle, Settings};
use vc_core::Clock;
use vc_world::{Host, Vehicle};

use crate::{CancelToken, ScanObserver, ScanStats, Scanner, on_vehicle_exit};

/// Drives [`Scanner::run_once`] on a fixed period.
///
/// Every pass takes one settings snapshot from the [`ConfigHandle`] and one
/// timestamp from the clock, then runs to completion.  The next pass is
/// scheduled `period` after the previous one returns, so a slow pass delays
/// the schedule instead of overlapping it.
///
/// Create via [`ScanLoopBuilder`][crate::ScanLoopBuilder].
pub struct ScanLoop<H: Host, C: Clock> {
    /// Timer state carried between passes.
    pub scanner: Scanner,

    /// The host whose worlds are scanned.
    pub host: H,

    /// Source of pass timestamps.
    pub clock: C,

    /// Current settings; may be reloaded from another thread at any time.
    pub config: ConfigHandle,

    /// Passes completed so far.
    pub passes: u64,

    /// Snapshot used by the previous pass, for change detection.
    pub(crate) applied: Option<Arc<Settings>>,
}

impl<H: Host, C: Clock> ScanLoop<H, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run passes until `token` is cancelled.  Returns the number of passes
    /// run by this call.
    ///
    /// Cancellation is checked between passes; a pass in progress always
    /// completes.
    pub fn run<O: ScanObserver>(&mut self, observer: &mut O, token: &CancelToken) -> u64 {
        let mut ran = 0;
        while !token.is_cancelled() {
            self.run_pass(observer);
            ran += 1;
            let period = self.config.snapshot().period();
            if token.wait(period) {
                break;
            }
        }
        observer.on_loop_end(self.passes);
        ran
    }

    /// Run exactly `n` passes back to back, without sleeping.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_passes<O: ScanObserver>(&mut self, n: u64, observer: &mut O) -> ScanStats {
        let mut last = ScanStats::default();
        for _ in 0..n {
            last = self.run_pass(observer);
        }
        last
    }

    /// Run one pass now.
    pub fn run_pass<O: ScanObserver>(&mut self, observer: &mut O) -> ScanStats {
        let settings = self.config.snapshot();
        self.note_settings(&settings);

        let now = self.clock.now();
        observer.on_pass_start(now);
        let stats = self.scanner.run_once(&mut self.host, &settings, now, observer);
        if settings.debug.overhead {
            info!("Scan task took {} milliseconds", stats.elapsed.as_secs_f64() * 1e3);
        }
        observer.on_pass_end(now, &stats);
        self.passes += 1;
        stats
    }

    /// Apply remove-on-exit to `vehicle` in world `world` using the current
    /// settings.  Returns `true` if the vehicle was removed.
    pub fn vehicle_exited(&mut self, world: &str, vehicle: &Vehicle) -> bool {
        let settings = self.config.snapshot();
        match self.host.world_mut(world) {
            Some(w) => on_vehicle_exit(w, vehicle, &settings.rules, &mut self.scanner.timers),
            None => false,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Warn about unknown worlds whenever a new snapshot is first used.
    fn note_settings(&mut self, settings: &Arc<Settings>) {
        if self.applied.as_ref().is_some_and(|prev| Arc::ptr_eq(prev, settings)) {
            return;
        }
        for name in settings.missing_worlds(|w| self.host.has_world(w)) {
            warn!(world = %name, "configured world does not exist; it will not be scanned");
        }
        self.applied = Some(Arc::clone(settings));
    }
}
