//! Scan observer trait for progress reporting and data collection.

use vc_core::Millis;
use vc_timer::Decision;
use vc_world::Vehicle;

use crate::{BreakOutcome, ScanStats};

/// Callbacks invoked by [`ScanLoop`][crate::ScanLoop] and
/// [`Scanner::run_once`][crate::Scanner::run_once] at key points of a pass.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: break counter
///
/// ```rust,ignore
/// struct BreakCounter(usize);
///
/// impl ScanObserver for BreakCounter {
///     fn on_break(&mut self, _world: &str, _vehicle: &Vehicle, outcome: &BreakOutcome) {
///         if outcome.removed {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait ScanObserver {
    /// Called before the first world of a pass is enumerated.
    fn on_pass_start(&mut self, _now: Millis) {}

    /// Called for every enumerated vehicle with the decision taken for it,
    /// before the decision is applied.
    fn on_decision(&mut self, _world: &str, _vehicle: &Vehicle, _decision: &Decision) {}

    /// Called after a `Break` decision has been attempted.
    fn on_break(&mut self, _world: &str, _vehicle: &Vehicle, _outcome: &BreakOutcome) {}

    /// Called once the pass has finished, with its counters.
    fn on_pass_end(&mut self, _now: Millis, _stats: &ScanStats) {}

    /// Called once when [`ScanLoop::run`][crate::ScanLoop::run] returns.
    fn on_loop_end(&mut self, _passes: u64) {}
}

/// A [`ScanObserver`] that does nothing.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
