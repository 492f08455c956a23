//! `ScanOutputObserver<W>`: bridges `ScanObserver` to an `OutputWriter`.

use vc_core::Millis;
use vc_scan::{BreakOutcome, ScanObserver, ScanStats};
use vc_world::Vehicle;

use crate::row::{BreakEventRow, ScanSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ScanObserver`] that writes pass summaries and break events to any
/// [`OutputWriter`] backend.
///
/// Break events are buffered for the duration of a pass and written in one
/// batch at pass end.  Errors from the writer are stored internally because
/// `ScanObserver` methods have no return value; check for them with
/// [`take_error`][Self::take_error].
pub struct ScanOutputObserver<W: OutputWriter> {
    writer:     W,
    pass:       u64,
    now:        Millis,
    pending:    Vec<BreakEventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pass:       0,
            now:        Millis::ZERO,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Called automatically at loop end; call it yourself
    /// after driving passes with `run_pass` or `run_passes`.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ScanObserver for ScanOutputObserver<W> {
    fn on_pass_start(&mut self, now: Millis) {
        self.now = now;
        self.pending.clear();
    }

    fn on_break(&mut self, world: &str, vehicle: &Vehicle, outcome: &BreakOutcome) {
        let (x, y, z) = vehicle.location.block();
        self.pending.push(BreakEventRow {
            pass:         self.pass,
            now_ms:       self.now.0,
            world:        world.to_owned(),
            vehicle_id:   vehicle.id.0,
            kind:         vehicle.kind.entity_name(),
            x,
            y,
            z,
            removed:      outcome.removed,
            dropped_item: outcome.dropped_item.map_or("", |item| item.as_str()),
            veto:         outcome.vetoed.map(|v| v.to_string()).unwrap_or_default(),
        });
    }

    fn on_pass_end(&mut self, now: Millis, stats: &ScanStats) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_breaks(&rows);
            self.store_err(result);
        }

        let row = ScanSummaryRow {
            pass:       self.pass,
            now_ms:     now.0,
            scanned:    stats.scanned as u64,
            tagged:     stats.tagged as u64,
            extended:   stats.extended as u64,
            cleared:    stats.cleared as u64,
            broken:     stats.broken as u64,
            vetoed:     stats.vetoed as u64,
            reclaimed:  stats.reclaimed as u64,
            exempted:   stats.exempted as u64,
            elapsed_us: stats.elapsed.as_micros() as u64,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        self.pass += 1;
    }

    fn on_loop_end(&mut self, _passes: u64) {
        self.finish();
    }
}
