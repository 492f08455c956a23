//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `scan_summaries.csv`
//! - `break_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BreakEventRow, OutputResult, ScanSummaryRow};

pub const SUMMARY_HEADER: [&str; 11] = [
    "pass", "now_ms", "scanned", "tagged", "extended", "cleared",
    "broken", "vetoed", "reclaimed", "exempted", "elapsed_us",
];

pub const BREAK_HEADER: [&str; 11] = [
    "pass", "now_ms", "world", "vehicle_id", "kind", "x", "y", "z",
    "removed", "dropped_item", "veto",
];

/// Writes scan output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    breaks:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` is created if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("scan_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut breaks = Writer::from_path(dir.join("break_events.csv"))?;
        breaks.write_record(BREAK_HEADER)?;

        Ok(Self { summaries, breaks, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_summary(&mut self, row: &ScanSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.pass.to_string(),
            row.now_ms.to_string(),
            row.scanned.to_string(),
            row.tagged.to_string(),
            row.extended.to_string(),
            row.cleared.to_string(),
            row.broken.to_string(),
            row.vetoed.to_string(),
            row.reclaimed.to_string(),
            row.exempted.to_string(),
            row.elapsed_us.to_string(),
        ])?;
        Ok(())
    }

    fn write_breaks(&mut self, rows: &[BreakEventRow]) -> OutputResult<()> {
        for row in rows {
            self.breaks.write_record(&[
                row.pass.to_string(),
                row.now_ms.to_string(),
                row.world.clone(),
                row.vehicle_id.to_string(),
                row.kind.to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                (row.removed as u8).to_string(),
                row.dropped_item.to_owned(),
                row.veto.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.breaks.flush()?;
        Ok(())
    }
}
