//! The `OutputWriter` trait implemented by backend writers.

use crate::{BreakEventRow, OutputResult, ScanSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`ScanOutputObserver::take_error`].
///
/// [`ScanOutputObserver::take_error`]: crate::ScanOutputObserver::take_error
pub trait OutputWriter {
    /// Write one pass summary row.
    fn write_summary(&mut self, row: &ScanSummaryRow) -> OutputResult<()>;

    /// Write a batch of break events.
    fn write_breaks(&mut self, rows: &[BreakEventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
