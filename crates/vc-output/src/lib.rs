//! `vc-output`: scan output writers for the vehicle_control workspace.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `scan_summaries.csv`, `break_events.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ScanOutputObserver`], which implements `vc_scan::ScanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vc_output::{CsvWriter, ScanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScanOutputObserver::new(writer);
//! scan.run(&mut obs, &token);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScanOutputObserver;
pub use row::{BreakEventRow, ScanSummaryRow};
pub use writer::OutputWriter;
