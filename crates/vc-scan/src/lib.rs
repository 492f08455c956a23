//! `vc-scan`: periodic vehicle scan for the vehicle_control workspace.
//!
//! # One pass
//!
//! ```text
//! settings = config.snapshot()          (one Arc<Settings> per pass)
//! now      = clock.now()
//! for world in settings.scan.worlds:    (unknown worlds skipped)
//!   for class in [Boat, RideableMinecart]:
//!     for vehicle in world.vehicles(class):
//!       evaluate(vehicle, timers.get(id), now, rules) →
//!         NoChange          → nothing (occupied untracked ones count as exempted)
//!         SetTimer(t)       → timers.set
//!         UpdateTimer(t)    → timers.set
//!         ClearTimer        → timers.clear
//!         Break             → break_action::apply, then timers.clear
//! timers.retain_live(enumerated ids)
//! ```
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`scanner`]      | `Scanner::run_once`: the pass above                    |
//! | [`break_action`] | `apply`, `BreakOutcome`, `BreakVeto`                   |
//! | [`exit`]         | `on_vehicle_exit`: remove-on-exit                      |
//! | [`scan_loop`]    | `ScanLoop`: periodic schedule and reload detection     |
//! | [`builder`]      | `ScanLoopBuilder`                                      |
//! | [`cancel`]       | `CancelToken`                                          |
//! | [`command`]      | `AdminCommand`, `reload`                               |
//! | [`observer`]     | `ScanObserver`, `NoopObserver`                         |
//! | [`stats`]        | `ScanStats`                                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vc_config::ConfigHandle;
//! use vc_scan::{CancelToken, NoopObserver, ScanLoopBuilder};
//!
//! let config = ConfigHandle::open(Path::new("harbor.toml"))?;
//! let mut scan = ScanLoopBuilder::new(host, config).build()?;
//! scan.run(&mut NoopObserver, &CancelToken::new());
//! ```

pub mod break_action;
pub mod builder;
pub mod cancel;
pub mod command;
pub mod error;
pub mod exit;
pub mod observer;
pub mod scan_loop;
pub mod scanner;
pub mod stats;

#[cfg(test)]
mod tests;

pub use break_action::{BreakOutcome, BreakVeto};
pub use builder::ScanLoopBuilder;
pub use cancel::CancelToken;
pub use command::AdminCommand;
pub use error::{ScanError, ScanResult};
pub use exit::on_vehicle_exit;
pub use observer::{NoopObserver, ScanObserver};
pub use scan_loop::ScanLoop;
pub use scanner::Scanner;
pub use stats::ScanStats;
