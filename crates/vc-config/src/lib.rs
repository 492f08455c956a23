//! `vc-config`: configuration for the vehicle scan.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`rules`]    | `RuleSet`: the breaking rules read by the timeout engine     |
//! | [`settings`] | `Settings`, `DebugFlags`, `ScanSettings`                     |
//! | [`loader`]   | `load_settings`, `parse_settings` (TOML)                     |
//! | [`handle`]   | `ConfigHandle`: shared snapshot replaced on reload           |
//! | [`error`]    | `ConfigError`, `ConfigResult<T>`                             |
//!
//! # Reload model
//!
//! A scan pass calls [`ConfigHandle::snapshot`] once and keeps the returned
//! `Arc<Settings>` for the whole pass.  A reload swaps the handle's pointer;
//! the in-flight pass keeps reading the old snapshot and the next pass picks
//! up the new one.

pub mod error;
pub mod handle;
pub mod loader;
pub mod rules;
pub mod settings;


pub use error::{ConfigError, ConfigResult};
pub use handle::ConfigHandle;
pub use loader::{load_settings, parse_settings};
pub use rules::RuleSet;
pub use settings::{DebugFlags, ScanSettings, Settings};
