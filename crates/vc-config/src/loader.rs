//! TOML settings loader.
//!
//! # File format
//!
//! Keys mirror the plugin's historic `config.yml` layout, in kebab-case.
//! Every key is optional and falls back to the default shown here.
//!
//! ```toml
//! [debug]
//! configuration  = false
//! overhead       = false
//! break-vehicle  = false
//! exempt-vehicle = false
//! tag-vehicle    = false
//! extend-vehicle = false
//!
//! [scan]
//! period-seconds = 30
//! worlds         = ["world"]
//!
//! [vehicles]
//! remove-on-exit                    = false
//! drop-item                         = true
//! break-empty                       = true
//! break-empty-seconds               = 300
//! break-with-passenger              = true
//! break-with-passenger-seconds      = 600
//! break-with-passenger-types        = ["ZOMBIE", "SKELETON"]
//! exempt-with-named-passenger       = true
//! exempt-with-named-passenger-types = ["VILLAGER"]
//! ```
//!
//! Entity type names that the host does not know are skipped with a warning.
//! Negative durations are clamped to zero and a period below one second is
//! raised to one, also with a warning.  Repeated world names are scanned once.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use vc_core::{EntityType, VcError};

use crate::{ConfigError, ConfigResult, DebugFlags, RuleSet, ScanSettings, Settings};

// ── Raw file records ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    debug:    RawDebug,
    scan:     RawScan,
    vehicles: RawVehicles,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
struct RawDebug {
    configuration:  bool,
    overhead:       bool,
    break_vehicle:  bool,
    exempt_vehicle: bool,
    tag_vehicle:    bool,
    extend_vehicle: bool,
}

#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawScan {
    period_seconds: i64,
    worlds:         Vec<String>,
}

impl Default for RawScan {
    fn default() -> Self {
        Self { period_seconds: 30, worlds: vec!["world".to_owned()] }
    }
}

#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawVehicles {
    remove_on_exit:                    bool,
    drop_item:                         bool,
    break_empty:                       bool,
    break_empty_seconds:               i64,
    break_with_passenger:              bool,
    break_with_passenger_seconds:      i64,
    break_with_passenger_types:        Vec<String>,
    exempt_with_named_passenger:       bool,
    exempt_with_named_passenger_types: Vec<String>,
}

impl Default for RawVehicles {
    fn default() -> Self {
        Self {
            remove_on_exit:                    false,
            drop_item:                         true,
            break_empty:                       true,
            break_empty_seconds:               300,
            break_with_passenger:              true,
            break_with_passenger_seconds:      600,
            break_with_passenger_types:        Vec::new(),
            exempt_with_named_passenger:       true,
            exempt_with_named_passenger_types: Vec::new(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse a settings file.
///
/// Logs the full configuration when `debug.configuration` is set.
pub fn load_settings(path: &Path) -> ConfigResult<Settings> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text)?;
    if settings.debug.configuration {
        settings.log_summary();
    }
    Ok(settings)
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> ConfigResult<Settings> {
    let raw: RawConfig = toml::from_str(text)?;
    Ok(raw.into_settings())
}

// ── Conversion ────────────────────────────────────────────────────────────────

impl RawConfig {
    fn into_settings(self) -> Settings {
        let RawConfig { debug, scan, vehicles: v } = self;

        let debug = DebugFlags {
            configuration:  debug.configuration,
            overhead:       debug.overhead,
            break_vehicle:  debug.break_vehicle,
            exempt_vehicle: debug.exempt_vehicle,
            tag_vehicle:    debug.tag_vehicle,
            extend_vehicle: debug.extend_vehicle,
        };

        let period_secs = if scan.period_seconds < 1 {
            warn!("scan.period-seconds {} is below 1; using 1", scan.period_seconds);
            1
        } else {
            clamp_secs("scan.period-seconds", scan.period_seconds)
        };

        let rules = RuleSet {
            break_empty:               v.break_empty,
            break_empty_secs:          clamp_secs("vehicles.break-empty-seconds", v.break_empty_seconds),
            break_with_passenger:      v.break_with_passenger,
            break_with_passenger_secs: clamp_secs(
                "vehicles.break-with-passenger-seconds",
                v.break_with_passenger_seconds,
            ),
            breakable_types:    parse_types(&v.break_with_passenger_types, |name, e| {
                warn!(error = %e, "Cannot break vehicles containing invalid entity type \"{name}\".");
            }),
            exempt_named:       v.exempt_with_named_passenger,
            exempt_named_types: parse_types(&v.exempt_with_named_passenger_types, |name, e| {
                warn!(error = %e, "Cannot exempt invalid entity type \"{name}\" from vehicle breakage.");
            }),
            drop_item:          v.drop_item,
            remove_on_exit:     v.remove_on_exit,
        };

        Settings {
            debug,
            scan: ScanSettings { period_secs, worlds: dedup_worlds(scan.worlds) },
            rules,
        }
    }
}

/// Drop repeated world names, keeping the first occurrence.
fn dedup_worlds(worlds: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    worlds
        .into_iter()
        .filter(|name| {
            let first = seen.insert(name.clone());
            if !first {
                warn!("scan.worlds lists \"{name}\" more than once; scanning it once");
            }
            first
        })
        .collect()
}

/// Clamp a configured duration into `0..=u32::MAX` seconds.
fn clamp_secs(key: &str, secs: i64) -> u32 {
    if secs < 0 {
        warn!("{key} {secs} is negative; using 0");
        return 0;
    }
    u32::try_from(secs).unwrap_or_else(|_| {
        warn!("{key} {secs} is too large; using {}", u32::MAX);
        u32::MAX
    })
}

fn parse_types(names: &[String], on_invalid: impl Fn(&str, &VcError)) -> BTreeSet<EntityType> {
    names
        .iter()
        .filter_map(|name| match name.parse::<EntityType>() {
            Ok(ty) => Some(ty),
            Err(e) => {
                on_invalid(name, &e);
                None
            }
        })
        .collect()
}
