//! Top-level settings: debug flags, scan schedule, and rules.

use std::time::Duration;

use tracing::info;

use crate::RuleSet;

/// Independent switches for diagnostic log lines.
///
/// None of them affect control flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugFlags {
    /// Log the configuration each time it is loaded.
    pub configuration: bool,
    /// Log the wall time taken by each scan pass.
    pub overhead: bool,
    /// Log every vehicle that breaks.
    pub break_vehicle: bool,
    /// Log occupied vehicles that are exempt from a timer.
    pub exempt_vehicle: bool,
    /// Log every new timer.
    pub tag_vehicle: bool,
    /// Log occupied-timer extensions and timer clears.
    pub extend_vehicle: bool,
}

/// When and where to scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSettings {
    /// Seconds between the end of one pass and the start of the next.
    /// Always at least 1.
    pub period_secs: u32,
    /// Names of the worlds to scan, in scan order.
    pub worlds: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self { period_secs: 30, worlds: Vec::new() }
    }
}

/// Everything a scan pass reads, as one immutable snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: DebugFlags,
    pub scan:  ScanSettings,
    pub rules: RuleSet,
}

impl Settings {
    /// The inter-pass delay.
    #[inline]
    pub fn period(&self) -> Duration {
        Duration::from_secs(u64::from(self.scan.period_secs.max(1)))
    }

    /// Configured world names for which `exists` returns `false`.
    pub fn missing_worlds(&self, exists: impl Fn(&str) -> bool) -> Vec<&str> {
        self.scan
            .worlds
            .iter()
            .map(String::as_str)
            .filter(|name| !exists(name))
            .collect()
    }

    /// Emit one `info!` line per setting.
    pub fn log_summary(&self) {
        let d = &self.debug;
        let r = &self.rules;
        info!("Configuration:");
        info!("DEBUG_OVERHEAD: {}", d.overhead);
        info!("DEBUG_BREAK_VEHICLE: {}", d.break_vehicle);
        info!("DEBUG_EXEMPT_VEHICLE: {}", d.exempt_vehicle);
        info!("DEBUG_TAG_VEHICLE: {}", d.tag_vehicle);
        info!("DEBUG_EXTEND_VEHICLE: {}", d.extend_vehicle);
        info!("SCAN_PERIOD_SECONDS: {}", self.scan.period_secs);
        info!("SCAN_WORLDS: {}", self.scan.worlds.join(" "));
        info!("VEHICLES_REMOVE_ON_EXIT: {}", r.remove_on_exit);
        info!("VEHICLES_DROP_ITEM: {}", r.drop_item);
        info!("VEHICLES_BREAK_EMPTY: {}", r.break_empty);
        info!("VEHICLES_BREAK_EMPTY_SECONDS: {}", r.break_empty_secs);
        info!("VEHICLES_BREAK_WITH_PASSENGER: {}", r.break_with_passenger);
        info!("VEHICLES_BREAK_WITH_PASSENGER_SECONDS: {}", r.break_with_passenger_secs);
        info!("VEHICLES_BREAK_WITH_PASSENGER_TYPES: {}", join_types(&r.breakable_types));
        info!("VEHICLES_EXEMPT_WITH_NAMED_PASSENGER: {}", r.exempt_named);
        info!("VEHICLES_EXEMPT_WITH_NAMED_PASSENGER_TYPES: {}", join_types(&r.exempt_named_types));
    }
}

fn join_types(types: &std::collections::BTreeSet<vc_core::EntityType>) -> String {
    types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(" ")
}
