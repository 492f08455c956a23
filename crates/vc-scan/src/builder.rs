//! Fluent builder for constructing a [`ScanLoop`].

use tracing::warn;

use vc_config::ConfigHandle;
use vc_core::{Clock, SystemClock};
use vc_timer::TimerStore;
use vc_world::Host;

use crate::{ScanError, ScanLoop, ScanResult, Scanner};

/// Fluent builder for [`ScanLoop<H, C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default               |
/// |----------------|-----------------------|
/// | `.clock(c)`    | [`SystemClock`]        |
/// | `.timers(t)`   | Empty [`TimerStore`]   |
///
/// # Example
///
/// ```rust,ignore
/// let config = ConfigHandle::open(Path::new("harbor.toml"))?;
/// let mut scan = ScanLoopBuilder::new(host, config)
///     .clock(ManualClock::new(Millis::ZERO))
///     .build()?;
/// scan.run_passes(10, &mut NoopObserver);
/// ```
pub struct ScanLoopBuilder<H: Host, C: Clock = SystemClock> {
    host:   H,
    config: ConfigHandle,
    clock:  C,
    timers: Option<TimerStore>,
}

impl<H: Host> ScanLoopBuilder<H, SystemClock> {
    /// Create a builder with all required inputs.
    pub fn new(host: H, config: ConfigHandle) -> Self {
        Self { host, config, clock: SystemClock, timers: None }
    }
}

impl<H: Host, C: Clock> ScanLoopBuilder<H, C> {
    /// Use `clock` for pass timestamps.
    pub fn clock<C2: Clock>(self, clock: C2) -> ScanLoopBuilder<H, C2> {
        ScanLoopBuilder {
            host:   self.host,
            config: self.config,
            clock,
            timers: self.timers,
        }
    }

    /// Start with existing timer state instead of an empty store.
    pub fn timers(mut self, timers: TimerStore) -> Self {
        self.timers = Some(timers);
        self
    }

    /// Validate the current settings against the host and return a ready loop.
    ///
    /// Fails if no world is configured.  Configured worlds the host does not
    /// know are only warned about.
    pub fn build(self) -> ScanResult<ScanLoop<H, C>> {
        let settings = self.config.snapshot();
        if settings.scan.worlds.is_empty() {
            return Err(ScanError::Config("no worlds configured for scanning".into()));
        }
        for name in settings.missing_worlds(|w| self.host.has_world(w)) {
            warn!(world = %name, "configured world does not exist; it will not be scanned");
        }

        Ok(ScanLoop {
            scanner: Scanner { timers: self.timers.unwrap_or_default() },
            host:    self.host,
            clock:   self.clock,
            config:  self.config,
            passes:  0,
            applied: Some(settings),
        })
    }
}
