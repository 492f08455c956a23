//! Wall-clock time model.
//!
//! # Design
//!
//! Timers are measured in system milliseconds rather than host ticks, so a
//! slow tick rate or a frozen daylight cycle never stretches a grace period.
//! The canonical unit is [`Millis`], an absolute timestamp:
//!
//!   due_at = now + grace_secs * 1000
//!
//! A [`Clock`] supplies `now` once per scan pass; every vehicle in that pass
//! is evaluated against the same value.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds per second.
pub const MILLIS_PER_SEC: u64 = 1_000;

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute timestamp in milliseconds.
///
/// Arithmetic saturates at `u64::MAX` so an absurd grace period yields a timer
/// that never comes due rather than one that wraps into the past.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// The timestamp `secs` whole seconds after `self`.
    #[inline]
    pub fn after_secs(self, secs: u32) -> Millis {
        Millis(self.0.saturating_add(u64::from(secs) * MILLIS_PER_SEC))
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier` is
    /// later.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of `now` for a scan pass.
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Reads the system wall clock (milliseconds since the Unix epoch).
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        // A clock set before 1970 reads as the epoch.
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Millis(ms)
    }
}

/// A hand-driven clock for tests and offline simulation.
///
/// Clones share the same counter, so a test can keep one handle and advance
/// time while the scan loop owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: Arc::new(AtomicU64::new(start.0)) }
    }

    /// Jump to an absolute timestamp.
    pub fn set(&self, at: Millis) {
        self.now.store(at.0, Ordering::SeqCst);
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Move forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs * MILLIS_PER_SEC);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.load(Ordering::SeqCst))
    }
}
