//! Plain data row types written by output backends.

/// Counters for one scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummaryRow {
    /// Zero-based pass index within this output session.
    pub pass:       u64,
    /// Pass timestamp, milliseconds since the Unix epoch (or the manual
    /// clock's origin).
    pub now_ms:     u64,
    pub scanned:    u64,
    pub tagged:     u64,
    pub extended:   u64,
    pub cleared:    u64,
    pub broken:     u64,
    pub vetoed:     u64,
    pub reclaimed:  u64,
    pub exempted:   u64,
    /// Wall time of the pass in microseconds.
    pub elapsed_us: u64,
}

/// One attempted break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakEventRow {
    pub pass:         u64,
    pub now_ms:       u64,
    pub world:        String,
    pub vehicle_id:   u64,
    /// Host entity name, e.g. `"BOAT"`.
    pub kind:         &'static str,
    /// Block coordinates.
    pub x:            i64,
    pub y:            i64,
    pub z:            i64,
    pub removed:      bool,
    /// Material name of the dropped item; empty if none.
    pub dropped_item: &'static str,
    /// Veto reason; empty if the break was not vetoed.
    pub veto:         String,
}
