//! Configuration shared across the powerscope core.

use std::time::Duration;

/// Default look-back window, also the fallback substituted for invalid
/// `set_time_range` input.
pub const DEFAULT_TIME_RANGE_SECS: u32 = 300;

/// One selectable look-back window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRangeOption {
    /// Display name for selectors.
    pub name: &'static str,
    /// Window width in seconds.
    pub secs: u32,
}

/// The fixed set of selectable look-back windows, in display order.
pub const TIME_RANGE_OPTIONS: [TimeRangeOption; 9] = [
    TimeRangeOption { name: "Last 10s", secs: 10 },
    TimeRangeOption { name: "Last 30s", secs: 30 },
    TimeRangeOption { name: "Last 1m", secs: 60 },
    TimeRangeOption { name: "Last 2m", secs: 120 },
    TimeRangeOption { name: "Last 5m", secs: 300 },
    TimeRangeOption { name: "Last 30m", secs: 1800 },
    TimeRangeOption { name: "Last 1h", secs: 3600 },
    TimeRangeOption { name: "Last 2h", secs: 7200 },
    TimeRangeOption { name: "Last 5h", secs: 18000 },
];

/// Top-level configuration for the core.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    // ── Window / data ────────────────────────────────────────────────────
    /// Initial look-back window in seconds.
    pub time_range_secs: u32,
    /// Cap on the series handed to node-count-sensitive renderers.
    pub max_reads: usize,

    // ── Axes / plot geometry ─────────────────────────────────────────────
    /// Fixed value-axis bounds in watts, used outside an active zoom.
    pub y_min: f64,
    pub y_max: f64,
    /// Plot area size in pixels; the screen range the time scale maps onto.
    pub chart_width: f64,
    pub chart_height: f64,

    // ── Producers / persistence ──────────────────────────────────────────
    /// Tick interval of the automatic sample feeder.
    pub feeder_interval: Duration,
    /// Minimum wall-clock gap between two persisted snapshots.
    pub snapshot_min_interval: Duration,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            time_range_secs: DEFAULT_TIME_RANGE_SECS,
            max_reads: 300,
            y_min: -100.0,
            y_max: 1100.0,
            chart_width: 462.0,
            chart_height: 300.0,
            feeder_interval: Duration::from_millis(2000),
            snapshot_min_interval: Duration::from_millis(5000),
        }
    }
}
