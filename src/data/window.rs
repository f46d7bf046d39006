//! Windowing pipeline: the derived, time-bounded view of the sample log.
//!
//! Three stages, each a pure function of its inputs and memoized so that
//! repeated reads by several chart renderers in the same interaction never
//! re-sort or re-filter the full log:
//!
//! 1. `sorted` — the log copied and sorted ascending by timestamp, cached per
//!    log version (only the timestamp order is contractual; tie order is not).
//! 2. `in_range` — the sorted samples with `timestamp >= now - range*1000`,
//!    cached per (log version, range) pair.
//! 3. `domain` — `[max_ts - range*1000, max_ts]` over the in-range set, so the
//!    axis width always equals the selected window regardless of how many
//!    samples actually fall inside it.
//!
//! Cost is O(n log n) per distinct (version, range) pair, not per reader.

use chrono::Utc;

use super::samples::{Sample, SampleLog};

/// The derived working set for one (log version, range) pair.
#[derive(Debug, Clone, Default)]
pub struct WindowView {
    /// Samples inside the look-back window, ascending by timestamp.
    pub in_range: Vec<Sample>,
    /// Time-axis domain in epoch milliseconds. `[0, 0]` when no samples are
    /// in range — a degenerate but deterministic domain renderers must
    /// tolerate.
    pub domain: [i64; 2],
}

impl WindowView {
    /// At most the `cap` most recent in-range samples. A rendering-layer
    /// bound on node counts, layered on top of the pipeline output.
    pub fn recent(&self, cap: usize) -> &[Sample] {
        let start = self.in_range.len().saturating_sub(cap);
        &self.in_range[start..]
    }
}

/// Memoized sorted → in-range → domain derivation.
#[derive(Debug, Default)]
pub struct WindowPipeline {
    sorted: Vec<Sample>,
    sorted_version: Option<u64>,
    view: WindowView,
    view_key: Option<(u64, u32)>,
}

impl WindowPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The log sorted ascending by timestamp, recomputed only when the log
    /// version changed.
    pub fn sorted(&mut self, log: &SampleLog) -> &[Sample] {
        self.ensure_sorted(log);
        &self.sorted
    }

    /// The windowed view for the current wall-clock "now".
    pub fn view(&mut self, log: &SampleLog, range_secs: u32) -> &WindowView {
        self.view_at(log, range_secs, Utc::now().timestamp_millis())
    }

    /// The windowed view with an explicit "now" in epoch milliseconds.
    ///
    /// The result is cached on (log version, range): as long as neither
    /// changes, later calls return the cached view even if `now_ms` moved on.
    /// Staleness within one log version is accepted; touch the log to force
    /// a fresh cut.
    pub fn view_at(&mut self, log: &SampleLog, range_secs: u32, now_ms: i64) -> &WindowView {
        let key = (log.version(), range_secs);
        if self.view_key != Some(key) {
            self.ensure_sorted(log);
            let range_ms = i64::from(range_secs) * 1000;
            let cutoff = now_ms - range_ms;
            let start = self.sorted.partition_point(|s| s.timestamp < cutoff);
            let in_range = self.sorted[start..].to_vec();
            let domain = match in_range.last() {
                Some(latest) => [latest.timestamp - range_ms, latest.timestamp],
                None => [0, 0],
            };
            self.view = WindowView { in_range, domain };
            self.view_key = Some(key);
            log::debug!(
                "window pipeline: recomputed view v{} range {}s ({} in range)",
                key.0,
                key.1,
                self.view.in_range.len()
            );
        }
        &self.view
    }

    fn ensure_sorted(&mut self, log: &SampleLog) {
        if self.sorted_version != Some(log.version()) {
            self.sorted = log.samples().to_vec();
            self.sorted.sort_unstable_by_key(|s| s.timestamp);
            self.sorted_version = Some(log.version());
        }
    }
}
