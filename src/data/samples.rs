//! Sample types and the append-only sample log.
//!
//! The log is the single source of truth for observed power samples. Insertion
//! order carries no meaning (the window pipeline re-sorts by timestamp) and
//! duplicate timestamps are legal. Every mutation bumps a version counter which
//! derived caches use as their invalidation key.

use serde::{Deserialize, Serialize};

/// One observation of the power signal: epoch-millisecond timestamp and a
/// value in watts. Values are taken as-is; NaN or negative readings are
/// accepted and propagate to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Append-only in-memory log of samples.
///
/// Transitions are `append` (concatenate a batch) and `replace_all`
/// (wholesale replacement, used both for "clear" with an empty batch and for
/// restoring a persisted snapshot). The log is never mutated in place beyond
/// these two operations.
#[derive(Debug, Default)]
pub struct SampleLog {
    samples: Vec<Sample>,
    version: u64,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate `batch` onto the end of the log, preserving prior contents
    /// and the batch's relative order. An empty batch is a no-op and does not
    /// produce a new version.
    pub fn append(&mut self, batch: &[Sample]) {
        if batch.is_empty() {
            return;
        }
        self.samples.extend_from_slice(batch);
        self.version += 1;
        log::debug!(
            "sample log: appended {} sample(s), total {} (v{})",
            batch.len(),
            self.samples.len(),
            self.version
        );
    }

    /// Discard prior contents and set the log to exactly `batch`.
    pub fn replace_all(&mut self, batch: Vec<Sample>) {
        self.samples = batch;
        self.version += 1;
        log::debug!(
            "sample log: replaced, now {} sample(s) (v{})",
            self.samples.len(),
            self.version
        );
    }

    /// The raw samples in storage (pre-sort) order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Version counter; bumped on every logical transition.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
