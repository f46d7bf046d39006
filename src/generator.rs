//! Demo sample generation: the random values behind the "add sample" and
//! "populate" actions and the automatic feeder's default source.

use chrono::Utc;
use rand::Rng;

use crate::data::samples::Sample;

/// A random power reading in `[0, 1000)` watts.
pub fn random_value() -> f64 {
    rand::thread_rng().gen_range(0.0..1000.0)
}

/// A single random sample stamped `now_ms`.
pub fn random_sample(now_ms: i64) -> Sample {
    Sample::new(now_ms, random_value())
}

/// A batch covering the whole look-back window at the feeder cadence: one
/// sample every 2 seconds counting back from `now`, newest first. Storage
/// order is irrelevant — the pipeline re-sorts.
pub fn populate(range_secs: u32) -> Vec<Sample> {
    populate_at(range_secs, Utc::now().timestamp_millis())
}

/// `populate` with an explicit "now" in epoch milliseconds.
pub fn populate_at(range_secs: u32, now_ms: i64) -> Vec<Sample> {
    (0..range_secs / 2)
        .map(|i| random_sample(now_ms - i64::from(i) * 2000))
        .collect()
}
