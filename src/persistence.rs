//! Snapshot persistence: save and load the sample log and UI settings as
//! JSON files.
//!
//! The on-disk shapes mirror what an external storage collaborator expects:
//! the log is `{ "data": [ { "timestamp": …, "value": … }, … ] }` and the
//! settings are a flat object. A malformed or missing snapshot is a typed
//! error the caller maps to "no prior data" — the core accepts starting from
//! an empty log without special-casing.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data::samples::Sample;
use crate::data::settings::{Curve, Page, Settings};

/// Failure while reading or writing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------- Serializable mirror types ----------

/// Snapshot of the sample log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplesSnapshot {
    pub data: Vec<Sample>,
}

impl SamplesSnapshot {
    pub fn new(data: Vec<Sample>) -> Self {
        Self { data }
    }
}

/// Snapshot of the settings store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub time_range: u32,
    pub curve: Curve,
    pub page: Page,
}

impl From<&Settings> for SettingsSnapshot {
    fn from(s: &Settings) -> Self {
        Self {
            time_range: s.time_range_secs(),
            curve: s.curve(),
            page: s.page(),
        }
    }
}

impl SettingsSnapshot {
    /// Apply stored settings to a live settings store. Goes through the
    /// coercing setters so a hand-edited snapshot cannot smuggle in an
    /// invalid range.
    pub fn apply_to(self, settings: &mut Settings) {
        settings.set_time_range(f64::from(self.time_range));
        settings.set_curve(self.curve.name());
        settings.set_page(self.page);
    }
}

// ---------- Public API ----------

/// Serialize a snapshot as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserialize a snapshot from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Save a snapshot to a JSON file at the given path.
pub fn save_to_path<T: Serialize>(value: &T, path: &Path) -> Result<(), SnapshotError> {
    let txt = to_json(value)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load a snapshot from a JSON file at the given path.
pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let txt = std::fs::read_to_string(path)?;
    from_json(&txt)
}

// ---------- Rate limiting ----------

/// Limits snapshot writes to at most one per interval of wall-clock time.
///
/// The persisted snapshot may lag the in-memory log by up to the interval;
/// that staleness window is accepted. The first call after creation always
/// passes.
#[derive(Debug)]
pub struct SnapshotLimiter {
    min_interval: Duration,
    last_save: Option<Instant>,
}

impl SnapshotLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_save: None,
        }
    }

    /// Returns `true` when enough time has passed since the last granted
    /// save, recording the grant.
    pub fn should_save(&mut self) -> bool {
        let due = match self.last_save {
            Some(last) => last.elapsed() >= self.min_interval,
            None => true,
        };
        if due {
            self.last_save = Some(Instant::now());
        }
        due
    }
}
