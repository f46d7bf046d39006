//! powerscope crate root: re-exports and module wiring.
//!
//! A headless core for live power-consumption charts. It turns an unbounded,
//! unordered stream of `(timestamp, value)` samples into a sorted,
//! time-bounded working set with consistent axis domains, and drives the
//! zoom/brush interaction used by chart renderers. Rendering itself stays
//! outside this crate: renderers consume `in_range_samples()`,
//! `time_domain()` and `active_zoom_domain()` from a [`PowerScope`].
//!
//! Modules:
//! - `data`: the sample log, settings store, windowing pipeline, zoom overlay
//!   and small axis/formatting helpers
//! - `sink`: command types and channels to drive the scope
//! - `events`: observer boundary for store and interaction events
//! - `feeder`: the periodic automatic sample producer
//! - `generator`: random demo batches
//! - `persistence`: JSON snapshots and rate limiting
//! - `config`: shared configuration and the time-range options table

mod app;

pub mod config;
pub mod data;
pub mod events;
pub mod feeder;
pub mod generator;
pub mod persistence;
pub mod sink;

// Public re-exports for a compact external API
pub use app::PowerScope;
pub use config::{ScopeConfig, TimeRangeOption, DEFAULT_TIME_RANGE_SECS, TIME_RANGE_OPTIONS};
pub use data::samples::{Sample, SampleLog};
pub use data::scale::LinearScale;
pub use data::settings::{Curve, Page, Settings};
pub use data::window::{WindowPipeline, WindowView};
pub use data::zoom::{BrushOverlay, ZoomDomain, ZoomState, ZOOM_VALUE_PAD};
pub use events::{EventController, EventFilter, EventKind, ScopeEvent};
pub use feeder::SampleFeeder;
pub use persistence::{SamplesSnapshot, SettingsSnapshot, SnapshotError, SnapshotLimiter};
pub use sink::{channel_scope, ScopeCommand, ScopeSink};
