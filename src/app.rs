//! The scope facade: single source of truth plus derived read-only views.
//!
//! `PowerScope` owns the sample log, the settings store, the windowing
//! pipeline and the zoom overlay. All mutation happens synchronously on the
//! caller's thread — either through the direct input methods or by draining
//! a command channel in [`update`](PowerScope::update) — so an output read
//! always observes the most recent completed write.

use std::path::Path;
use std::sync::mpsc::Receiver;

use chrono::Utc;

use crate::config::ScopeConfig;
use crate::data::samples::{Sample, SampleLog};
use crate::data::scale::LinearScale;
use crate::data::settings::{Curve, Page, Settings};
use crate::data::window::WindowPipeline;
use crate::data::zoom::{BrushOverlay, ZoomDomain, ZoomState};
use crate::events::{
    DataUpdateMeta, EventController, EventKind, ScopeEvent, SettingsMeta, SnapshotMeta, ZoomMeta,
};
use crate::persistence::{self, SamplesSnapshot, SettingsSnapshot, SnapshotError, SnapshotLimiter};
use crate::sink::ScopeCommand;

pub struct PowerScope {
    config: ScopeConfig,
    log: SampleLog,
    settings: Settings,
    pipeline: WindowPipeline,
    zoom: BrushOverlay,
    events: EventController,
    limiter: SnapshotLimiter,
    rx: Option<Receiver<ScopeCommand>>,
}

impl Default for PowerScope {
    fn default() -> Self {
        Self::with_config(ScopeConfig::default())
    }
}

impl PowerScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScopeConfig) -> Self {
        let mut settings = Settings::new();
        settings.set_time_range(f64::from(config.time_range_secs));
        let limiter = SnapshotLimiter::new(config.snapshot_min_interval);
        Self {
            config,
            log: SampleLog::new(),
            settings,
            pipeline: WindowPipeline::new(),
            zoom: BrushOverlay::new(),
            events: EventController::new(),
            limiter,
            rx: None,
        }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Event controller for subscribing to store and interaction events.
    pub fn events(&self) -> &EventController {
        &self.events
    }

    /// Attach the receiving end of a command channel (see
    /// [`channel_scope`](crate::sink::channel_scope)).
    pub fn set_rx(&mut self, rx: Receiver<ScopeCommand>) {
        self.rx = Some(rx);
    }

    /// Drain and apply all pending commands. The synchronous event-loop
    /// step; call once per frame or after posting commands.
    pub fn update(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = &self.rx {
            while let Ok(cmd) = rx.try_recv() {
                pending.push(cmd);
            }
        }
        for cmd in pending {
            self.apply(cmd);
        }
    }

    fn apply(&mut self, cmd: ScopeCommand) {
        match cmd {
            ScopeCommand::AddSamples(batch) => self.add_samples(batch),
            ScopeCommand::ReplaceSamples(batch) => self.replace_samples(batch),
            ScopeCommand::SetTimeRange(secs) => self.set_time_range(secs),
            ScopeCommand::SetCurve(name) => self.set_curve(&name),
            ScopeCommand::SetPage(page) => self.set_page(page),
            ScopeCommand::DragStart { x } => self.drag_start(x),
            ScopeCommand::DragMove { x } => self.drag_move(x),
            ScopeCommand::DragEnd => self.drag_end(),
            ScopeCommand::ZoomOut => self.zoom_out(),
        }
    }

    // ── Input operations ─────────────────────────────────────────────────

    /// Append a batch to the log. An empty batch is a no-op.
    pub fn add_samples(&mut self, batch: Vec<Sample>) {
        if batch.is_empty() {
            return;
        }
        let batch_len = batch.len();
        self.log.append(&batch);
        let mut evt = ScopeEvent::new(EventKind::DATA_APPENDED);
        evt.data_update = Some(DataUpdateMeta {
            batch_len,
            total: self.log.len(),
        });
        self.events.emit(evt);
    }

    /// Replace the whole log; an empty batch clears it.
    pub fn replace_samples(&mut self, batch: Vec<Sample>) {
        let batch_len = batch.len();
        let mut kinds = EventKind::DATA_REPLACED;
        if batch.is_empty() {
            kinds |= EventKind::DATA_CLEARED;
        }
        self.log.replace_all(batch);
        let mut evt = ScopeEvent::new(kinds);
        evt.data_update = Some(DataUpdateMeta {
            batch_len,
            total: self.log.len(),
        });
        self.events.emit(evt);
    }

    /// Replace the log with nothing.
    pub fn clear(&mut self) {
        self.replace_samples(Vec::new());
    }

    pub fn set_time_range(&mut self, secs: f64) {
        self.settings.set_time_range(secs);
        let mut evt = ScopeEvent::new(EventKind::TIME_RANGE_CHANGED);
        evt.settings = Some(SettingsMeta {
            time_range_secs: Some(self.settings.time_range_secs()),
            ..Default::default()
        });
        self.events.emit(evt);
    }

    pub fn set_curve(&mut self, name: &str) {
        self.settings.set_curve(name);
        let mut evt = ScopeEvent::new(EventKind::CURVE_CHANGED);
        evt.settings = Some(SettingsMeta {
            curve: Some(self.settings.curve()),
            ..Default::default()
        });
        self.events.emit(evt);
    }

    pub fn set_page(&mut self, page: Page) {
        self.settings.set_page(page);
        let mut evt = ScopeEvent::new(EventKind::PAGE_CHANGED);
        evt.settings = Some(SettingsMeta {
            page: Some(page),
            ..Default::default()
        });
        self.events.emit(evt);
    }

    // ── Zoom drag protocol ───────────────────────────────────────────────

    /// Pointer pressed on the plot at screen x.
    pub fn drag_start(&mut self, x: f64) {
        self.zoom.drag_start(x);
    }

    /// Pointer moved while pressed.
    pub fn drag_move(&mut self, x: f64) {
        self.zoom.drag_move(x);
    }

    /// Pointer released; resolve the selection against the current window.
    pub fn drag_end(&mut self) {
        self.drag_end_at(Utc::now().timestamp_millis());
    }

    /// `drag_end` with an explicit "now" in epoch milliseconds.
    pub fn drag_end_at(&mut self, now_ms: i64) {
        if !matches!(self.zoom.state(), ZoomState::Dragging { .. }) {
            return;
        }
        let range = self.settings.time_range_secs();
        let view = self.pipeline.view_at(&self.log, range, now_ms);
        let scale = LinearScale::new(
            (view.domain[0] as f64, view.domain[1] as f64),
            (0.0, self.config.chart_width),
        );
        let applied = self.zoom.drag_end(&scale, &view.in_range);
        let evt = match applied {
            Some(domain) => {
                let mut e = ScopeEvent::new(EventKind::ZOOM_APPLIED);
                e.zoom = Some(ZoomMeta {
                    domain: Some(domain),
                });
                e
            }
            None => ScopeEvent::new(EventKind::ZOOM_DISCARDED),
        };
        self.events.emit(evt);
    }

    /// Discard any active zoom override.
    pub fn zoom_out(&mut self) {
        let had_override = self.zoom.active_domain().is_some();
        self.zoom.zoom_out();
        if had_override {
            self.events.emit(ScopeEvent::new(EventKind::ZOOM_CLEARED));
        }
    }

    // ── Output reads ─────────────────────────────────────────────────────

    /// The in-window samples, sorted ascending by timestamp.
    pub fn in_range_samples(&mut self) -> &[Sample] {
        let range = self.settings.time_range_secs();
        &self.pipeline.view(&self.log, range).in_range
    }

    /// `in_range_samples` with an explicit "now" in epoch milliseconds.
    pub fn in_range_samples_at(&mut self, now_ms: i64) -> &[Sample] {
        let range = self.settings.time_range_secs();
        &self.pipeline.view_at(&self.log, range, now_ms).in_range
    }

    /// The time-axis domain in epoch milliseconds; `[0, 0]` when nothing is
    /// in range.
    pub fn time_domain(&mut self) -> [i64; 2] {
        let range = self.settings.time_range_secs();
        self.pipeline.view(&self.log, range).domain
    }

    /// `time_domain` with an explicit "now" in epoch milliseconds.
    pub fn time_domain_at(&mut self, now_ms: i64) -> [i64; 2] {
        let range = self.settings.time_range_secs();
        self.pipeline.view_at(&self.log, range, now_ms).domain
    }

    /// At most the configured `max_reads` most recent in-window samples, for
    /// renderers that bound their node counts.
    pub fn recent_samples(&mut self) -> &[Sample] {
        let range = self.settings.time_range_secs();
        let cap = self.config.max_reads;
        self.pipeline.view(&self.log, range).recent(cap)
    }

    /// The applied zoom override, if any.
    pub fn active_zoom_domain(&self) -> Option<ZoomDomain> {
        self.zoom.active_domain()
    }

    /// The zoom interaction state, for renderers that draw the drag area.
    pub fn zoom_state(&self) -> &ZoomState {
        self.zoom.state()
    }

    pub fn time_range_secs(&self) -> u32 {
        self.settings.time_range_secs()
    }

    pub fn curve(&self) -> Curve {
        self.settings.curve()
    }

    pub fn page(&self) -> Page {
        self.settings.page()
    }

    /// The raw log in storage order, for persistence collaborators.
    pub fn log(&self) -> &SampleLog {
        &self.log
    }

    // ── Snapshots ────────────────────────────────────────────────────────

    /// Write the sample log to `path` unconditionally.
    pub fn save_samples_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let snap = SamplesSnapshot::new(self.log.samples().to_vec());
        persistence::save_to_path(&snap, path)?;
        let mut evt = ScopeEvent::new(EventKind::SNAPSHOT_SAVED);
        evt.snapshot = Some(SnapshotMeta {
            path: Some(path.display().to_string()),
            sample_count: snap.data.len(),
        });
        self.events.emit(evt);
        Ok(())
    }

    /// Write the sample log to `path` if it is non-empty and the rate
    /// limiter allows it. Returns whether a snapshot was written.
    pub fn maybe_save_samples_snapshot(&mut self, path: &Path) -> Result<bool, SnapshotError> {
        if self.log.is_empty() || !self.limiter.should_save() {
            return Ok(false);
        }
        self.save_samples_snapshot(path)?;
        Ok(true)
    }

    /// Restore the sample log from a snapshot at `path`, replacing the
    /// current log. Returns the number of restored samples. On error the
    /// log is untouched; callers treat the error as "no prior data".
    pub fn load_samples_snapshot(&mut self, path: &Path) -> Result<usize, SnapshotError> {
        let snap: SamplesSnapshot = persistence::load_from_path(path)?;
        let count = snap.data.len();
        self.log.replace_all(snap.data);
        let mut evt = ScopeEvent::new(EventKind::SNAPSHOT_LOADED | EventKind::DATA_REPLACED);
        evt.snapshot = Some(SnapshotMeta {
            path: Some(path.display().to_string()),
            sample_count: count,
        });
        self.events.emit(evt);
        Ok(count)
    }

    /// Write the settings store to `path`.
    pub fn save_settings_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let snap = SettingsSnapshot::from(&self.settings);
        persistence::save_to_path(&snap, path)
    }

    /// Restore the settings store from a snapshot at `path`. Stored values
    /// go through the coercing setters, so a bad snapshot degrades to the
    /// defaults instead of failing late.
    pub fn load_settings_snapshot(&mut self, path: &Path) -> Result<(), SnapshotError> {
        let snap: SettingsSnapshot = persistence::load_from_path(path)?;
        snap.apply_to(&mut self.settings);
        let mut evt = ScopeEvent::new(EventKind::SNAPSHOT_LOADED);
        evt.snapshot = Some(SnapshotMeta {
            path: Some(path.display().to_string()),
            sample_count: 0,
        });
        self.events.emit(evt);
        Ok(())
    }
}
