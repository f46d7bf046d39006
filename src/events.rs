//! Event system for the scope core.
//!
//! Collaborators subscribe to store and interaction events via
//! [`EventController`]. Each event carries a set of [`EventKind`] flags
//! (bitflags-style) so a single occurrence can match multiple categories —
//! e.g. replacing the log with an empty batch is both `DATA_REPLACED` and
//! `DATA_CLEARED`.
//!
//! Subscribers pass an [`EventFilter`]; the filter is a simple OR mask and an
//! event is delivered when `event.kinds` intersects it.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::settings::{Curve, Page};
use crate::data::zoom::ZoomDomain;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    // ── Sample log ───────────────────────────────────────────────────────
    /// A batch was appended to the log.
    pub const DATA_APPENDED: Self = Self(1 << 0);
    /// The log was wholesale replaced.
    pub const DATA_REPLACED: Self = Self(1 << 1);
    /// The log was replaced with an empty batch (always paired with
    /// `DATA_REPLACED`).
    pub const DATA_CLEARED: Self = Self(1 << 2);

    // ── Settings ─────────────────────────────────────────────────────────
    /// The look-back window changed.
    pub const TIME_RANGE_CHANGED: Self = Self(1 << 3);
    /// The curve hint changed.
    pub const CURVE_CHANGED: Self = Self(1 << 4);
    /// The navigation page changed.
    pub const PAGE_CHANGED: Self = Self(1 << 5);

    // ── Zoom ─────────────────────────────────────────────────────────────
    /// A drag resolved to a domain override.
    pub const ZOOM_APPLIED: Self = Self(1 << 6);
    /// A drag resolved to an empty/invalid selection and was discarded.
    pub const ZOOM_DISCARDED: Self = Self(1 << 7);
    /// An explicit zoom-out cleared the override.
    pub const ZOOM_CLEARED: Self = Self(1 << 8);

    // ── Feeder ───────────────────────────────────────────────────────────
    /// The automatic sample feeder started.
    pub const FEEDER_STARTED: Self = Self(1 << 9);
    /// The automatic sample feeder stopped.
    pub const FEEDER_STOPPED: Self = Self(1 << 10);

    // ── Persistence ──────────────────────────────────────────────────────
    /// A snapshot was written.
    pub const SNAPSHOT_SAVED: Self = Self(1 << 11);
    /// A snapshot was restored into the stores.
    pub const SNAPSHOT_LOADED: Self = Self(1 << 12);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` has at least one bit in common with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::DATA_APPENDED, "DATA_APPENDED"),
            (EventKind::DATA_REPLACED, "DATA_REPLACED"),
            (EventKind::DATA_CLEARED, "DATA_CLEARED"),
            (EventKind::TIME_RANGE_CHANGED, "TIME_RANGE_CHANGED"),
            (EventKind::CURVE_CHANGED, "CURVE_CHANGED"),
            (EventKind::PAGE_CHANGED, "PAGE_CHANGED"),
            (EventKind::ZOOM_APPLIED, "ZOOM_APPLIED"),
            (EventKind::ZOOM_DISCARDED, "ZOOM_DISCARDED"),
            (EventKind::ZOOM_CLEARED, "ZOOM_CLEARED"),
            (EventKind::FEEDER_STARTED, "FEEDER_STARTED"),
            (EventKind::FEEDER_STOPPED, "FEEDER_STOPPED"),
            (EventKind::SNAPSHOT_SAVED, "SNAPSHOT_SAVED"),
            (EventKind::SNAPSHOT_LOADED, "SNAPSHOT_LOADED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u32 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata – per-event-type payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata attached to sample-log events.
#[derive(Debug, Clone, Copy)]
pub struct DataUpdateMeta {
    /// Samples in the batch that triggered the event.
    pub batch_len: usize,
    /// Log length after the transition.
    pub total: usize,
}

/// Metadata attached to settings events; only the changed field is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsMeta {
    pub time_range_secs: Option<u32>,
    pub curve: Option<Curve>,
    pub page: Option<Page>,
}

/// Metadata attached to zoom events. `domain` is the applied override for
/// `ZOOM_APPLIED` and `None` for discard/clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomMeta {
    pub domain: Option<ZoomDomain>,
}

/// Metadata attached to persistence events.
#[derive(Debug, Clone, Default)]
pub struct SnapshotMeta {
    /// Path of the snapshot file, when saved to or loaded from disk.
    pub path: Option<String>,
    /// Samples in the snapshot.
    pub sample_count: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// ScopeEvent
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the scope core. `kinds` is a bitflag set; the optional
/// metadata fields carry whatever is relevant to the kinds that are set.
#[derive(Debug, Clone)]
pub struct ScopeEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created (set on emit).
    pub timestamp: f64,

    pub data_update: Option<DataUpdateMeta>,
    pub settings: Option<SettingsMeta>,
    pub zoom: Option<ZoomMeta>,
    pub snapshot: Option<SnapshotMeta>,
}

impl ScopeEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            data_update: None,
            settings: None,
            zoom: None,
            snapshot: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// Selects which event categories a subscriber receives; an OR mask.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &ScopeEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ScopeEvent>,
}

/// Collects and distributes scope events to subscribers.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ScopeEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to all events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<ScopeEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers. Subscribers whose receiver
    /// was dropped are pruned when a matching send fails.
    pub fn emit(&self, mut event: ScopeEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
