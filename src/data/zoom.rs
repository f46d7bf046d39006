//! Zoom/brush overlay: drag-select a time sub-range and derive a temporary
//! domain override for both axes.
//!
//! The interaction is a three-state machine — Idle, Dragging, Zoomed — kept
//! as a tagged enum so that impossible combinations ("dragging while an
//! override from a stale drag is active") cannot be represented. No
//! operation here can fail: malformed gestures resolve to "no zoom".

use super::samples::Sample;
use super::scale::LinearScale;

/// A committed domain override: `[left, right]` on the time axis and
/// `[bottom, top]` on the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomDomain {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Interaction state of the brush.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ZoomState {
    /// No override, no drag in progress.
    #[default]
    Idle,
    /// Pointer is down. `end_x` tracks the latest move; `prior` holds the
    /// override that was active when the drag started, restored if the drag
    /// turns out invalid.
    Dragging {
        start_x: f64,
        end_x: Option<f64>,
        prior: Option<ZoomDomain>,
    },
    /// An override is applied.
    Zoomed(ZoomDomain),
}

/// Value-axis padding applied on both sides of the selected extent.
pub const ZOOM_VALUE_PAD: f64 = 20.0;

/// The brush overlay owned by a single chart instance; not shared.
#[derive(Debug, Default)]
pub struct BrushOverlay {
    state: ZoomState,
}

impl BrushOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// The applied override, if any.
    pub fn active_domain(&self) -> Option<ZoomDomain> {
        match self.state {
            ZoomState::Zoomed(d) => Some(d),
            _ => None,
        }
    }

    /// The in-progress selection `[start_x, end_x]` in screen coordinates,
    /// for renderers that draw the reference area while dragging.
    pub fn drag_extent(&self) -> Option<(f64, f64)> {
        match self.state {
            ZoomState::Dragging {
                start_x,
                end_x: Some(end_x),
                ..
            } => Some((start_x, end_x)),
            _ => None,
        }
    }

    /// Pointer pressed at screen position `x`. Starting a new drag from
    /// Zoomed is allowed; the existing override is remembered and kept if
    /// this drag ends up discarded.
    pub fn drag_start(&mut self, x: f64) {
        let prior = match self.state {
            ZoomState::Zoomed(d) => Some(d),
            _ => None,
        };
        self.state = ZoomState::Dragging {
            start_x: x,
            end_x: None,
            prior,
        };
    }

    /// Pointer moved while pressed. Ignored unless a drag is in progress.
    pub fn drag_move(&mut self, x: f64) {
        if let ZoomState::Dragging { end_x, .. } = &mut self.state {
            *end_x = Some(x);
        }
    }

    /// Pointer released. Resolves the selection against the active time
    /// scale and the current in-range samples.
    ///
    /// Right-to-left drags are swapped into order. A selection with no
    /// movement, or that still resolves to `start >= end`, is discarded and
    /// the state reverts — to the prior override when the drag began from
    /// Zoomed, otherwise to Idle. Returns the newly applied override, or
    /// `None` when the drag was discarded or no drag was in progress.
    pub fn drag_end(&mut self, scale: &LinearScale, in_range: &[Sample]) -> Option<ZoomDomain> {
        let (start_x, end_x, prior) = match std::mem::take(&mut self.state) {
            ZoomState::Dragging {
                start_x,
                end_x,
                prior,
            } => (start_x, end_x, prior),
            // stray release: put the state back untouched
            other => {
                self.state = other;
                return None;
            }
        };

        let revert = |overlay: &mut Self| {
            overlay.state = match prior {
                Some(d) => ZoomState::Zoomed(d),
                None => ZoomState::Idle,
            };
        };

        let Some(end_x) = end_x else {
            revert(self);
            return None;
        };

        let mut start = scale.invert(start_x);
        let mut end = scale.invert(end_x);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        if start >= end {
            log::debug!("zoom: empty selection discarded");
            revert(self);
            return None;
        }

        let (bottom, top) = value_extent(in_range, start, end);
        let domain = ZoomDomain {
            left: start,
            right: end,
            top: top + ZOOM_VALUE_PAD,
            bottom: bottom - ZOOM_VALUE_PAD,
        };
        self.state = ZoomState::Zoomed(domain);
        Some(domain)
    }

    /// Explicit zoom-out: discard any override and return to Idle.
    pub fn zoom_out(&mut self) {
        self.state = ZoomState::Idle;
    }
}

/// `[min, max]` over the values of samples with timestamp in `[from, to]`;
/// both fall back to 0 when the subset is empty.
fn value_extent(samples: &[Sample], from: f64, to: f64) -> (f64, f64) {
    let mut min_v = f64::MAX;
    let mut max_v = f64::MIN;
    for s in samples {
        let t = s.timestamp as f64;
        if t < from || t > to {
            continue;
        }
        if s.value < min_v {
            min_v = s.value;
        }
        if s.value > max_v {
            max_v = s.value;
        }
    }
    if min_v <= max_v {
        (min_v, max_v)
    } else {
        (0.0, 0.0)
    }
}
