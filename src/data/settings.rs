//! Settings store: active time-range window, curve interpolation hint and
//! the navigation page.
//!
//! Setters recover from bad input by substituting a documented default
//! instead of rejecting — a bad payload can never leave the store in an
//! invalid state.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TIME_RANGE_SECS;

/// Curve interpolation selection. A rendering hint only; it carries no
/// derived-domain semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Basis,
    #[default]
    Monotone,
    Natural,
}

impl Curve {
    /// Parse a curve name, falling back to `Monotone` for anything outside
    /// the enumerated set.
    pub fn from_name(name: &str) -> Self {
        match name {
            "basis" => Curve::Basis,
            "monotone" => Curve::Monotone,
            "natural" => Curve::Natural,
            other => {
                log::warn!("unknown curve {:?}, falling back to monotone", other);
                Curve::Monotone
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Curve::Basis => "basis",
            Curve::Monotone => "monotone",
            Curve::Natural => "natural",
        }
    }

    /// All selectable curves, in display order.
    pub fn all() -> [Curve; 3] {
        [Curve::Basis, Curve::Monotone, Curve::Natural]
    }
}

/// Navigation page. Pure UI state; persisted but semantically inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Comparison,
    RechartDemo,
    RevisedCharts,
}

/// Holder for the UI-facing settings. No derived logic lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    time_range_secs: u32,
    curve: Curve,
    page: Page,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_range_secs: DEFAULT_TIME_RANGE_SECS,
            curve: Curve::default(),
            page: Page::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look-back window width in seconds.
    pub fn time_range_secs(&self) -> u32 {
        self.time_range_secs
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Replace the active range. Anything that is not a positive integer
    /// (NaN, zero, negative, fractional) coerces to the default range.
    pub fn set_time_range(&mut self, secs: f64) {
        self.time_range_secs = if secs.is_finite() && secs > 0.0 && secs.fract() == 0.0 {
            secs as u32
        } else {
            log::warn!(
                "invalid time range {:?}, falling back to {}s",
                secs,
                DEFAULT_TIME_RANGE_SECS
            );
            DEFAULT_TIME_RANGE_SECS
        };
    }

    /// Replace the curve selection by name; unknown names coerce to monotone.
    pub fn set_curve(&mut self, name: &str) {
        self.curve = Curve::from_name(name);
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }
}
