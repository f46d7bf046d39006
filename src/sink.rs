//! Command types and channel for driving the scope from UI collaborators.
//!
//! Every externally observable input event — sample batches, settings
//! changes, the zoom drag protocol — is a [`ScopeCommand`] sent over an
//! `mpsc` channel. The owning [`PowerScope`](crate::PowerScope) drains the
//! channel synchronously in its `update()` step, so a read after `update()`
//! always observes the most recent completed write.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::samples::Sample;
use crate::data::settings::Page;

/// Messages sent over the channel to drive the scope core.
#[derive(Debug, Clone)]
pub enum ScopeCommand {
    /// Concatenate a batch of samples onto the log.
    AddSamples(Vec<Sample>),
    /// Replace the whole log ("clear" is an empty batch).
    ReplaceSamples(Vec<Sample>),
    /// Change the look-back window; invalid values coerce to the default.
    SetTimeRange(f64),
    /// Change the curve hint by name; unknown names coerce to monotone.
    SetCurve(String),
    /// Change the navigation page.
    SetPage(Page),
    /// Zoom drag: pointer pressed at screen x.
    DragStart { x: f64 },
    /// Zoom drag: pointer moved while pressed.
    DragMove { x: f64 },
    /// Zoom drag: pointer released; resolve the selection.
    DragEnd,
    /// Discard any active zoom override.
    ZoomOut,
}

/// Convenience sender for feeding commands into the scope.
#[derive(Debug, Clone)]
pub struct ScopeSink {
    tx: Sender<ScopeCommand>,
}

impl ScopeSink {
    /// Send a single sample.
    pub fn add_sample(&self, sample: Sample) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::AddSamples(vec![sample]))
    }

    /// Send a batch of samples (more efficient than one-by-one).
    pub fn add_samples<I>(&self, batch: I) -> Result<(), SendError<ScopeCommand>>
    where
        I: Into<Vec<Sample>>,
    {
        self.tx.send(ScopeCommand::AddSamples(batch.into()))
    }

    /// Replace the entire log with the provided batch.
    pub fn replace_samples<I>(&self, batch: I) -> Result<(), SendError<ScopeCommand>>
    where
        I: Into<Vec<Sample>>,
    {
        self.tx.send(ScopeCommand::ReplaceSamples(batch.into()))
    }

    /// Replace the log with nothing.
    pub fn clear(&self) -> Result<(), SendError<ScopeCommand>> {
        self.replace_samples(Vec::new())
    }

    pub fn set_time_range(&self, secs: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetTimeRange(secs))
    }

    pub fn set_curve<S: Into<String>>(&self, curve: S) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetCurve(curve.into()))
    }

    pub fn set_page(&self, page: Page) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetPage(page))
    }

    #[inline]
    pub fn drag_start(&self, x: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::DragStart { x })
    }

    #[inline]
    pub fn drag_move(&self, x: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::DragMove { x })
    }

    #[inline]
    pub fn drag_end(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::DragEnd)
    }

    #[inline]
    pub fn zoom_out(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::ZoomOut)
    }
}

/// Create a new channel pair: `(ScopeSink, Receiver<ScopeCommand>)`.
pub fn channel_scope() -> (ScopeSink, Receiver<ScopeCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ScopeSink { tx }, rx)
}
