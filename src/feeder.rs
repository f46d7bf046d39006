//! Automatic sample feeder: the only autonomous producer in the system.
//!
//! A background thread appends exactly one sample per tick through a
//! [`ScopeSink`] until stopped. At most one thread is ever live: `start()`
//! while running is a refused no-op, and each start installs a fresh stop
//! flag so a thread from a previous run can never tick again after a
//! start/stop/start sequence. `stop()` is idempotent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Utc;

use crate::data::samples::Sample;
use crate::events::{EventController, EventKind, ScopeEvent};
use crate::generator;
use crate::sink::ScopeSink;

struct FeederHandle {
    run: Arc<AtomicBool>,
    _thread: JoinHandle<()>,
}

/// Periodic producer appending one sample per tick.
pub struct SampleFeeder {
    sink: ScopeSink,
    interval: Duration,
    events: Option<EventController>,
    active: Option<FeederHandle>,
}

impl SampleFeeder {
    /// Feeder with the default 2-second cadence.
    pub fn new(sink: ScopeSink) -> Self {
        Self::with_interval(sink, Duration::from_millis(2000))
    }

    pub fn with_interval(sink: ScopeSink, interval: Duration) -> Self {
        Self {
            sink,
            interval,
            events: None,
            active: None,
        }
    }

    /// Attach an event controller; start/stop transitions are announced on it.
    pub fn set_events(&mut self, events: EventController) {
        self.events = Some(events);
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Start ticking with the default random value source. Returns `false`
    /// (and starts nothing) when already running.
    pub fn start(&mut self) -> bool {
        self.start_with_source(generator::random_value)
    }

    /// Start ticking with a caller-provided value source. Returns `false`
    /// when already running — a second timer is never spawned.
    pub fn start_with_source<F>(&mut self, mut source: F) -> bool
    where
        F: FnMut() -> f64 + Send + 'static,
    {
        if self.active.is_some() {
            log::warn!("feeder already running, ignoring start");
            return false;
        }

        let run = Arc::new(AtomicBool::new(true));
        let run_flag = Arc::clone(&run);
        let sink = self.sink.clone();
        let interval = self.interval;
        let thread = std::thread::spawn(move || {
            loop {
                std::thread::sleep(interval);
                if !run_flag.load(Ordering::Relaxed) {
                    break;
                }
                let sample = Sample::new(Utc::now().timestamp_millis(), source());
                // Receiver gone means the scope shut down; just exit.
                if sink.add_sample(sample).is_err() {
                    break;
                }
            }
        });

        self.active = Some(FeederHandle {
            run,
            _thread: thread,
        });
        log::info!("feeder started ({}ms interval)", self.interval.as_millis());
        if let Some(events) = &self.events {
            events.emit(ScopeEvent::new(EventKind::FEEDER_STARTED));
        }
        true
    }

    /// Stop ticking. Idempotent: stopping an already-stopped feeder is a
    /// no-op. The thread exits at its next wake-up without sending.
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.run.store(false, Ordering::Relaxed);
            log::info!("feeder stopped");
            if let Some(events) = &self.events {
                events.emit(ScopeEvent::new(EventKind::FEEDER_STOPPED));
            }
        }
    }
}

impl Drop for SampleFeeder {
    fn drop(&mut self) {
        self.stop();
    }
}
