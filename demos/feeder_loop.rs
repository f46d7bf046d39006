//! Demo: automatic feeder driving the scope over a command channel
//!
//! What it demonstrates
//! - Wiring `channel_scope()` between a `SampleFeeder` and a `PowerScope`.
//! - The synchronous `update()` step draining commands once per frame.
//! - Observing store events while the feeder runs.
//!
//! How to run
//! ```bash
//! cargo run --example feeder_loop
//! ```

use std::time::Duration;

use powerscope::{channel_scope, EventFilter, EventKind, PowerScope, SampleFeeder};

fn main() {
    let (sink, rx) = channel_scope();
    let mut scope = PowerScope::new();
    scope.set_rx(rx);
    scope.set_time_range(10.0);

    let events = scope.events().subscribe(EventFilter::only(EventKind::DATA_APPENDED));

    // Faster than the production 2s cadence so the demo finishes quickly
    let mut feeder = SampleFeeder::with_interval(sink, Duration::from_millis(200));
    feeder.start();

    for _ in 0..10 {
        std::thread::sleep(Duration::from_millis(300));
        scope.update();
        while let Ok(evt) = events.try_recv() {
            if let Some(meta) = evt.data_update {
                println!("appended {} sample(s), log now {}", meta.batch_len, meta.total);
            }
        }
        let n = scope.in_range_samples().len();
        let domain = scope.time_domain();
        println!("frame: {} in range, domain width {} ms", n, domain[1] - domain[0]);
    }

    feeder.stop();
    println!("feeder stopped");
}
