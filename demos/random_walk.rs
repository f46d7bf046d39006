//! Demo: populate a look-back window and inspect the derived view
//!
//! What it demonstrates
//! - Filling the log with `generator::populate` (one sample per 2s across the window).
//! - Reading the sorted in-range set, the time-axis domain and the capped series.
//! - Committing a brush selection over the middle of the plot.
//!
//! How to run
//! ```bash
//! cargo run --example random_walk
//! ```

use powerscope::data::format::{range_label, time_label, watts_to_kilo};
use powerscope::{generator, PowerScope};

fn main() {
    let mut scope = PowerScope::new();
    scope.set_time_range(120.0);
    scope.replace_samples(generator::populate(120));

    println!("{}", range_label(scope.time_range_secs()));
    let domain = scope.time_domain();
    println!(
        "time domain: {} .. {} ({} ms wide)",
        time_label(domain[0]),
        time_label(domain[1]),
        domain[1] - domain[0]
    );

    let recent: Vec<_> = scope.recent_samples().iter().rev().take(5).copied().collect();
    println!("latest {} readings:", recent.len());
    for sample in recent {
        println!("  {}  {}", time_label(sample.timestamp), watts_to_kilo(sample.value));
    }

    // Brush-select the middle fifth of the plot and show the override
    let width = scope.config().chart_width;
    scope.drag_start(width * 0.4);
    scope.drag_move(width * 0.6);
    scope.drag_end();
    match scope.active_zoom_domain() {
        Some(zoom) => println!(
            "zoomed: time [{} .. {}], value [{} .. {}]",
            time_label(zoom.left as i64),
            time_label(zoom.right as i64),
            watts_to_kilo(zoom.bottom),
            watts_to_kilo(zoom.top)
        ),
        None => println!("selection discarded"),
    }

    scope.zoom_out();
    println!("zoom cleared");
}
