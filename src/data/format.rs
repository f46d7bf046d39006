//! Display label formatting for axis ticks, tooltips and range selectors.

use chrono::{Local, TimeZone};

/// Format an epoch-millisecond timestamp as a local `HH:MM:SS` label.
pub fn time_label(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Format a watt reading as a kilowatt string with two decimals, e.g.
/// `"1.23 kW"`. Non-finite values render as `"-"`.
pub fn watts_to_kilo(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.2} kW", value / 1000.0)
}

/// Human label for a look-back range: whole minutes when the range divides
/// evenly, seconds otherwise — `"Last 2 Minutes"`, `"Last 30 Seconds"`.
pub fn range_label(secs: u32) -> String {
    if secs % 60 == 0 {
        format!("Last {} Minutes", secs / 60)
    } else {
        format!("Last {} Seconds", secs)
    }
}
