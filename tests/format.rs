use powerscope::data::format::{range_label, time_label, watts_to_kilo};

#[test]
fn watts_render_as_kilowatts_with_two_decimals() {
    assert_eq!(watts_to_kilo(200.0), "0.20 kW");
    assert_eq!(watts_to_kilo(1_234.5), "1.23 kW");
    assert_eq!(watts_to_kilo(0.0), "0.00 kW");
    assert_eq!(watts_to_kilo(-500.0), "-0.50 kW");
}

#[test]
fn non_finite_watts_render_as_dash() {
    assert_eq!(watts_to_kilo(f64::NAN), "-");
    assert_eq!(watts_to_kilo(f64::INFINITY), "-");
}

#[test]
fn range_labels_prefer_whole_minutes() {
    assert_eq!(range_label(120), "Last 2 Minutes");
    assert_eq!(range_label(1_800), "Last 30 Minutes");
    assert_eq!(range_label(30), "Last 30 Seconds");
    assert_eq!(range_label(10), "Last 10 Seconds");
}

#[test]
fn time_label_is_hms() {
    let out = time_label(1_700_000_000_000);
    let colon_count = out.chars().filter(|&c| c == ':').count();
    assert_eq!(colon_count, 2, "Expected HH:MM:SS format, got: {}", out);
    assert!(!out.contains('-'), "Unexpected date in: {}", out);
}
