use powerscope::{Sample, SampleLog, WindowPipeline};

// Helper: shorthand sample constructor
fn s(t: i64, v: f64) -> Sample {
    Sample::new(t, v)
}

#[test]
fn replace_all_empty_is_idempotent() {
    let mut log = SampleLog::new();
    log.replace_all(Vec::new());
    assert!(log.is_empty());
    log.replace_all(Vec::new());
    assert!(log.is_empty());
}

#[test]
fn append_accumulates_in_storage_order() {
    let mut log = SampleLog::new();
    log.append(&[s(2_000, 1.0)]);
    log.append(&[s(1_000, 2.0)]);
    assert_eq!(log.len(), 2);
    // storage order is insertion order, pre-sort
    assert_eq!(log.samples()[0].timestamp, 2_000);
    assert_eq!(log.samples()[1].timestamp, 1_000);

    // both appear in the derived window when both are in range
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 10, 3_000);
    assert_eq!(view.in_range.len(), 2);
}

#[test]
fn empty_append_is_a_noop() {
    let mut log = SampleLog::new();
    log.append(&[s(1, 1.0)]);
    let v = log.version();
    log.append(&[]);
    assert_eq!(log.version(), v);
    assert_eq!(log.len(), 1);
}

#[test]
fn in_range_is_sorted_ascending() {
    let mut log = SampleLog::new();
    log.append(&[s(5_000, 1.0), s(1_000, 2.0), s(3_000, 3.0), s(4_000, 4.0)]);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 10, 5_000);
    let ts: Vec<i64> = view.in_range.iter().map(|p| p.timestamp).collect();
    assert_eq!(ts, vec![1_000, 3_000, 4_000, 5_000]);
}

#[test]
fn range_filter_boundaries() {
    // now = T, range = R: a sample at T - R*1000 - 1 is out, T - R*1000 + 1 is in
    let now = 1_000_000;
    let range = 10u32;
    let cutoff = now - i64::from(range) * 1000;

    let mut log = SampleLog::new();
    log.append(&[s(cutoff - 1, 1.0), s(cutoff, 2.0), s(cutoff + 1, 3.0)]);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, range, now);
    let ts: Vec<i64> = view.in_range.iter().map(|p| p.timestamp).collect();
    assert_eq!(ts, vec![cutoff, cutoff + 1]);
}

#[test]
fn domain_width_equals_range() {
    let mut log = SampleLog::new();
    log.append(&[s(100_000, 1.0), s(101_500, 2.0)]);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 30, 102_000);
    assert_eq!(view.domain[1] - view.domain[0], 30 * 1000);
    // anchored on the latest in-range sample, not on "now"
    assert_eq!(view.domain[1], 101_500);
}

#[test]
fn empty_log_yields_zero_domain() {
    let log = SampleLog::new();
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 300, 1_000_000);
    assert_eq!(view.domain, [0, 0]);
    assert!(view.in_range.is_empty());
}

#[test]
fn all_samples_out_of_range_yields_zero_domain() {
    let mut log = SampleLog::new();
    log.append(&[s(1_000, 1.0)]);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 10, 1_000_000);
    assert_eq!(view.domain, [0, 0]);
}

#[test]
fn view_is_memoized_per_version_and_range() {
    let mut log = SampleLog::new();
    log.append(&[s(1_000, 1.0), s(2_000, 2.0)]);
    let mut pipeline = WindowPipeline::new();

    let first = pipeline.view_at(&log, 10, 2_000).in_range.as_ptr();
    let second = pipeline.view_at(&log, 10, 9_999).in_range.as_ptr();
    // same (version, range) key: cached buffer is reused, "now" not re-read
    assert_eq!(first, second);

    // a log mutation invalidates
    log.append(&[s(3_000, 3.0)]);
    let third = pipeline.view_at(&log, 10, 3_000);
    assert_eq!(third.in_range.len(), 3);

    // a range change invalidates too
    let narrow = pipeline.view_at(&log, 1, 3_000);
    assert_eq!(narrow.in_range.len(), 2);
}

#[test]
fn recent_caps_to_most_recent() {
    let mut log = SampleLog::new();
    let batch: Vec<Sample> = (0..10).map(|i| s(i64::from(i) * 100, f64::from(i))).collect();
    log.append(&batch);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 10, 900);
    let capped = view.recent(3);
    assert_eq!(capped.len(), 3);
    assert_eq!(capped[0].timestamp, 700);
    assert_eq!(capped[2].timestamp, 900);
    // a cap larger than the set returns everything
    assert_eq!(view.recent(100).len(), 10);
}

#[test]
fn duplicate_timestamps_are_preserved() {
    let mut log = SampleLog::new();
    log.append(&[s(1_000, 1.0), s(1_000, 2.0), s(1_000, 3.0)]);
    let mut pipeline = WindowPipeline::new();
    let view = pipeline.view_at(&log, 10, 1_000);
    assert_eq!(view.in_range.len(), 3);
}
