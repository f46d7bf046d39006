use powerscope::{BrushOverlay, LinearScale, Sample, ZoomState};

// The fixture from the brush interaction: three samples, values climbing.
fn samples() -> Vec<Sample> {
    vec![
        Sample::new(0, 100.0),
        Sample::new(1_000, 200.0),
        Sample::new(2_000, 300.0),
    ]
}

// Identity scale: screen positions are timestamps, which keeps expected
// values exact.
fn identity_scale() -> LinearScale {
    LinearScale::new((0.0, 2_000.0), (0.0, 2_000.0))
}

#[test]
fn scale_maps_and_inverts() {
    let scale = LinearScale::new((0.0, 1_000.0), (0.0, 500.0));
    assert_eq!(scale.map(500.0), 250.0);
    assert_eq!(scale.invert(250.0), 500.0);
    // map clamps to the screen range
    assert_eq!(scale.map(2_000.0), 500.0);
    // degenerate domain maps onto the range origin
    let flat = LinearScale::new((3.0, 3.0), (0.0, 100.0));
    assert_eq!(flat.map(42.0), 0.0);
}

#[test]
fn commit_pads_value_extent_of_selection() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(500.0);
    brush.drag_move(1_500.0);
    let domain = brush
        .drag_end(&identity_scale(), &samples())
        .expect("selection should commit");

    // only the sample at t=1000 (value 200) is inside [500, 1500]
    assert_eq!(domain.left, 500.0);
    assert_eq!(domain.right, 1_500.0);
    assert_eq!(domain.bottom, 180.0);
    assert_eq!(domain.top, 220.0);
    assert_eq!(brush.active_domain(), Some(domain));
}

#[test]
fn right_to_left_drag_is_swapped() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(1_500.0);
    brush.drag_move(500.0);
    let domain = brush
        .drag_end(&identity_scale(), &samples())
        .expect("swapped selection should commit");
    assert_eq!(domain.left, 500.0);
    assert_eq!(domain.right, 1_500.0);
}

#[test]
fn zero_width_selection_is_discarded() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(800.0);
    brush.drag_move(800.0);
    assert!(brush.drag_end(&identity_scale(), &samples()).is_none());
    assert_eq!(*brush.state(), ZoomState::Idle);
}

#[test]
fn press_without_move_is_discarded() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(800.0);
    assert!(brush.drag_end(&identity_scale(), &samples()).is_none());
    assert_eq!(*brush.state(), ZoomState::Idle);
}

#[test]
fn release_without_drag_is_a_noop() {
    let mut brush = BrushOverlay::new();
    assert!(brush.drag_end(&identity_scale(), &samples()).is_none());
    assert_eq!(*brush.state(), ZoomState::Idle);
}

#[test]
fn stray_release_while_zoomed_keeps_override() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(500.0);
    brush.drag_move(1_500.0);
    let committed = brush.drag_end(&identity_scale(), &samples()).unwrap();

    // a release with no preceding press must not disturb the override
    assert!(brush.drag_end(&identity_scale(), &samples()).is_none());
    assert_eq!(brush.active_domain(), Some(committed));
}

#[test]
fn empty_selection_falls_back_to_padded_zero() {
    let mut brush = BrushOverlay::new();
    // [1200, 1800] contains no samples; the extent falls back to 0
    brush.drag_start(1_200.0);
    brush.drag_move(1_800.0);
    let domain = brush
        .drag_end(&identity_scale(), &samples())
        .expect("empty but ordered selection still commits");
    assert_eq!(domain.bottom, -20.0);
    assert_eq!(domain.top, 20.0);
}

#[test]
fn invalid_release_from_zoomed_keeps_prior_override() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(500.0);
    brush.drag_move(1_500.0);
    let first = brush.drag_end(&identity_scale(), &samples()).unwrap();

    // a fresh drag that resolves to nothing leaves the override in place
    brush.drag_start(900.0);
    brush.drag_move(900.0);
    assert!(brush.drag_end(&identity_scale(), &samples()).is_none());
    assert_eq!(brush.active_domain(), Some(first));
}

#[test]
fn valid_release_from_zoomed_replaces_override() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(500.0);
    brush.drag_move(1_500.0);
    let first = brush.drag_end(&identity_scale(), &samples()).unwrap();

    brush.drag_start(0.0);
    brush.drag_move(2_000.0);
    let second = brush.drag_end(&identity_scale(), &samples()).unwrap();
    assert_ne!(first, second);
    // all three samples inside now
    assert_eq!(second.bottom, 80.0);
    assert_eq!(second.top, 320.0);
}

#[test]
fn zoom_out_clears_override() {
    let mut brush = BrushOverlay::new();
    brush.drag_start(500.0);
    brush.drag_move(1_500.0);
    brush.drag_end(&identity_scale(), &samples());
    assert!(brush.active_domain().is_some());

    brush.zoom_out();
    assert_eq!(*brush.state(), ZoomState::Idle);
    assert!(brush.active_domain().is_none());

    // idempotent
    brush.zoom_out();
    assert_eq!(*brush.state(), ZoomState::Idle);
}

#[test]
fn drag_extent_tracks_in_progress_selection() {
    let mut brush = BrushOverlay::new();
    assert!(brush.drag_extent().is_none());
    brush.drag_start(100.0);
    assert!(brush.drag_extent().is_none());
    brush.drag_move(300.0);
    assert_eq!(brush.drag_extent(), Some((100.0, 300.0)));
}
