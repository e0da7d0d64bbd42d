use super::*;

fn span(top: f32, bottom: f32) -> ViewportSpan {
    ViewportSpan::new(top, bottom)
}

#[test]
fn span_normalizes_reversed_edges() {
    let s = span(40.0, 10.0);
    assert_eq!(s.top(), 10.0);
    assert_eq!(s.bottom(), 40.0);
    assert_eq!(s.height(), 30.0);
}

#[test]
fn inset_past_height_collapses_to_midpoint() {
    let s = span(0.0, 100.0).inset(80.0);
    assert_eq!(s.top(), 50.0);
    assert_eq!(s.bottom(), 50.0);
}

#[test]
fn touching_spans_do_not_overlap() {
    assert!(!span(0.0, 100.0).overlaps(span(100.0, 200.0)));
    assert!(span(0.0, 100.0).overlaps(span(99.0, 200.0)));
}

#[test]
fn latch_waits_for_region_to_clear_trigger_margin() {
    let viewport = span(0.0, 800.0);
    let mut latch = RevealLatch::new();

    // Top edge is visible but still inside the bottom margin band.
    assert!(!latch.observe(span(750.0, 1200.0), viewport, 1.0));
    assert!(!latch.is_revealed());

    assert!(latch.observe(span(650.0, 1100.0), viewport, 2.0));
    assert!(latch.is_revealed());
    assert_eq!(latch.revealed_at(), Some(2.0));
}

#[test]
fn zero_margin_reveals_on_first_overlap() {
    let mut latch = RevealLatch::with_margin(0.0);
    assert!(latch.observe(span(790.0, 900.0), span(0.0, 800.0), 0.5));
}

#[test]
fn latch_never_reverts_once_revealed() {
    let viewport = span(0.0, 800.0);
    let mut latch = RevealLatch::new();
    assert!(latch.observe(span(200.0, 400.0), viewport, 3.0));

    let samples = [
        span(5_000.0, 6_000.0),
        span(-6_000.0, -5_000.0),
        span(200.0, 400.0),
    ];
    for (i, region) in samples.into_iter().enumerate() {
        assert!(!latch.observe(region, viewport, 4.0 + i as f64));
        assert!(latch.is_revealed());
    }
    assert_eq!(latch.revealed_at(), Some(3.0));
}

#[test]
fn elapsed_is_none_until_revealed_and_never_negative() {
    let mut latch = RevealLatch::new();
    assert_eq!(latch.elapsed(10.0), None);
    latch.observe(span(100.0, 300.0), span(0.0, 800.0), 10.0);
    assert_eq!(latch.elapsed(12.5), Some(2.5));
    assert_eq!(latch.elapsed(9.0), Some(0.0));
}

#[test]
fn stagger_delays_items_by_index() {
    let stagger = Stagger::new(0.0, 0.1, 0.6);
    assert_eq!(stagger.progress(0, None), 0.0);
    assert_eq!(stagger.progress(3, Some(0.25)), 0.0);
    assert!(stagger.progress(0, Some(0.3)) > 0.0);
    assert_eq!(stagger.progress(3, Some(1.0)), 1.0);
}

#[test]
fn stagger_progress_is_monotonic_and_bounded() {
    let stagger = presets::JOBS;
    let mut last = 0.0;
    for step in 0..=40 {
        let p = stagger.progress(2, Some(step as f64 * 0.05));
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last);
        last = p;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn settled_tracks_the_last_item() {
    let stagger = Stagger::new(0.0, 0.1, 0.5);
    assert!(!stagger.settled(4, Some(0.7)));
    assert!(stagger.settled(4, Some(0.9)));
    assert!(!stagger.settled(4, None));
}

#[test]
fn entrance_moves_from_offset_pose_to_natural_pose() {
    let entrance = Entrance::rise(30.0);
    let hidden = entrance.at(0.0);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.offset_y, 30.0);

    let shown = entrance.at(1.0);
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.offset_y, 0.0);
    assert!(shown.is_settled());
}

#[test]
fn grow_entrance_scales_up_to_one() {
    let frame = presets::CERTIFICATION_ENTRANCE.at(0.5);
    assert!((frame.scale - 0.95).abs() < 1e-6);
    assert_eq!(presets::CERTIFICATION_ENTRANCE.at(2.0).scale, 1.0);
}

#[test]
fn degrees_alternate_entrance_sides() {
    assert!(presets::degree_entrance(0).offset_x < 0.0);
    assert!(presets::degree_entrance(1).offset_x > 0.0);
    assert!(presets::degree_entrance(2).offset_x < 0.0);
}

#[test]
fn skill_bars_start_after_category_offset() {
    let bars = presets::skill_bars(2);
    assert!((bars.delay(0) - 0.2).abs() < 1e-6);
    assert!((bars.delay(3) - 0.5).abs() < 1e-6);
    assert_eq!(bars.duration, 1.0);
}
