// Host-side tests for pinned-section scroll progress and the stage track.
// The main crate is wasm-only, so these exercise site-core directly.

#![allow(dead_code)]
use site_core::track::{Indicator, StageTrack};
use site_core::{PinnedSection, ScrollSession};

fn section() -> PinnedSection {
    // Five 1000px panels, pinned from y=1000.
    PinnedSection::new(1000.0, 5000.0, 1000.0)
}

#[test]
fn distance_is_track_minus_viewport() {
    let s = section();
    assert!((s.total_scrollable_distance() - 4000.0).abs() < 1e-4);
    assert!((s.end() - 5000.0).abs() < 1e-4);
}

#[test]
fn progress_hits_both_ends_and_clamps() {
    let s = section();
    assert_eq!(s.progress(1000.0), 0.0);
    assert_eq!(s.progress(5000.0), 1.0);
    assert!((s.progress(3000.0) - 0.5).abs() < 1e-6);
    assert_eq!(s.progress(0.0), 0.0);
    assert_eq!(s.progress(-300.0), 0.0);
    assert_eq!(s.progress(90_000.0), 1.0);
}

#[test]
fn progress_is_monotonic_in_offset() {
    let s = section();
    let mut last = s.progress(0.0);
    for i in 0..=120 {
        let p = s.progress(i as f32 * 50.0);
        assert!(p >= last, "progress went backwards at {}", i);
        last = p;
    }
}

#[test]
fn track_narrower_than_viewport_is_always_complete() {
    let s = PinnedSection::new(100.0, 800.0, 1000.0);
    assert_eq!(s.total_scrollable_distance(), 0.0);
    assert_eq!(s.progress(0.0), 1.0);
    assert_eq!(s.progress(100.0), 1.0);
    assert!(!s.is_pinned(100.0));
}

#[test]
fn pinned_only_strictly_inside_the_range() {
    let s = section();
    assert!(!s.is_pinned(500.0));
    assert!(!s.is_pinned(1000.0));
    assert!(s.is_pinned(1001.0));
    assert!(s.is_pinned(4999.0));
    assert!(!s.is_pinned(5000.0));
}

#[test]
fn pin_offset_follows_scroll_inside_range() {
    let s = section();
    assert_eq!(s.pin_offset(500.0), 0.0);
    assert!((s.pin_offset(3000.0) - 2000.0).abs() < 1e-4);
    assert!((s.pin_offset(9000.0) - 4000.0).abs() < 1e-4);
    assert_eq!(s.pin_offset(f32::NAN), 0.0);
}

#[test]
fn spacer_adds_the_scroll_budget() {
    let s = section();
    assert!((s.spacer_height(800.0) - 4800.0).abs() < 1e-4);
}

#[test]
fn session_keeps_last_offset_on_bad_input() {
    let mut session = ScrollSession::new(section());
    assert!((session.on_scroll(3000.0) - 0.5).abs() < 1e-6);
    assert!((session.on_scroll(f32::NAN) - 0.5).abs() < 1e-6);
    assert!((session.offset() - 3000.0).abs() < 1e-4);
}

#[test]
fn session_recomputes_on_resize() {
    let mut session = ScrollSession::new(section());
    session.on_scroll(3000.0);
    // Narrower viewport: track 2500, distance 2000.
    let p = session.on_resize(1000.0, 2500.0, 500.0);
    assert_eq!(p, 1.0);
    let p = session.on_resize(1000.0, 5000.0, 1000.0);
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn repeated_scroll_to_same_offset_is_stable() {
    let mut session = ScrollSession::new(section());
    let a = session.on_scroll(2345.0);
    let b = session.on_scroll(2345.0);
    assert_eq!(a, b);
}

#[test]
fn track_translation_and_centered_panel() {
    let track = StageTrack::new(5, 1000.0);
    let s = track.section(0.0, 1000.0);
    let distance = s.total_scrollable_distance();
    assert!((distance - 4000.0).abs() < 1e-4);

    let p = s.progress(2000.0);
    assert!((p - 0.5).abs() < 1e-6);
    assert!((track.translation(p, distance) + 2000.0).abs() < 1e-3);
    assert_eq!(track.centered_index(p, distance), 2);

    assert_eq!(track.centered_index(0.0, distance), 0);
    assert_eq!(track.centered_index(1.0, distance), 4);
}

#[test]
fn track_translation_stays_in_range() {
    let track = StageTrack::new(5, 1000.0);
    assert!((track.translation(1.7, 4000.0) + 4000.0).abs() < 1e-3);
    assert!(track.translation(-0.5, 4000.0).abs() < 1e-6);
    assert!(track.translation(f32::NAN, 4000.0).abs() < 1e-6);
}

#[test]
fn empty_track_centres_on_zero() {
    let track = StageTrack::new(0, 1000.0);
    assert_eq!(track.track_width(), 0.0);
    assert_eq!(track.centered_index(0.5, 0.0), 0);
}

#[test]
fn indicator_marks_relative_to_panel() {
    assert_eq!(Indicator::for_dot(0, 2), Indicator::Completed);
    assert_eq!(Indicator::for_dot(2, 2), Indicator::Current);
    assert_eq!(Indicator::for_dot(4, 2), Indicator::Upcoming);
    assert_eq!(Indicator::Current.css_class(), "is-current");
}

#[test]
fn small_drift_in_the_section_top_is_ignored() {
    let s = section();
    assert!(!s.has_moved(1000.0));
    assert!(!s.has_moved(1000.4));
    assert!(s.has_moved(1300.0));
    assert!(s.has_moved(900.0));
    assert!(!s.has_moved(f32::NAN));
}
