// Host-side tests for tweens, progress-window triggers and easing.

#![allow(dead_code)]
use site_core::ease::{map_range, there_and_back, Ease};
use site_core::trigger::{ProgressWindow, ScrollTrigger, ToggleAction, ToggleActions, TriggerEvent};
use site_core::tween::{
    staggered_duration, staggered_progress, Playback, Ramp, Repeat, Scrub, Tween,
};
use std::time::Duration;

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

#[test]
fn window_orders_its_edges() {
    let w = ProgressWindow::new(0.5, 0.2);
    assert_eq!(w.start, 0.2);
    assert_eq!(w.end, 0.5);
    assert!(w.contains(0.2) && w.contains(0.5));
    assert!(!w.contains(0.51));
}

#[test]
fn trigger_reports_each_crossing() {
    let mut t = ScrollTrigger::new(ProgressWindow::new(0.2, 0.6));
    assert!(t.update(0.1).is_empty());
    assert_eq!(t.update(0.3).as_slice(), &[TriggerEvent::Enter]);
    assert!(t.update(0.4).is_empty());
    assert_eq!(t.update(0.9).as_slice(), &[TriggerEvent::Leave]);
    assert_eq!(t.update(0.3).as_slice(), &[TriggerEvent::EnterBack]);
    assert_eq!(t.update(0.0).as_slice(), &[TriggerEvent::LeaveBack]);
}

#[test]
fn jumping_over_a_window_reports_both_edges() {
    let mut t = ScrollTrigger::new(ProgressWindow::new(0.2, 0.6));
    assert_eq!(
        t.update(1.0).as_slice(),
        &[TriggerEvent::Enter, TriggerEvent::Leave]
    );
    assert_eq!(
        t.update(0.0).as_slice(),
        &[TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
    );
}

#[test]
fn toggle_actions_parse_four_words() {
    let parsed: ToggleActions = "play pause resume pause".parse().unwrap();
    assert_eq!(parsed, ToggleActions::PLAY_PAUSE_RESUME);
    let parsed: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(parsed, ToggleActions::PLAY_REVERSE);
    assert!("play none".parse::<ToggleActions>().is_err());
    assert!("play none none rewind".parse::<ToggleActions>().is_err());
    assert_eq!(
        ToggleActions::PLAY_REVERSE.action_for(TriggerEvent::LeaveBack),
        ToggleAction::Reverse
    );
}

#[test]
fn tween_plays_to_its_end_and_stops() {
    let mut t = Tween::new(1.0);
    assert_eq!(t.playback(), Playback::Idle);
    t.advance(secs(0.5));
    assert_eq!(t.time_sec(), 0.0);

    t.play();
    t.advance(secs(0.5));
    assert!((t.progress() - 0.5).abs() < 1e-5);
    t.advance(secs(3.0));
    assert_eq!(t.time_sec(), 1.0);
    assert!(t.is_at_end());
}

#[test]
fn tween_reverses_back_to_start() {
    let mut t = Tween::new(1.0);
    t.play();
    t.advance(secs(0.6));
    t.reverse();
    t.advance(secs(0.2));
    assert!((t.time_sec() - 0.4).abs() < 1e-5);
    t.advance(secs(2.0));
    assert_eq!(t.time_sec(), 0.0);
    assert!(t.is_at_start());
    assert_eq!(t.playback(), Playback::Finished);
}

#[test]
fn reversing_at_start_goes_nowhere() {
    let mut t = Tween::new(1.0);
    t.reverse();
    assert_eq!(t.playback(), Playback::Finished);
    t.advance(secs(1.0));
    assert_eq!(t.time_sec(), 0.0);
}

#[test]
fn delay_only_holds_the_first_forward_play() {
    let mut t = Tween::new(1.0).with_delay(0.5);
    t.play();
    t.advance(secs(0.4));
    assert_eq!(t.time_sec(), 0.0);
    t.advance(secs(0.3));
    assert!((t.time_sec() - 0.2).abs() < 1e-4);
}

#[test]
fn pause_holds_position() {
    let mut t = Tween::new(1.0);
    t.play();
    t.advance(secs(0.3));
    t.pause();
    t.advance(secs(0.5));
    assert!((t.time_sec() - 0.3).abs() < 1e-5);
    t.resume();
    t.advance(secs(0.2));
    assert!((t.time_sec() - 0.5).abs() < 1e-5);
}

#[test]
fn resume_on_a_fresh_tween_starts_it() {
    let mut t = Tween::new(1.0);
    t.resume();
    assert!(t.is_playing());
}

#[test]
fn yoyo_mirrors_odd_cycles() {
    let mut t = Tween::new(1.0).with_repeat(Repeat::Infinite).with_yoyo(true);
    t.play();
    t.advance(secs(1.25));
    assert_eq!(t.cycle(), 1);
    assert!((t.progress() - 0.75).abs() < 1e-4);
    assert!(t.is_playing());
}

#[test]
fn counted_repeats_finish_at_the_end() {
    let mut t = Tween::new(1.0).with_repeat(Repeat::Times(1));
    t.play();
    t.advance(secs(1.5));
    assert_eq!(t.cycle(), 1);
    t.advance(secs(1.0));
    assert_eq!(t.playback(), Playback::Finished);
    assert_eq!(t.time_sec(), 1.0);
}

#[test]
fn complete_and_reset_jump_to_the_ends() {
    let mut t = Tween::new(2.0);
    t.complete();
    assert!(t.is_at_end());
    assert_eq!(t.progress(), 1.0);
    t.reset();
    assert!(t.is_at_start());
    assert_eq!(t.playback(), Playback::Idle);
}

#[test]
fn stagger_offsets_each_item() {
    assert!((staggered_duration(3, 0.2, 0.8) - 1.2).abs() < 1e-5);
    assert_eq!(staggered_duration(0, 0.2, 0.8), 0.8);
    assert!((staggered_progress(0.5, 1, 0.2, 0.8) - 0.375).abs() < 1e-5);
    assert_eq!(staggered_progress(0.1, 1, 0.2, 0.8), 0.0);
    assert_eq!(staggered_progress(5.0, 2, 0.2, 0.8), 1.0);
}

#[test]
fn scrub_jumps_first_then_follows() {
    let mut s = Scrub::new(1.0);
    assert_eq!(s.follow(1.0, Duration::ZERO), 1.0);
    let v = s.follow(0.0, secs(0.1));
    assert!(v > 0.0 && v < 1.0);
    let v = s.follow(0.0, secs(1.0));
    assert!(v < 0.05);

    let mut instant = Scrub::new(0.0);
    instant.follow(0.0, Duration::ZERO);
    assert_eq!(instant.follow(0.7, secs(0.016)), 0.7);
}

#[test]
fn ramp_moves_at_a_fixed_rate() {
    let mut r = Ramp::new(0.2);
    assert!(r.is_settled());
    r.set_on(true);
    r.advance(secs(0.1));
    assert!((r.value() - 0.5).abs() < 1e-4);
    r.advance(secs(0.2));
    assert_eq!(r.value(), 1.0);
    assert!(r.is_settled());
}

#[test]
fn every_ease_starts_at_zero_and_ends_at_one() {
    let eases = [
        Ease::Linear,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::BackOut(1.7),
        Ease::BounceOut,
    ];
    for ease in eases {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        assert_eq!(ease.apply(f32::NAN), 0.0, "{:?}", ease);
    }
    assert!(Ease::BackOut(1.7).apply(0.6) > 1.0);
}

#[test]
fn ease_names_parse() {
    assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::Power2Out);
    assert_eq!("back.out".parse::<Ease>().unwrap(), Ease::BackOut(1.7));
    assert!("wobble".parse::<Ease>().is_err());
}

#[test]
fn map_range_clamps_to_output() {
    assert!((map_range(500.0, 0.0, 1000.0, 0.0, -200.0) + 100.0).abs() < 1e-4);
    assert_eq!(map_range(5000.0, 0.0, 1000.0, 0.0, -200.0), -200.0);
    assert_eq!(map_range(f32::NAN, 0.0, 1.0, 3.0, 4.0), 3.0);
    assert_eq!(map_range(0.5, 1.0, 1.0, 3.0, 4.0), 3.0);
}

#[test]
fn there_and_back_returns_home() {
    assert_eq!(there_and_back(0.0, Ease::EaseInOut), 0.0);
    assert_eq!(there_and_back(0.5, Ease::EaseInOut), 1.0);
    assert_eq!(there_and_back(1.0, Ease::EaseInOut), 0.0);
}
