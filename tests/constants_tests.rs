// Host-side sanity checks for the shared motion tuning.

#![allow(dead_code)]
use site_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn stage_windows_nest() {
    // Reveal window outside, embellishment window inside it.
    assert!(STAGE_ENTER_VIEWPORT_FRACTION > EMBELLISH_ENTER_VIEWPORT_FRACTION);
    assert!(EMBELLISH_ENTER_VIEWPORT_FRACTION > EMBELLISH_EXIT_VIEWPORT_FRACTION);
    assert!(EMBELLISH_EXIT_VIEWPORT_FRACTION > STAGE_EXIT_VIEWPORT_FRACTION);
    assert!(STAGE_EXIT_VIEWPORT_FRACTION >= 0.0);
    assert!(STAGE_ENTER_VIEWPORT_FRACTION <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    for d in [
        STAGE_REVEAL_DURATION_SEC,
        ROLLER_TURN_SEC,
        ARM_SWING_SEC,
        CHECKMARK_POP_SEC,
        PACKAGE_DROP_SEC,
        REVEAL_DURATION_SEC,
        STAGGER_ITEM_DURATION_SEC,
        HERO_LETTER_DURATION_SEC,
        HERO_SUBTITLE_DURATION_SEC,
        HERO_BUTTONS_DURATION_SEC,
        HOVER_SCALE_SEC,
        PRESS_SCALE_SEC,
        GLOW_FADE_SEC,
    ] {
        assert!(d > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn magnetic_tuning_is_sane() {
    // The pull never reaches the pointer itself.
    assert!(MAGNETIC_DAMPING_FACTOR > 0.0 && MAGNETIC_DAMPING_FACTOR < 1.0);
    assert!(MAGNETIC_MAX_DISTANCE > TILT_INPUT_RANGE);
    assert!(PRESS_SCALE < 1.0 && HOVER_SCALE > 1.0);
    assert!(GLOW_SCALE_TO > GLOW_SCALE_FROM);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_overlaps_are_shorter_than_the_steps() {
    assert!(HERO_SUBTITLE_OVERLAP_SEC < HERO_SUBTITLE_DURATION_SEC);
    assert!(HERO_BUTTONS_OVERLAP_SEC < HERO_BUTTONS_DURATION_SEC);
    assert!(HERO_TEXT_FADE_END > 0.0 && HERO_TEXT_FADE_END <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(PARTICLE_FADE_TO < 1.0);
    assert!(PARALLAX_SHIFT_Y < 0.0);
}
