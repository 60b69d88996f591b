// Host-side tests for the DOM-free helpers used by the browser bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use layout::*;
use site_core::reveal::{split_glyphs, RevealConfig, RevealDirection};
use site_core::stages::{Embellishment, MANUFACTURING_STAGES};
use std::time::Duration;

#[test]
fn long_frames_are_clamped() {
    let max = Duration::from_secs_f32(constants::MAX_FRAME_DT_SEC);
    assert_eq!(clamp_frame_dt(Duration::from_secs(5)), max);
    assert_eq!(
        clamp_frame_dt(Duration::from_millis(16)),
        Duration::from_millis(16)
    );
    assert_eq!(clamp_frame_dt(Duration::ZERO), Duration::ZERO);
}

#[test]
fn configure_skips_bad_attributes() {
    let attrs = vec![
        ("data-reveal", "left".to_string()),
        ("data-reveal-distance", "lots".to_string()),
        ("data-reveal-once", "false".to_string()),
    ];
    let cfg = configure(RevealConfig::default(), &attrs, RevealConfig::apply_attr);
    assert_eq!(cfg.direction, RevealDirection::Left);
    assert_eq!(cfg.distance, RevealConfig::default().distance);
    assert!(!cfg.once);
}

#[test]
fn configure_with_no_attributes_keeps_defaults() {
    let cfg = configure(RevealConfig::default(), &[], RevealConfig::apply_attr);
    assert_eq!(cfg, RevealConfig::default());
}

#[test]
fn glyph_markup_wraps_letters_and_escapes() {
    let html = glyph_markup(&split_glyphs("A<b"), "letter");
    assert!(html.starts_with(
        "<span class=\"letter\" data-letter=\"0\" style=\"display:inline-block\">A</span>"
    ));
    assert!(html.contains(">&lt;</span>"));
    assert!(html.contains("data-letter=\"2\""));
    assert!(!html.contains("<b"));
}

#[test]
fn glyph_markup_leaves_spaces_unwrapped() {
    let html = glyph_markup(&split_glyphs("a b"), "title-letter");
    assert!(html.contains("</span> <span"));
    assert_eq!(html.matches("<span").count(), 2);
}

#[test]
fn every_embellished_stage_has_a_marker_name() {
    let names: Vec<&str> = MANUFACTURING_STAGES
        .iter()
        .filter_map(|s| s.embellishment)
        .map(embellishment_name)
        .collect();
    assert_eq!(names, ["roller", "arm", "checkmark", "package"]);
    assert_eq!(
        embellishment_name(Embellishment::Packages { count: 9 }),
        "package"
    );
}

#[test]
fn embellish_selectors_match_their_markers() {
    assert_eq!(embellish_selector(Embellishment::Rollers), "[data-embellish=\"roller\"]");
    assert_eq!(
        embellish_selector(Embellishment::Packages { count: 3 }),
        "[data-embellish=\"package\"]"
    );
}

#[test]
fn px_formats_two_decimals() {
    assert_eq!(px(1.5), "1.50px");
    assert_eq!(px(-2000.0), "-2000.00px");
}
