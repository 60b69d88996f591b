// Host-side tests for the pinned process scroller's stage choreography.

#![allow(dead_code)]
use site_core::ease::Ease;
use site_core::stages::{RevealState, StageConfig, StageController, MANUFACTURING_STAGES};
use std::time::Duration;

const STEP: Duration = Duration::from_millis(16);
const VIEWPORT: f32 = 1000.0;
const START: f32 = 1000.0;

fn no_scrub() -> StageConfig {
    StageConfig {
        scrub_catch_up_sec: 0.0,
        ..Default::default()
    }
}

fn controller(config: StageConfig) -> StageController {
    StageController::new(&MANUFACTURING_STAGES, config, START, VIEWPORT, 0.0)
}

/// Offset at which displayed progress reads `p` for the default geometry.
fn offset_at(p: f32) -> f32 {
    START + p * 4.0 * VIEWPORT
}

/// Run `frames` frames, checking every reported transition is a legal step.
fn run(c: &mut StageController, frames: usize, phases: &mut Vec<RevealState>) {
    for _ in 0..frames {
        let frame = c.frame(STEP);
        for (id, next) in frame.transitions {
            let i = c.index_of(id.as_str()).expect("known stage");
            assert!(
                phases[i].can_become(next),
                "{} jumped {:?} -> {:?}",
                id.as_str(),
                phases[i],
                next
            );
            phases[i] = next;
        }
    }
}

fn hidden_phases(c: &StageController) -> Vec<RevealState> {
    vec![RevealState::Hidden; c.stage_count()]
}

#[test]
fn stages_are_addressable_by_id() {
    let c = controller(no_scrub());
    assert_eq!(c.stage_count(), 5);
    assert_eq!(c.index_of("cell-assembly"), Some(2));
    assert_eq!(c.index_of("warehouse"), None);
    assert_eq!(c.stage_id(4).map(|id| id.as_str()), Some("final-product"));
}

#[test]
fn windows_follow_panel_order() {
    let c = controller(no_scrub());
    for i in 0..4 {
        let a = c.windows(i).unwrap();
        let b = c.windows(i + 1).unwrap();
        assert!(a.reveal.start < b.reveal.start);
        assert!(a.reveal.start < a.reveal.end);
        // The embellishment window sits inside the reveal window.
        assert!(a.active.start >= a.reveal.start && a.active.end <= a.reveal.end);
    }
    // Stage 2: left edge at 2000, distance 4000.
    let w = c.windows(2).unwrap();
    assert!((w.reveal.start - 0.3).abs() < 1e-5);
    assert!((w.reveal.end - 0.45).abs() < 1e-5);
}

#[test]
fn first_stage_reveals_on_load_and_others_wait() {
    let mut c = controller(no_scrub());
    let mut phases = hidden_phases(&c);
    run(&mut c, 100, &mut phases);
    assert_eq!(c.phase(0), Some(RevealState::Visible));
    for i in 1..5 {
        assert_eq!(c.phase(i), Some(RevealState::Hidden));
    }
}

#[test]
fn scrolling_to_the_end_reveals_everything_in_order() {
    let mut c = controller(no_scrub());
    let mut phases = hidden_phases(&c);
    c.on_scroll(offset_at(1.0));
    run(&mut c, 120, &mut phases);
    for i in 0..5 {
        assert_eq!(c.phase(i), Some(RevealState::Visible), "stage {}", i);
    }
    let frame = c.frame(Duration::ZERO);
    assert!((frame.translate_x + 4000.0).abs() < 1e-2);
    assert_eq!(frame.centered_index, 4);
    for stage in &frame.stages {
        for part in &stage.parts {
            assert!((part.opacity - 1.0).abs() < 1e-4);
        }
    }
}

#[test]
fn scrolling_back_rewinds_later_stages() {
    let mut c = controller(no_scrub());
    let mut phases = hidden_phases(&c);
    c.on_scroll(offset_at(1.0));
    run(&mut c, 120, &mut phases);

    c.on_scroll(offset_at(0.0));
    run(&mut c, 120, &mut phases);
    assert_eq!(c.phase(0), Some(RevealState::Visible));
    for i in 1..5 {
        assert_eq!(c.phase(i), Some(RevealState::Hidden), "stage {}", i);
    }
}

#[test]
fn reversing_mid_reveal_goes_through_reversing() {
    let mut c = controller(no_scrub());
    let mut phases = hidden_phases(&c);
    c.on_scroll(offset_at(0.4));
    run(&mut c, 6, &mut phases);
    assert_eq!(c.phase(2), Some(RevealState::Revealing));

    c.on_scroll(offset_at(0.0));
    run(&mut c, 1, &mut phases);
    assert_eq!(c.phase(2), Some(RevealState::Reversing));
    run(&mut c, 30, &mut phases);
    assert_eq!(c.phase(2), Some(RevealState::Hidden));
}

#[test]
fn looping_embellishment_pauses_outside_its_window() {
    let mut c = controller(no_scrub());
    let rollers = c.index_of("electrode-coating").unwrap();
    let w = c.windows(rollers).unwrap().active;
    let inside = START + (w.start + w.end) * 0.5 * 4.0 * VIEWPORT;

    c.on_scroll(inside);
    let f = c.frame(Duration::from_millis(500));
    let turn = f.stages[rollers].embellishment[0].rotate_deg;
    assert!((turn - 90.0).abs() < 1e-2, "got {}", turn);

    c.on_scroll(offset_at(0.5));
    let f = c.frame(Duration::from_millis(500));
    assert!((f.stages[rollers].embellishment[0].rotate_deg - 90.0).abs() < 1e-2);

    c.on_scroll(inside);
    let f = c.frame(Duration::from_millis(500));
    assert!((f.stages[rollers].embellishment[0].rotate_deg - 180.0).abs() < 1e-2);
}

/// Offset halfway through stage `index`'s embellishment window.
fn inside_active(c: &StageController, index: usize) -> f32 {
    let w = c.windows(index).unwrap().active;
    offset_at((w.start + w.end) * 0.5)
}

#[test]
fn swing_arm_pauses_and_swings_back() {
    let mut c = controller(no_scrub());
    let arm = c.index_of("cell-assembly").unwrap();
    let angle = |c: &mut StageController, dt: u64| {
        c.frame(Duration::from_millis(dt)).stages[arm].embellishment[0].rotate_deg
    };
    let swing = |p: f32| 15.0 * Ease::Power2InOut.apply(p);

    c.on_scroll(inside_active(&c, arm));
    let a = angle(&mut c, 1125);
    assert!((a - swing(0.75)).abs() < 1e-2, "got {}", a);

    // Out past either edge, it holds its angle.
    c.on_scroll(offset_at(0.5));
    assert!((angle(&mut c, 500) - a).abs() < 1e-4);
    c.on_scroll(inside_active(&c, arm));
    angle(&mut c, 0);
    c.on_scroll(offset_at(0.2));
    assert!((angle(&mut c, 500) - a).abs() < 1e-4);

    // Resumed: 2.325 s in, the second half-swing is on its way back.
    c.on_scroll(inside_active(&c, arm));
    let b = angle(&mut c, 1200);
    assert!((b - swing(0.45)).abs() < 1e-2, "got {}", b);
    assert!(b < a);
}

#[test]
fn checkmark_pops_once_per_entry() {
    let mut c = controller(no_scrub());
    let check = c.index_of("quality-testing").unwrap();
    let style = |c: &mut StageController, dt: u64| {
        c.frame(Duration::from_millis(dt)).stages[check].embellishment[0]
    };

    let s = style(&mut c, 0);
    assert_eq!(s.scale, 0.0);
    assert!((s.rotate_deg + 180.0).abs() < 1e-4);

    c.on_scroll(inside_active(&c, check));
    style(&mut c, 400);
    let s = style(&mut c, 1000);
    assert!((s.scale - 1.0).abs() < 1e-4);
    assert!(s.rotate_deg.abs() < 1e-3);

    // Leaving forward and coming back does not replay it.
    c.on_scroll(offset_at(1.0));
    style(&mut c, 100);
    c.on_scroll(inside_active(&c, check));
    let s = style(&mut c, 100);
    assert!((s.scale - 1.0).abs() < 1e-4);

    // Leaving backward rewinds it to the start pose.
    c.on_scroll(offset_at(0.5));
    let s = style(&mut c, 1000);
    assert_eq!(s.scale, 0.0);
    assert!((s.rotate_deg + 180.0).abs() < 1e-4);

    // The next entry pops it again.
    c.on_scroll(inside_active(&c, check));
    let s = style(&mut c, 400);
    assert!((s.scale - Ease::BackOut(1.7).apply(0.5)).abs() < 1e-3);
}

#[test]
fn packages_drop_in_one_after_another() {
    let mut c = controller(no_scrub());
    let packages = c.index_of("final-product").unwrap();
    c.on_scroll(inside_active(&c, packages));

    let f = c.frame(Duration::from_millis(300));
    let styles = &f.stages[packages].embellishment;
    assert!((styles[0].opacity - Ease::BounceOut.apply(0.5)).abs() < 1e-4);
    assert!((styles[1].opacity - Ease::BounceOut.apply(0.1 / 0.6)).abs() < 1e-4);
    assert_eq!(styles[2].opacity, 0.0);
    assert_eq!(styles[2].translate.y, 50.0);
    assert!(styles[0].opacity > styles[1].opacity);

    let f = c.frame(Duration::from_millis(1000));
    for s in &f.stages[packages].embellishment {
        assert!((s.opacity - 1.0).abs() < 1e-4);
        assert!(s.translate.y.abs() < 1e-3);
    }
}

#[test]
fn mounting_mid_section_starts_at_the_real_position() {
    let mut c = StageController::new(
        &MANUFACTURING_STAGES,
        StageConfig::default(),
        START,
        VIEWPORT,
        offset_at(0.75),
    );
    assert!((c.displayed_progress() - 0.75).abs() < 1e-6);
    let f = c.frame(STEP);
    assert!((f.progress - 0.75).abs() < 1e-6);
    assert!((f.translate_x + 3000.0).abs() < 1e-2);
    assert_eq!(f.centered_index, 3);
    // Stage 3's reveal window (0.55..0.7) has already been passed.
    assert_eq!(c.phase(3), Some(RevealState::Revealing));
    assert_eq!(c.phase(4), Some(RevealState::Hidden));
}

#[test]
fn a_moved_section_is_reanchored_on_scroll() {
    let mut c = controller(no_scrub());
    assert!(!c.on_scroll_from(START, offset_at(0.25)));
    assert!((c.progress() - 0.25).abs() < 1e-6);

    // Content above the section grew by 300px after mount.
    let moved = START + 300.0;
    assert!(c.on_scroll_from(moved, moved));
    assert_eq!(c.section().start, moved);
    assert_eq!(c.progress(), 0.0);
    assert_eq!(c.displayed_progress(), 0.0);
    assert!(!c.frame(STEP).pinned);

    assert!(!c.on_scroll_from(moved + 0.2, moved + 2000.0));
    assert!((c.progress() - 0.5).abs() < 1e-6);
}

#[test]
fn packages_have_one_style_each() {
    let mut c = controller(no_scrub());
    let f = c.frame(STEP);
    assert!(f.stages[0].embellishment.is_empty());
    for i in 1..4 {
        assert_eq!(f.stages[i].embellishment.len(), 1, "stage {}", i);
    }
    assert_eq!(f.stages[4].embellishment.len(), 3);
}

#[test]
fn relayout_leaves_no_stage_stuck() {
    let mut c = controller(StageConfig::default());
    let mut phases = hidden_phases(&c);
    c.on_scroll(offset_at(0.5));
    run(&mut c, 150, &mut phases);

    // Viewport halves: distance drops to 2000, so y=3000 is now the end.
    c.relayout(START, 500.0, offset_at(0.5));
    assert_eq!(c.progress(), 1.0);
    assert!((c.displayed_progress() - 1.0).abs() < 1e-6);
    run(&mut c, 100, &mut phases);
    for i in 0..5 {
        assert_eq!(c.phase(i), Some(RevealState::Visible), "stage {}", i);
    }
    let w = c.windows(1).unwrap();
    assert!((w.reveal.start - (500.0 - 400.0) / 2000.0).abs() < 1e-5);
}

#[test]
fn zero_dt_frame_changes_nothing() {
    let mut c = controller(StageConfig::default());
    c.on_scroll(offset_at(0.35));
    for _ in 0..20 {
        c.frame(STEP);
    }
    let a = c.frame(Duration::ZERO);
    let b = c.frame(Duration::ZERO);
    assert_eq!(a.progress, b.progress);
    assert_eq!(a.translate_x, b.translate_x);
    assert!(b.transitions.is_empty());
    for (x, y) in a.stages.iter().zip(&b.stages) {
        assert_eq!(x.phase, y.phase);
        assert_eq!(x.parts, y.parts);
    }
}

#[test]
fn scrub_lags_behind_live_progress() {
    let mut c = controller(StageConfig::default());
    c.on_scroll(offset_at(1.0));
    let f = c.frame(STEP);
    assert!(f.progress > 0.0 && f.progress < 0.5);
    for _ in 0..120 {
        c.frame(STEP);
    }
    assert!((c.displayed_progress() - 1.0).abs() < 1e-3);
}

#[test]
fn pinned_flag_tracks_scroll() {
    let mut c = controller(no_scrub());
    c.on_scroll(offset_at(0.5));
    assert!(c.frame(STEP).pinned);
    c.on_scroll(0.0);
    assert!(!c.frame(STEP).pinned);
}

#[test]
fn nothing_to_scroll_collapses_windows() {
    let mut c =
        StageController::new(&MANUFACTURING_STAGES[..1], no_scrub(), 0.0, VIEWPORT, 0.0);
    let w = c.windows(0).unwrap();
    assert_eq!(w.reveal.start, 0.0);
    assert_eq!(w.reveal.end, 0.0);
    assert_eq!(c.progress(), 1.0);
    let mut phases = hidden_phases(&c);
    run(&mut c, 100, &mut phases);
    assert_eq!(c.phase(0), Some(RevealState::Visible));
}

#[test]
fn reveal_paths_only_take_adjacent_steps() {
    use RevealState::*;
    assert!(!Hidden.can_become(Visible));
    assert!(!Visible.can_become(Hidden));
    assert_eq!(Hidden.path_to(Visible).as_slice(), &[Revealing, Visible]);
    assert_eq!(Visible.path_to(Hidden).as_slice(), &[Reversing, Hidden]);
    assert!(Visible.path_to(Visible).is_empty());
    for from in [Hidden, Revealing, Visible, Reversing] {
        for to in [Hidden, Revealing, Visible, Reversing] {
            let mut at = from;
            for step in from.path_to(to) {
                assert!(at.can_become(step), "{:?} -> {:?}", at, step);
                at = step;
            }
            assert_eq!(at, to);
        }
    }
}
