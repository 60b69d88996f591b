//! Stage reveal choreography for the pinned manufacturing-process scroller.
//!
//! Each panel has a *reveal* window (left edge between 80% and 20% of the
//! viewport) and a narrower *active* window (60% to 40%) that drives its
//! embellishment. Crossing a window edge only starts or reverses a
//! [`Tween`]; the tween advances with frame time.

use crate::constants::*;
use crate::ease::{lerp, Ease};
use crate::scroll::{PinnedSection, ScrollSession};
use crate::style::ElementStyle;
use crate::track::StageTrack;
use crate::trigger::{ProgressWindow, ScrollTrigger, ToggleActions};
use crate::tween::{
    staggered_duration, staggered_progress, Heading, Playback, Repeat, Scrub, Tween,
};
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StageId(pub &'static str);

impl StageId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Stage-specific motion layered on top of the common reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Embellishment {
    /// Coating rollers spinning one turn per cycle, forever.
    Rollers,
    /// Assembly arm swinging back and forth.
    SwingArm,
    /// Test-pass checkmark popping in once per entry.
    Checkmark,
    /// Shipping packages dropping in one after another.
    Packages { count: usize },
}

impl Embellishment {
    fn tween(self) -> Tween {
        match self {
            Embellishment::Rollers => Tween::new(ROLLER_TURN_SEC).with_repeat(Repeat::Infinite),
            Embellishment::SwingArm => Tween::new(ARM_SWING_SEC)
                .with_repeat(Repeat::Infinite)
                .with_yoyo(true)
                .with_ease(Ease::Power2InOut),
            Embellishment::Checkmark => {
                Tween::new(CHECKMARK_POP_SEC).with_ease(Ease::BackOut(BACK_OUT_OVERSHOOT))
            }
            Embellishment::Packages { count } => Tween::new(staggered_duration(
                count,
                PACKAGE_STAGGER_SEC,
                PACKAGE_DROP_SEC,
            )),
        }
    }

    /// Loops pause outside their window and resume where they left off;
    /// one-shots play on entry and rewind on leaving backward.
    pub fn toggle_actions(self) -> ToggleActions {
        match self {
            Embellishment::Rollers | Embellishment::SwingArm => ToggleActions::PLAY_PAUSE_RESUME,
            Embellishment::Checkmark | Embellishment::Packages { .. } => {
                ToggleActions::PLAY_REVERSE
            }
        }
    }

    /// Styles for the embellishment's targets. A single entry applies to
    /// every target; otherwise entry `i` belongs to target `i`.
    pub fn styles(self, tween: &Tween) -> SmallVec<[ElementStyle; 3]> {
        match self {
            Embellishment::Rollers => smallvec![ElementStyle {
                rotate_deg: 360.0 * tween.progress(),
                ..ElementStyle::IDENTITY
            }],
            Embellishment::SwingArm => smallvec![ElementStyle {
                rotate_deg: ARM_SWING_DEG * tween.eased(),
                ..ElementStyle::IDENTITY
            }],
            Embellishment::Checkmark => {
                let k = tween.eased();
                smallvec![ElementStyle {
                    scale: k,
                    rotate_deg: lerp(CHECKMARK_FROM_DEG, 0.0, k),
                    ..ElementStyle::IDENTITY
                }]
            }
            Embellishment::Packages { count } => (0..count)
                .map(|i| {
                    let local = staggered_progress(
                        tween.time_sec(),
                        i,
                        PACKAGE_STAGGER_SEC,
                        PACKAGE_DROP_SEC,
                    );
                    let k = Ease::BounceOut.apply(local);
                    ElementStyle {
                        opacity: k,
                        translate: Vec2::new(0.0, PACKAGE_OFFSET_Y * (1.0 - k)),
                        ..ElementStyle::IDENTITY
                    }
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StageDef {
    pub id: StageId,
    pub embellishment: Option<Embellishment>,
}

/// The five manufacturing stages, in track order.
pub const MANUFACTURING_STAGES: [StageDef; 5] = [
    StageDef {
        id: StageId("raw-materials"),
        embellishment: None,
    },
    StageDef {
        id: StageId("electrode-coating"),
        embellishment: Some(Embellishment::Rollers),
    },
    StageDef {
        id: StageId("cell-assembly"),
        embellishment: Some(Embellishment::SwingArm),
    },
    StageDef {
        id: StageId("quality-testing"),
        embellishment: Some(Embellishment::Checkmark),
    },
    StageDef {
        id: StageId("final-product"),
        embellishment: Some(Embellishment::Packages { count: 3 }),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing,
    Visible,
    Reversing,
}

impl RevealState {
    /// Adjacent moves only. Flipping direction mid-transition counts as
    /// adjacent; jumping between the two rest states does not.
    pub fn can_become(self, next: RevealState) -> bool {
        use RevealState::*;
        matches!(
            (self, next),
            (Hidden, Revealing)
                | (Revealing, Visible)
                | (Visible, Reversing)
                | (Reversing, Hidden)
                | (Revealing, Reversing)
                | (Reversing, Revealing)
        )
    }

    /// The adjacent steps from `self` to `target`, excluding `self`.
    pub fn path_to(self, target: RevealState) -> SmallVec<[RevealState; 2]> {
        use RevealState::*;
        if self == target {
            return SmallVec::new();
        }
        if self.can_become(target) {
            return smallvec![target];
        }
        match (self, target) {
            (_, Visible) => smallvec![Revealing, Visible],
            (_, Hidden) => smallvec![Reversing, Hidden],
            (Hidden, Reversing) => smallvec![Revealing, Reversing],
            (_, _) => smallvec![Reversing, Revealing],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Revealing => "revealing",
            RevealState::Visible => "visible",
            RevealState::Reversing => "reversing",
        }
    }

    fn of(tween: &Tween) -> RevealState {
        match (tween.playback(), tween.heading()) {
            (Playback::Playing, Heading::Forward) => RevealState::Revealing,
            (Playback::Playing, Heading::Backward) => RevealState::Reversing,
            _ if tween.is_at_start() => RevealState::Hidden,
            _ if tween.progress() >= 1.0 => RevealState::Visible,
            (_, Heading::Forward) => RevealState::Revealing,
            (_, Heading::Backward) => RevealState::Reversing,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StageConfig {
    pub enter_fraction: f32,
    pub exit_fraction: f32,
    pub active_enter_fraction: f32,
    pub active_exit_fraction: f32,
    pub reveal_duration_sec: f32,
    pub reveal_stagger_sec: f32,
    pub reveal_offset_y: f32,
    pub reveal_scale_from: f32,
    pub reveal_ease: Ease,
    /// Lag of the displayed track behind the live scroll position; 0 disables.
    pub scrub_catch_up_sec: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            enter_fraction: STAGE_ENTER_VIEWPORT_FRACTION,
            exit_fraction: STAGE_EXIT_VIEWPORT_FRACTION,
            active_enter_fraction: EMBELLISH_ENTER_VIEWPORT_FRACTION,
            active_exit_fraction: EMBELLISH_EXIT_VIEWPORT_FRACTION,
            reveal_duration_sec: STAGE_REVEAL_DURATION_SEC,
            reveal_stagger_sec: STAGE_REVEAL_STAGGER_SEC,
            reveal_offset_y: STAGE_REVEAL_OFFSET_Y,
            reveal_scale_from: STAGE_REVEAL_SCALE_FROM,
            reveal_ease: Ease::Power2Out,
            scrub_catch_up_sec: SCRUB_CATCH_UP_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageWindows {
    pub reveal: ProgressWindow,
    pub active: ProgressWindow,
}

/// Progress at which panel `index`'s left edge sits at each configured
/// viewport fraction. With nothing to scroll every window collapses to 0,
/// so everything counts as already passed.
pub fn stage_windows(
    track: &StageTrack,
    section: &PinnedSection,
    index: usize,
    config: &StageConfig,
) -> StageWindows {
    let distance = section.total_scrollable_distance();
    let left = track.panel_left(index);
    let viewport = section.viewport_width;
    let at = |fraction: f32| {
        if distance > 0.0 {
            (left - fraction * viewport) / distance
        } else {
            0.0
        }
    };
    StageWindows {
        reveal: ProgressWindow::new(at(config.enter_fraction), at(config.exit_fraction)),
        active: ProgressWindow::new(
            at(config.active_enter_fraction),
            at(config.active_exit_fraction),
        ),
    }
}

#[derive(Clone, Debug)]
pub struct StageFrame {
    pub id: StageId,
    pub phase: RevealState,
    /// Icon, text and animation parts, in that order.
    pub parts: [ElementStyle; STAGE_PART_COUNT],
    pub embellishment: SmallVec<[ElementStyle; 3]>,
}

#[derive(Clone, Debug)]
pub struct SectionFrame {
    /// Displayed (scrubbed) progress.
    pub progress: f32,
    pub translate_x: f32,
    pub pinned: bool,
    pub centered_index: usize,
    pub stages: Vec<StageFrame>,
    /// Reveal state changes since the previous frame, in order.
    pub transitions: SmallVec<[(StageId, RevealState); 4]>,
}

#[derive(Clone, Debug)]
struct EmbellishmentRun {
    kind: Embellishment,
    trigger: ScrollTrigger,
    tween: Tween,
}

#[derive(Clone, Debug)]
struct StageRun {
    def: StageDef,
    windows: StageWindows,
    trigger: ScrollTrigger,
    reveal: Tween,
    phase: RevealState,
    embellishment: Option<EmbellishmentRun>,
}

impl StageRun {
    fn sync_phase(&mut self, log: &mut SmallVec<[(StageId, RevealState); 4]>) {
        let target = RevealState::of(&self.reveal);
        for step in self.phase.path_to(target) {
            log.push((self.def.id, step));
            self.phase = step;
        }
    }

    fn frame(&self, config: &StageConfig) -> StageFrame {
        let hidden = ElementStyle {
            opacity: 0.0,
            translate: Vec2::new(0.0, config.reveal_offset_y),
            scale: config.reveal_scale_from,
            ..ElementStyle::IDENTITY
        };
        let t = self.reveal.time_sec();
        let parts = std::array::from_fn(|i| {
            let local =
                staggered_progress(t, i, config.reveal_stagger_sec, config.reveal_duration_sec);
            ElementStyle::lerp(&hidden, &ElementStyle::IDENTITY, config.reveal_ease.apply(local))
        });
        let embellishment = self
            .embellishment
            .as_ref()
            .map(|e| e.kind.styles(&e.tween))
            .unwrap_or_default();
        StageFrame {
            id: self.def.id,
            phase: self.phase,
            parts,
            embellishment,
        }
    }
}

/// Owns the scroll session, the track and every stage's timelines for one
/// mounted process section.
pub struct StageController {
    config: StageConfig,
    track: StageTrack,
    session: ScrollSession,
    scrub: Scrub,
    displayed: f32,
    stages: Vec<StageRun>,
    by_id: FnvHashMap<&'static str, usize>,
    transitions: SmallVec<[(StageId, RevealState); 4]>,
}

impl StageController {
    /// Panels are one viewport wide. `scroll_offset` is the page position at
    /// mount, which the displayed progress starts from.
    pub fn new(
        defs: &[StageDef],
        config: StageConfig,
        start: f32,
        viewport_width: f32,
        scroll_offset: f32,
    ) -> Self {
        let track = StageTrack::new(defs.len(), viewport_width);
        let section = track.section(start, viewport_width);
        let reveal_len = staggered_duration(
            STAGE_PART_COUNT,
            config.reveal_stagger_sec,
            config.reveal_duration_sec,
        );
        let mut by_id = FnvHashMap::default();
        let stages = defs
            .iter()
            .enumerate()
            .map(|(i, def)| {
                by_id.entry(def.id.0).or_insert(i);
                let windows = stage_windows(&track, &section, i, &config);
                StageRun {
                    def: *def,
                    windows,
                    trigger: ScrollTrigger::new(windows.reveal),
                    reveal: Tween::new(reveal_len),
                    phase: RevealState::Hidden,
                    embellishment: def.embellishment.map(|kind| EmbellishmentRun {
                        kind,
                        trigger: ScrollTrigger::new(windows.active),
                        tween: kind.tween(),
                    }),
                }
            })
            .collect();
        let mut controller = Self {
            config,
            track,
            session: ScrollSession::new(section),
            scrub: Scrub::new(config.scrub_catch_up_sec),
            displayed: 0.0,
            stages,
            by_id,
            transitions: SmallVec::new(),
        };
        controller.session.on_scroll(scroll_offset);
        controller.displayed = controller
            .scrub
            .follow(controller.session.progress(), Duration::ZERO);
        controller.evaluate();
        controller
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn stage_id(&self, index: usize) -> Option<StageId> {
        self.stages.get(index).map(|s| s.def.id)
    }

    pub fn track(&self) -> &StageTrack {
        &self.track
    }

    pub fn section(&self) -> &PinnedSection {
        self.session.section()
    }

    pub fn progress(&self) -> f32 {
        self.session.progress()
    }

    pub fn displayed_progress(&self) -> f32 {
        self.displayed
    }

    pub fn windows(&self, index: usize) -> Option<StageWindows> {
        self.stages.get(index).map(|s| s.windows)
    }

    pub fn phase(&self, index: usize) -> Option<RevealState> {
        self.stages.get(index).map(|s| s.phase)
    }

    pub fn on_scroll(&mut self, offset: f32) -> f32 {
        self.session.on_scroll(offset)
    }

    /// Like [`Self::on_scroll`], but first re-anchors on the section's
    /// current document top when content above it has reflowed. Returns
    /// whether a relayout happened.
    pub fn on_scroll_from(&mut self, start: f32, offset: f32) -> bool {
        if !self.session.section().has_moved(start) {
            self.on_scroll(offset);
            return false;
        }
        let viewport_width = self.session.section().viewport_width;
        self.relayout(start, viewport_width, offset);
        true
    }

    /// Recompute the track, scroll budget and every window for a new
    /// viewport, then re-run the triggers against `scroll_offset`.
    pub fn relayout(&mut self, start: f32, viewport_width: f32, scroll_offset: f32) {
        self.track.set_panel_width(viewport_width);
        self.session
            .on_resize(start, self.track.track_width(), viewport_width);
        self.session.on_scroll(scroll_offset);
        let section = *self.session.section();
        for (i, stage) in self.stages.iter_mut().enumerate() {
            stage.windows = stage_windows(&self.track, &section, i, &self.config);
            stage.trigger.set_window(stage.windows.reveal);
            if let Some(e) = stage.embellishment.as_mut() {
                e.trigger.set_window(stage.windows.active);
            }
        }
        // Displayed progress restarts from the new geometry.
        self.scrub = Scrub::new(self.config.scrub_catch_up_sec);
        self.displayed = self.scrub.follow(self.session.progress(), Duration::ZERO);
        self.evaluate();
        log::debug!(
            "[process] relayout viewport={:.0} distance={:.0} progress={:.3}",
            viewport_width,
            section.total_scrollable_distance(),
            self.displayed
        );
    }

    fn evaluate(&mut self) {
        let progress = self.displayed;
        for stage in &mut self.stages {
            for event in stage.trigger.update(progress) {
                ToggleActions::PLAY_REVERSE
                    .action_for(event)
                    .apply(&mut stage.reveal);
                stage.sync_phase(&mut self.transitions);
            }
            if let Some(e) = stage.embellishment.as_mut() {
                for event in e.trigger.update(progress) {
                    e.kind.toggle_actions().action_for(event).apply(&mut e.tween);
                }
            }
        }
    }

    pub fn frame(&mut self, dt: Duration) -> SectionFrame {
        self.displayed = self.scrub.follow(self.session.progress(), dt);
        self.evaluate();
        for stage in &mut self.stages {
            stage.reveal.advance(dt);
            stage.sync_phase(&mut self.transitions);
            if let Some(e) = stage.embellishment.as_mut() {
                e.tween.advance(dt);
            }
        }
        let section = self.session.section();
        let distance = section.total_scrollable_distance();
        SectionFrame {
            progress: self.displayed,
            translate_x: self.track.translation(self.displayed, distance),
            pinned: section.is_pinned(self.session.offset()),
            centered_index: self.track.centered_index(self.displayed, distance),
            stages: self.stages.iter().map(|s| s.frame(&self.config)).collect(),
            transitions: std::mem::take(&mut self.transitions),
        }
    }
}
