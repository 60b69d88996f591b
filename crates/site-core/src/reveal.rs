//! Viewport reveals for ordinary (unpinned) page content. With `once` set
//! (the default) the first reveal is final.

use crate::constants::*;
use crate::ease::Ease;
use crate::error::{parse_flag, parse_non_negative, ParseError};
use crate::spring::{Spring, SpringConfig};
use crate::style::ElementStyle;
use crate::trigger::ToggleAction;
use crate::tween::{staggered_duration, staggered_progress, Playback, Tween};
use glam::Vec2;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    /// Rises from below.
    #[default]
    Up,
    Down,
    /// Slides in from the right, moving left.
    Left,
    Right,
    /// Opacity only.
    Fade,
}

impl RevealDirection {
    /// Starting offset for a reveal that travels `distance` pixels.
    pub fn start_offset(self, distance: f32) -> Vec2 {
        match self {
            RevealDirection::Up => Vec2::new(0.0, distance),
            RevealDirection::Down => Vec2::new(0.0, -distance),
            RevealDirection::Left => Vec2::new(distance, 0.0),
            RevealDirection::Right => Vec2::new(-distance, 0.0),
            RevealDirection::Fade => Vec2::ZERO,
        }
    }
}

impl FromStr for RevealDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "up" => Ok(RevealDirection::Up),
            "down" => Ok(RevealDirection::Down),
            "left" => Ok(RevealDirection::Left),
            "right" => Ok(RevealDirection::Right),
            "fade" => Ok(RevealDirection::Fade),
            other => Err(ParseError::unknown("reveal direction", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub direction: RevealDirection,
    pub distance: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub once: bool,
    /// Intersection ratio that counts as visible.
    pub threshold: f32,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            distance: REVEAL_DISTANCE,
            duration_sec: REVEAL_DURATION_SEC,
            delay_sec: 0.0,
            once: true,
            threshold: REVEAL_THRESHOLD,
            ease: Ease::EaseOut,
        }
    }
}

impl RevealConfig {
    pub fn apply_attr(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "data-reveal" => self.direction = value.parse()?,
            "data-reveal-distance" => self.distance = parse_non_negative("reveal distance", value)?,
            "data-reveal-duration" => {
                self.duration_sec = parse_non_negative("reveal duration", value)?
            }
            "data-reveal-delay" => self.delay_sec = parse_non_negative("reveal delay", value)?,
            "data-reveal-once" => self.once = parse_flag("reveal once", value)?,
            "data-reveal-threshold" => {
                self.threshold = parse_non_negative("reveal threshold", value)?.min(1.0)
            }
            "data-reveal-ease" => self.ease = value.parse()?,
            other => return Err(ParseError::unknown("reveal attribute", other)),
        }
        Ok(())
    }

    pub fn hidden_style(&self) -> ElementStyle {
        ElementStyle {
            opacity: 0.0,
            translate: self.direction.start_offset(self.distance),
            ..ElementStyle::IDENTITY
        }
    }
}

/// Intersection bookkeeping shared by every reveal flavour.
#[derive(Clone, Copy, Debug)]
struct Visibility {
    threshold: f32,
    once: bool,
    has_entered: bool,
    intersecting: bool,
}

impl Visibility {
    fn new(threshold: f32, once: bool) -> Self {
        Self {
            threshold,
            once,
            has_entered: false,
            intersecting: false,
        }
    }

    fn update(&mut self, ratio: f32) -> ToggleAction {
        let visible = ratio > 0.0 && ratio >= self.threshold;
        if visible == self.intersecting {
            return ToggleAction::None;
        }
        self.intersecting = visible;
        if visible {
            if self.once && self.has_entered {
                return ToggleAction::None;
            }
            self.has_entered = true;
            ToggleAction::Play
        } else if self.once {
            ToggleAction::None
        } else {
            ToggleAction::Reverse
        }
    }

    fn is_done(&self) -> bool {
        self.once && self.has_entered
    }
}

/// What a wrapped element has seen so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTriggerState {
    pub has_entered: bool,
    pub direction: RevealDirection,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct RevealTrigger {
    config: RevealConfig,
    visibility: Visibility,
    tween: Tween,
}

impl RevealTrigger {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visibility: Visibility::new(config.threshold, config.once),
            tween: Tween::new(config.duration_sec).with_delay(config.delay_sec),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Feed an intersection ratio; returns the action taken.
    pub fn on_intersection(&mut self, ratio: f32) -> ToggleAction {
        let action = self.visibility.update(ratio);
        action.apply(&mut self.tween);
        action
    }

    /// A one-shot reveal that has fired needs no further observation.
    pub fn is_done_observing(&self) -> bool {
        self.visibility.is_done()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.playback() == Playback::Playing
    }

    pub fn state(&self) -> RevealTriggerState {
        RevealTriggerState {
            has_entered: self.visibility.has_entered,
            direction: self.config.direction,
            distance: self.config.distance,
        }
    }

    pub fn frame(&mut self, dt: Duration) -> ElementStyle {
        self.tween.advance(dt);
        ElementStyle::lerp(
            &self.config.hidden_style(),
            &ElementStyle::IDENTITY,
            self.config.ease.apply(self.tween.progress()),
        )
    }
}

/// Start delay of child `k` in a staggered container.
pub fn child_delay(base_delay_sec: f32, stagger_sec: f32, k: usize) -> f32 {
    base_delay_sec + k as f32 * stagger_sec
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    pub base_delay_sec: f32,
    pub stagger_sec: f32,
    pub item_offset_y: f32,
    pub item_duration_sec: f32,
    pub once: bool,
    pub threshold: f32,
    pub ease: Ease,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            base_delay_sec: 0.0,
            stagger_sec: STAGGER_DELAY_SEC,
            item_offset_y: STAGGER_ITEM_OFFSET_Y,
            item_duration_sec: STAGGER_ITEM_DURATION_SEC,
            once: true,
            threshold: REVEAL_THRESHOLD,
            ease: Ease::EaseOut,
        }
    }
}

impl StaggerConfig {
    pub fn apply_attr(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "data-stagger" => {
                if !value.trim().is_empty() {
                    self.stagger_sec = parse_non_negative("stagger", value)?;
                }
            }
            "data-reveal-delay" => {
                self.base_delay_sec = parse_non_negative("stagger delay", value)?
            }
            "data-reveal-once" => self.once = parse_flag("stagger once", value)?,
            other => return Err(ParseError::unknown("stagger attribute", other)),
        }
        Ok(())
    }
}

/// Children share one clock; child `k` starts `k * stagger` after the first.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    config: StaggerConfig,
    count: usize,
    visibility: Visibility,
    clock: Tween,
}

impl StaggerGroup {
    pub fn new(count: usize, config: StaggerConfig) -> Self {
        Self {
            config,
            count,
            visibility: Visibility::new(config.threshold, config.once),
            clock: Tween::new(staggered_duration(
                count,
                config.stagger_sec,
                config.item_duration_sec,
            ))
            .with_delay(config.base_delay_sec),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn child_delay(&self, k: usize) -> f32 {
        child_delay(self.config.base_delay_sec, self.config.stagger_sec, k)
    }

    pub fn on_intersection(&mut self, ratio: f32) -> ToggleAction {
        let action = self.visibility.update(ratio);
        action.apply(&mut self.clock);
        action
    }

    pub fn is_done_observing(&self) -> bool {
        self.visibility.is_done()
    }

    pub fn is_animating(&self) -> bool {
        self.clock.playback() == Playback::Playing
    }

    pub fn frame(&mut self, dt: Duration) -> Vec<ElementStyle> {
        self.clock.advance(dt);
        let hidden = ElementStyle {
            opacity: 0.0,
            translate: Vec2::new(0.0, self.config.item_offset_y),
            ..ElementStyle::IDENTITY
        };
        let t = self.clock.time_sec();
        (0..self.count)
            .map(|k| {
                let local = staggered_progress(
                    t,
                    k,
                    self.config.stagger_sec,
                    self.config.item_duration_sec,
                );
                ElementStyle::lerp(&hidden, &ElementStyle::IDENTITY, self.config.ease.apply(local))
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterConfig {
    pub base_delay_sec: f32,
    pub stagger_sec: f32,
    pub offset_y: f32,
    pub rotate_x_deg: f32,
    pub scale_from: f32,
    pub spring: SpringConfig,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            base_delay_sec: 0.0,
            stagger_sec: LETTER_STAGGER_SEC,
            offset_y: LETTER_OFFSET_Y,
            rotate_x_deg: LETTER_ROTATE_X_DEG,
            scale_from: LETTER_SCALE_FROM,
            spring: SpringConfig::from_coefficients(LETTER_SPRING_STIFFNESS, LETTER_SPRING_DAMPING),
        }
    }
}

/// One character of a cascading headline. Whitespace keeps its place in the
/// text but is never animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// Position among the animated letters.
    pub slot: Option<usize>,
}

pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    let mut next = 0;
    text.chars()
        .map(|ch| {
            let slot = if ch.is_whitespace() {
                None
            } else {
                next += 1;
                Some(next - 1)
            };
            Glyph { ch, slot }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct LetterCascade {
    config: LetterConfig,
    glyphs: Vec<Glyph>,
    springs: Vec<Spring>,
    elapsed: f32,
    started: bool,
}

impl LetterCascade {
    pub fn new(text: &str, config: LetterConfig) -> Self {
        let glyphs = split_glyphs(text);
        let letters = glyphs.iter().filter(|g| g.slot.is_some()).count();
        Self {
            config,
            glyphs,
            springs: vec![Spring::new(0.0, config.spring); letters],
            elapsed: 0.0,
            started: false,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn letter_count(&self) -> usize {
        self.springs.len()
    }

    pub fn letter_delay(&self, slot: usize) -> f32 {
        child_delay(self.config.base_delay_sec, self.config.stagger_sec, slot)
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_settled(&self) -> bool {
        self.started
            && self
                .springs
                .iter()
                .all(|s| s.is_at_rest() && s.position() == 1.0)
    }

    /// One style per animated letter, in slot order.
    pub fn frame(&mut self, dt: Duration) -> Vec<ElementStyle> {
        if self.started {
            self.elapsed += dt.as_secs_f32();
        }
        let hidden = ElementStyle {
            opacity: 0.0,
            translate: Vec2::new(0.0, self.config.offset_y),
            scale: self.config.scale_from,
            rotate_x_deg: self.config.rotate_x_deg,
            ..ElementStyle::IDENTITY
        };
        let started = self.started;
        let elapsed = self.elapsed;
        let base = self.config.base_delay_sec;
        let stagger = self.config.stagger_sec;
        self.springs
            .iter_mut()
            .enumerate()
            .map(|(slot, spring)| {
                if started && elapsed >= child_delay(base, stagger, slot) {
                    spring.set_target(1.0);
                }
                spring.advance(dt);
                ElementStyle::lerp(&hidden, &ElementStyle::IDENTITY, spring.position())
            })
            .collect()
    }
}
