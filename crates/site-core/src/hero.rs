//! Landing hero: a timed intro followed by a scroll-scrubbed exit.

use crate::constants::*;
use crate::ease::{lerp, map_range, Ease};
use crate::style::{ElementStyle, Rgb};
use crate::tween::{staggered_duration, staggered_progress, Scrub};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    pub intro_delay_sec: f32,
    pub letter_offset_y: f32,
    pub letter_duration_sec: f32,
    pub letter_stagger_sec: f32,
    pub letter_ease: Ease,
    pub subtitle_offset_y: f32,
    pub subtitle_duration_sec: f32,
    pub subtitle_overlap_sec: f32,
    pub buttons_offset_y: f32,
    pub buttons_duration_sec: f32,
    pub buttons_overlap_sec: f32,
    pub scrub_catch_up_sec: f32,
    pub background_from: Rgb,
    pub background_to: Rgb,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            intro_delay_sec: HERO_INTRO_DELAY_SEC,
            letter_offset_y: HERO_LETTER_OFFSET_Y,
            letter_duration_sec: HERO_LETTER_DURATION_SEC,
            letter_stagger_sec: LETTER_STAGGER_SEC,
            letter_ease: Ease::BackOut(BACK_OUT_OVERSHOOT),
            subtitle_offset_y: HERO_SUBTITLE_OFFSET_Y,
            subtitle_duration_sec: HERO_SUBTITLE_DURATION_SEC,
            subtitle_overlap_sec: HERO_SUBTITLE_OVERLAP_SEC,
            buttons_offset_y: HERO_BUTTONS_OFFSET_Y,
            buttons_duration_sec: HERO_BUTTONS_DURATION_SEC,
            buttons_overlap_sec: HERO_BUTTONS_OVERLAP_SEC,
            scrub_catch_up_sec: SCRUB_CATCH_UP_SEC,
            background_from: Rgb(HERO_BACKGROUND_FROM),
            background_to: Rgb(HERO_BACKGROUND_TO),
        }
    }
}

/// Start and end of one intro step on the intro clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    fn local(&self, t: f32) -> f32 {
        let len = self.end - self.start;
        if len <= 0.0 {
            return if t >= self.end { 1.0 } else { 0.0 };
        }
        ((t - self.start) / len).clamp(0.0, 1.0)
    }
}

/// Step timings for a title of `letter_count` letters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroSchedule {
    pub letters: Span,
    pub subtitle: Span,
    pub buttons: Span,
}

impl IntroSchedule {
    pub fn new(letter_count: usize, config: &HeroConfig) -> Self {
        let letters_start = config.intro_delay_sec;
        let letters_end = letters_start
            + staggered_duration(
                letter_count,
                config.letter_stagger_sec,
                config.letter_duration_sec,
            );
        let subtitle_start = (letters_end - config.subtitle_overlap_sec).max(letters_start);
        let subtitle_end = subtitle_start + config.subtitle_duration_sec;
        let buttons_start = (subtitle_end - config.buttons_overlap_sec).max(subtitle_start);
        Self {
            letters: Span {
                start: letters_start,
                end: letters_end,
            },
            subtitle: Span {
                start: subtitle_start,
                end: subtitle_end,
            },
            buttons: Span {
                start: buttons_start,
                end: buttons_start + config.buttons_duration_sec,
            },
        }
    }

    pub fn end(&self) -> f32 {
        self.letters.end.max(self.subtitle.end).max(self.buttons.end)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroIntroFrame {
    pub letters: Vec<ElementStyle>,
    pub subtitle: ElementStyle,
    pub buttons: ElementStyle,
}

#[derive(Clone, Debug)]
pub struct HeroIntro {
    config: HeroConfig,
    schedule: IntroSchedule,
    letter_count: usize,
    elapsed: f32,
}

impl HeroIntro {
    pub fn new(letter_count: usize, config: HeroConfig) -> Self {
        Self {
            config,
            schedule: IntroSchedule::new(letter_count, &config),
            letter_count,
            elapsed: 0.0,
        }
    }

    pub fn schedule(&self) -> &IntroSchedule {
        &self.schedule
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.schedule.end()
    }

    /// Jump to the end, e.g. when motion is unwanted.
    pub fn finish(&mut self) {
        self.elapsed = self.schedule.end();
    }

    pub fn frame(&mut self, dt: Duration) -> HeroIntroFrame {
        if !self.is_complete() {
            self.elapsed = (self.elapsed + dt.as_secs_f32()).min(self.schedule.end());
        }
        let c = &self.config;
        let t = self.elapsed;

        let letter_hidden = ElementStyle {
            opacity: 0.0,
            translate: Vec2::new(0.0, c.letter_offset_y),
            rotate_x_deg: LETTER_ROTATE_X_DEG,
            ..ElementStyle::IDENTITY
        };
        let letters = (0..self.letter_count)
            .map(|k| {
                let local = staggered_progress(
                    t - self.schedule.letters.start,
                    k,
                    c.letter_stagger_sec,
                    c.letter_duration_sec,
                );
                let k = c.letter_ease.apply(local);
                ElementStyle::lerp(&letter_hidden, &ElementStyle::IDENTITY, k)
            })
            .collect();

        let rise = |offset_y: f32, span: &Span| {
            let hidden = ElementStyle {
                opacity: 0.0,
                translate: Vec2::new(0.0, offset_y),
                ..ElementStyle::IDENTITY
            };
            let k = Ease::Power2Out.apply(span.local(t));
            ElementStyle::lerp(&hidden, &ElementStyle::IDENTITY, k)
        };

        HeroIntroFrame {
            letters,
            subtitle: rise(c.subtitle_offset_y, &self.schedule.subtitle),
            buttons: rise(c.buttons_offset_y, &self.schedule.buttons),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroScrollFrame {
    pub progress: f32,
    pub headline: ElementStyle,
    pub scene: ElementStyle,
    pub background: Rgb,
}

/// Scroll-linked hero exit, scrubbed over the hero's own height.
#[derive(Clone, Copy, Debug)]
pub struct HeroScroll {
    config: HeroConfig,
    top: f32,
    height: f32,
    scroll_y: f32,
    scrub: Scrub,
}

impl HeroScroll {
    pub fn new(top: f32, height: f32, config: HeroConfig) -> Self {
        Self {
            config,
            top,
            height,
            scroll_y: 0.0,
            scrub: Scrub::new(config.scrub_catch_up_sec),
        }
    }

    pub fn relayout(&mut self, top: f32, height: f32) {
        self.top = top;
        self.height = height;
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y;
        }
    }

    /// Live progress: 0 with the hero top at the viewport top, 1 once it
    /// has scrolled its full height out.
    pub fn progress(&self) -> f32 {
        if self.height <= 0.0 {
            return 1.0;
        }
        ((self.scroll_y - self.top) / self.height).clamp(0.0, 1.0)
    }

    pub fn frame(&mut self, dt: Duration) -> HeroScrollFrame {
        let p = self.scrub.follow(self.progress(), dt);
        let fade = map_range(p, 0.0, HERO_TEXT_FADE_END, 0.0, 1.0);
        HeroScrollFrame {
            progress: p,
            headline: ElementStyle {
                opacity: 1.0 - fade,
                translate: Vec2::new(0.0, HERO_TEXT_LIFT_Y * fade),
                scale: lerp(1.0, HERO_TEXT_SCALE_TO, fade),
                ..ElementStyle::IDENTITY
            },
            scene: ElementStyle {
                rotate_y_deg: HERO_SCENE_ROTATE_Y_DEG * p,
                ..ElementStyle::IDENTITY
            },
            background: self.config.background_from.lerp(self.config.background_to, p),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub intro: HeroIntroFrame,
    pub scroll: HeroScrollFrame,
}

#[derive(Clone, Debug)]
pub struct HeroBanner {
    pub intro: HeroIntro,
    pub scroll: HeroScroll,
}

impl HeroBanner {
    pub fn new(letter_count: usize, top: f32, height: f32, config: HeroConfig) -> Self {
        Self {
            intro: HeroIntro::new(letter_count, config),
            scroll: HeroScroll::new(top, height, config),
        }
    }

    pub fn frame(&mut self, dt: Duration) -> HeroFrame {
        HeroFrame {
            intro: self.intro.frame(dt),
            scroll: self.scroll.frame(dt),
        }
    }
}
