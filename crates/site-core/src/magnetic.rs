//! Magnetic buttons: a control that leans toward the pointer.
//!
//! The pointer's offset from the box centre is scaled down by a strength
//! that falls off linearly to zero at the capture radius. The result feeds a
//! critically damped spring, and the tilt is read off the spring, so tilt and
//! displacement always agree. Hover, press and glow are separate ramps and
//! never affect the offset.
//!
//! Nothing here handles activation. Click and keyboard behaviour belong to
//! the element itself.

use crate::constants::*;
use crate::ease::{lerp, map_range, Ease};
use crate::error::{parse_non_negative, ParseError};
use crate::spring::{Spring2, SpringConfig};
use crate::style::ElementStyle;
use crate::tween::Ramp;
use glam::Vec2;
use std::str::FromStr;
use std::time::Duration;

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.min + self.size;
        p.x >= self.min.x && p.y >= self.min.y && p.x <= max.x && p.y <= max.y
    }
}

/// Offset the control should move to for a pointer `pointer_offset` away
/// from its centre. Zero at the centre and anywhere at or beyond the radius.
pub fn target_offset(pointer_offset: Vec2, max_distance: f32, damping_factor: f32) -> Vec2 {
    let distance = pointer_offset.length();
    if !distance.is_finite() || max_distance <= 0.0 || distance >= max_distance {
        return Vec2::ZERO;
    }
    let strength = (1.0 - distance / max_distance).max(0.0) * damping_factor;
    pointer_offset * strength
}

/// `(rotate_x, rotate_y)` in degrees for a displacement. Moving down tips the
/// top edge away; moving right turns the face right.
pub fn tilt_for_offset(offset: Vec2, input_range: f32, max_deg: f32) -> (f32, f32) {
    let rotate_x = map_range(offset.y, -input_range, input_range, max_deg, -max_deg);
    let rotate_y = map_range(offset.x, -input_range, input_range, -max_deg, max_deg);
    (rotate_x, rotate_y)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MagneticVariant {
    #[default]
    Primary,
    Secondary,
}

impl MagneticVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            MagneticVariant::Primary => "primary",
            MagneticVariant::Secondary => "secondary",
        }
    }
}

impl FromStr for MagneticVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(MagneticVariant::Primary),
            "secondary" => Ok(MagneticVariant::Secondary),
            other => Err(ParseError::unknown("button variant", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(ButtonSize::Sm),
            "md" => Ok(ButtonSize::Md),
            "lg" => Ok(ButtonSize::Lg),
            other => Err(ParseError::unknown("button size", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub max_distance: f32,
    pub damping_factor: f32,
    pub spring: SpringConfig,
    pub tilt_input_range: f32,
    pub tilt_max_deg: f32,
    pub hover_scale: f32,
    pub hover_sec: f32,
    pub press_scale: f32,
    pub press_sec: f32,
    pub glow_sec: f32,
    pub glow_scale_from: f32,
    pub glow_scale_to: f32,
    pub variant: MagneticVariant,
    pub size: ButtonSize,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            max_distance: MAGNETIC_MAX_DISTANCE,
            damping_factor: MAGNETIC_DAMPING_FACTOR,
            spring: SpringConfig::critical(MAGNETIC_SPRING_STIFFNESS),
            tilt_input_range: TILT_INPUT_RANGE,
            tilt_max_deg: TILT_MAX_DEG,
            hover_scale: HOVER_SCALE,
            hover_sec: HOVER_SCALE_SEC,
            press_scale: PRESS_SCALE,
            press_sec: PRESS_SCALE_SEC,
            glow_sec: GLOW_FADE_SEC,
            glow_scale_from: GLOW_SCALE_FROM,
            glow_scale_to: GLOW_SCALE_TO,
            variant: MagneticVariant::default(),
            size: ButtonSize::default(),
        }
    }
}

impl MagneticConfig {
    /// Apply one `data-magnetic*` attribute. `data-magnetic` takes any mix of
    /// a variant and a size (`"secondary lg"`); an empty value keeps defaults.
    pub fn apply_attr(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "data-magnetic" => {
                for word in value.split_whitespace() {
                    if let Ok(variant) = word.parse::<MagneticVariant>() {
                        self.variant = variant;
                    } else {
                        self.size = word.parse()?;
                    }
                }
                Ok(())
            }
            "data-magnetic-radius" => {
                self.max_distance = parse_non_negative("magnetic radius", value)?;
                Ok(())
            }
            other => Err(ParseError::unknown("magnetic attribute", other)),
        }
    }
}

/// Snapshot of one button's pointer tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOffsetState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticFrame {
    pub button: ElementStyle,
    pub glow: ElementStyle,
}

#[derive(Clone, Debug)]
pub struct MagneticButton {
    config: MagneticConfig,
    spring: Spring2,
    raw: Vec2,
    hovered: bool,
    hover: Ramp,
    press: Ramp,
    glow: Ramp,
}

impl MagneticButton {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            spring: Spring2::new(Vec2::ZERO, config.spring),
            raw: Vec2::ZERO,
            hovered: false,
            hover: Ramp::new(config.hover_sec),
            press: Ramp::new(config.press_sec),
            glow: Ramp::new(config.glow_sec),
        }
    }

    pub fn config(&self) -> &MagneticConfig {
        &self.config
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn on_pointer_enter(&mut self) {
        self.set_hovered(true);
    }

    /// `pointer` and `rect` must share a coordinate space (client pixels).
    pub fn on_pointer_move(&mut self, pointer: Vec2, rect: Rect) {
        if !self.hovered {
            self.set_hovered(true);
        }
        self.raw = target_offset(
            pointer - rect.center(),
            self.config.max_distance,
            self.config.damping_factor,
        );
        self.spring.set_target(self.raw);
    }

    pub fn on_pointer_leave(&mut self) {
        self.set_hovered(false);
        self.press.set_on(false);
        self.raw = Vec2::ZERO;
        self.spring.set_target(Vec2::ZERO);
    }

    pub fn on_pointer_down(&mut self) {
        self.press.set_on(true);
    }

    pub fn on_pointer_up(&mut self) {
        self.press.set_on(false);
    }

    fn set_hovered(&mut self, on: bool) {
        self.hovered = on;
        self.hover.set_on(on);
        self.glow.set_on(on);
    }

    pub fn state(&self) -> PointerOffsetState {
        let smoothed = self.spring.position();
        let (tilt_x, tilt_y) =
            tilt_for_offset(smoothed, self.config.tilt_input_range, self.config.tilt_max_deg);
        PointerOffsetState {
            raw: self.raw,
            smoothed,
            tilt_x,
            tilt_y,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.spring.is_at_rest()
            && self.hover.is_settled()
            && self.press.is_settled()
            && self.glow.is_settled()
    }

    pub fn frame(&mut self, dt: Duration) -> MagneticFrame {
        self.spring.advance(dt);
        self.hover.advance(dt);
        self.press.advance(dt);
        self.glow.advance(dt);

        let state = self.state();
        let hover = Ease::EaseOut.apply(self.hover.value());
        let hovered_scale = lerp(1.0, self.config.hover_scale, hover);
        let scale = lerp(
            hovered_scale,
            self.config.press_scale,
            Ease::EaseOut.apply(self.press.value()),
        );
        let g = Ease::EaseOut.apply(self.glow.value());
        MagneticFrame {
            button: ElementStyle {
                translate: state.smoothed,
                scale,
                rotate_x_deg: state.tilt_x,
                rotate_y_deg: state.tilt_y,
                ..ElementStyle::IDENTITY
            },
            glow: ElementStyle {
                opacity: g,
                scale: lerp(self.config.glow_scale_from, self.config.glow_scale_to, g),
                ..ElementStyle::IDENTITY
            },
        }
    }
}
