use crate::ease::lerp;
use crate::error::ParseError;
use glam::Vec2;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub opacity: f32,
    /// Pixels; +y is down.
    pub translate: Vec2,
    pub scale: f32,
    /// In-plane rotation, degrees.
    pub rotate_deg: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ElementStyle {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
        rotate_deg: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            opacity: lerp(from.opacity, to.opacity, t),
            translate: from.translate.lerp(to.translate, t),
            scale: lerp(from.scale, to.scale, t),
            rotate_deg: lerp(from.rotate_deg, to.rotate_deg, t),
            rotate_x_deg: lerp(from.rotate_x_deg, to.rotate_x_deg, t),
            rotate_y_deg: lerp(from.rotate_y_deg, to.rotate_y_deg, t),
        }
    }

    /// Opacity clamped for output; eased overshoot may push it past 1.
    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }

    pub fn to_css_transform(&self) -> String {
        let mut out = String::with_capacity(96);
        _ = write!(
            out,
            "translate3d({:.2}px, {:.2}px, 0px)",
            self.translate.x, self.translate.y
        );
        if self.rotate_x_deg != 0.0 {
            _ = write!(out, " rotateX({:.2}deg)", self.rotate_x_deg);
        }
        if self.rotate_y_deg != 0.0 {
            _ = write!(out, " rotateY({:.2}deg)", self.rotate_y_deg);
        }
        if self.rotate_deg != 0.0 {
            _ = write!(out, " rotate({:.2}deg)", self.rotate_deg);
        }
        _ = write!(out, " scale({:.4})", self.scale);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseError::Colour(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseError::Colour(hex.to_string()))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
        Self([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    pub fn to_css_alpha(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0[0],
            self.0[1],
            self.0[2],
            alpha.clamp(0.0, 1.0)
        )
    }
}
