//! Easing curves and range helpers.
//!
//! Every curve maps `[0, 1]` onto a value that starts at exactly 0 and ends at
//! exactly 1. `BackOut` and `BounceOut` may leave `[0, 1]` in between.

use crate::error::ParseError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    #[default]
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in-out.
    Power2InOut,
    /// Quartic ease-out.
    Power3Out,
    /// Overshooting ease-out; the parameter is the overshoot amount.
    BackOut(f32),
    BounceOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Ease::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984375
    }
}

impl FromStr for Ease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" | "none" => Ok(Ease::Linear),
            "easeOut" | "ease-out" => Ok(Ease::EaseOut),
            "easeInOut" | "ease-in-out" => Ok(Ease::EaseInOut),
            "power2.out" => Ok(Ease::Power2Out),
            "power2.inOut" => Ok(Ease::Power2InOut),
            "power3.out" => Ok(Ease::Power3Out),
            "back.out" => Ok(Ease::BackOut(1.7)),
            "bounce.out" => Ok(Ease::BounceOut),
            other => Err(ParseError::unknown("ease", other)),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `v` from `[in_a, in_b]` onto `[out_a, out_b]`, clamped to the output range.
pub fn map_range(v: f32, in_a: f32, in_b: f32, out_a: f32, out_b: f32) -> f32 {
    let span = in_b - in_a;
    if span.abs() < f32::EPSILON || v.is_nan() {
        return out_a;
    }
    let t = ((v - in_a) / span).clamp(0.0, 1.0);
    lerp(out_a, out_b, t)
}

/// Fraction of a `there-and-back` keyframe cycle (`a -> b -> a`) at `local` in `[0, 1]`.
pub fn there_and_back(local: f32, ease: Ease) -> f32 {
    let local = local.clamp(0.0, 1.0);
    if local <= 0.5 {
        ease.apply(local * 2.0)
    } else {
        1.0 - ease.apply(local * 2.0 - 1.0)
    }
}
