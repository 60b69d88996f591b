//! Damped spring used to smooth pointer-driven offsets.
//!
//!   a = -k * (x - target) - c * v        (unit mass)
//!
//! with `c = 2 * zeta * sqrt(k)`. `zeta = 1` is critical damping: the
//! fastest approach to the target that never crosses it for a step input.
//!
//! Integration is semi-implicit Euler, sub-stepped so no single step exceeds
//! 4 ms. Once both the distance to target and the speed drop below the rest
//! thresholds the position snaps onto the target, so a spring heading home
//! ends at exactly its target instead of creeping toward it forever.

use glam::Vec2;
use std::time::Duration;

const MAX_STEP_SECS: f32 = 0.004;
const REST_DISTANCE: f32 = 0.01;
const REST_SPEED: f32 = 0.05;
const MIN_STIFFNESS: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping_ratio: f32,
}

impl SpringConfig {
    pub fn critical(stiffness: f32) -> Self {
        Self {
            stiffness: stiffness.max(MIN_STIFFNESS),
            damping_ratio: 1.0,
        }
    }

    /// Build from a raw damping coefficient, as animation libraries specify it.
    pub fn from_coefficients(stiffness: f32, damping: f32) -> Self {
        let stiffness = stiffness.max(MIN_STIFFNESS);
        Self {
            stiffness,
            damping_ratio: damping.max(0.0) / (2.0 * stiffness.sqrt()),
        }
    }

    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.max(MIN_STIFFNESS).sqrt()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            config,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() {
            return;
        }
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump straight to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    fn step(&mut self, dt: f32) {
        let accel = -self.config.stiffness * (self.position - self.target)
            - self.config.damping() * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            self.step(h);
            remaining -= h;
        }
        if (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

/// Two independent springs sharing one configuration.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(initial: Vec2, config: SpringConfig) -> Self {
        Self {
            x: Spring::new(initial.x, config),
            y: Spring::new(initial.y, config),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.x.advance(dt);
        self.y.advance(dt);
    }
}
