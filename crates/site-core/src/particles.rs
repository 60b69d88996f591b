//! Seeded drifting dot field behind the hero and section headers.

use crate::constants::*;
use crate::ease::{lerp, map_range, there_and_back, Ease};
use crate::style::Rgb;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Home position as a percentage of the container, 0..100.
    pub x_pct: f32,
    pub y_pct: f32,
    /// Diameter in pixels.
    pub size: f32,
    pub opacity: f32,
    pub colour: Rgb,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl Particle {
    fn random(rng: &mut StdRng) -> Self {
        Self {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..5.0),
            opacity: rng.gen_range(0.2..0.8),
            colour: Rgb(PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())]),
            duration_sec: rng.gen_range(10.0..30.0),
            delay_sec: rng.gen_range(0.0..5.0),
        }
    }

    /// Position within the out-and-back loop at `time_sec`, 0 at rest and 1 at
    /// the far end.
    pub fn excursion(&self, time_sec: f32) -> f32 {
        let t = time_sec - self.delay_sec;
        if t <= 0.0 || self.duration_sec <= 0.0 {
            return 0.0;
        }
        let local = (t % self.duration_sec) / self.duration_sec;
        there_and_back(local, Ease::EaseInOut)
    }
}

/// One dot ready to draw, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDraw {
    pub centre: Vec2,
    pub radius: f32,
    pub colour: Rgb,
    pub alpha: f32,
}

/// Vertical shift of the whole field for a page scroll of `scroll_y`.
pub fn parallax_offset(scroll_y: f32) -> f32 {
    map_range(scroll_y, 0.0, PARALLAX_SCROLL_RANGE, 0.0, PARALLAX_SHIFT_Y)
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            particles: (0..count).map(|_| Particle::random(&mut rng)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn sample(&self, time_sec: f32, scroll_y: f32, size: Vec2) -> Vec<ParticleDraw> {
        let shift = parallax_offset(scroll_y);
        let drift = Vec2::from(PARTICLE_DRIFT);
        self.particles
            .iter()
            .map(|p| {
                let k = p.excursion(time_sec);
                let home = Vec2::new(p.x_pct, p.y_pct) * 0.01 * size;
                ParticleDraw {
                    centre: home + drift * k + Vec2::new(0.0, shift),
                    radius: 0.5 * p.size * lerp(1.0, PARTICLE_PEAK_SCALE, k),
                    colour: p.colour,
                    alpha: p.opacity * lerp(1.0, PARTICLE_FADE_TO, k),
                }
            })
            .collect()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::generate(PARTICLE_COUNT, PARTICLE_SEED)
    }
}
