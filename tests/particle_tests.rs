// Host-side tests for the seeded particle background.

#![allow(dead_code)]
use glam::Vec2;
use site_core::constants::{PARTICLE_COUNT, PARTICLE_PALETTE};
use site_core::particles::{parallax_offset, ParticleField};
use site_core::Rgb;

#[test]
fn same_seed_same_field() {
    let a = ParticleField::generate(50, 7);
    let b = ParticleField::generate(50, 7);
    assert_eq!(a.particles(), b.particles());

    let c = ParticleField::generate(50, 8);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn default_field_has_the_configured_count() {
    assert_eq!(ParticleField::default().particles().len(), PARTICLE_COUNT);
    assert!(ParticleField::generate(0, 1).particles().is_empty());
}

#[test]
fn particles_stay_within_their_ranges() {
    let palette: Vec<Rgb> = PARTICLE_PALETTE.iter().map(|c| Rgb(*c)).collect();
    for p in ParticleField::generate(200, 42).particles() {
        assert!((0.0..100.0).contains(&p.x_pct));
        assert!((0.0..100.0).contains(&p.y_pct));
        assert!((1.0..5.0).contains(&p.size));
        assert!((0.2..0.8).contains(&p.opacity));
        assert!((10.0..30.0).contains(&p.duration_sec));
        assert!((0.0..5.0).contains(&p.delay_sec));
        assert!(palette.contains(&p.colour));
    }
}

#[test]
fn excursion_rests_before_delay_and_peaks_midway() {
    let field = ParticleField::generate(10, 3);
    for p in field.particles() {
        assert_eq!(p.excursion(p.delay_sec - 0.1), 0.0);
        assert_eq!(p.excursion(0.0), 0.0);
        let peak = p.excursion(p.delay_sec + p.duration_sec * 0.5);
        assert!((peak - 1.0).abs() < 1e-3);
    }
}

#[test]
fn parallax_shifts_up_and_clamps() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert!((parallax_offset(500.0) + 100.0).abs() < 1e-4);
    assert_eq!(parallax_offset(5000.0), -200.0);
    assert_eq!(parallax_offset(-50.0), 0.0);
}

#[test]
fn sample_at_rest_draws_particles_at_home() {
    let field = ParticleField::generate(20, 11);
    let size = Vec2::new(1200.0, 600.0);
    let draws = field.sample(0.0, 0.0, size);
    assert_eq!(draws.len(), 20);
    for (p, d) in field.particles().iter().zip(&draws) {
        assert!((d.centre.x - p.x_pct * 0.01 * size.x).abs() < 1e-3);
        assert!((d.centre.y - p.y_pct * 0.01 * size.y).abs() < 1e-3);
        assert!((d.radius - p.size * 0.5).abs() < 1e-5);
        assert!((d.alpha - p.opacity).abs() < 1e-5);
        assert_eq!(d.colour, p.colour);
    }
}

#[test]
fn scrolling_lifts_the_whole_field() {
    let field = ParticleField::generate(5, 11);
    let size = Vec2::new(800.0, 400.0);
    let still = field.sample(0.0, 0.0, size);
    let scrolled = field.sample(0.0, 1000.0, size);
    for (a, b) in still.iter().zip(&scrolled) {
        assert!((b.centre.y - a.centre.y + 200.0).abs() < 1e-3);
        assert!((b.centre.x - a.centre.x).abs() < 1e-4);
    }
}
