//! Particles and the population algorithm

use glam::DVec2;
use rand::Rng;

use crate::platform::Viewport;
use crate::settings::{FieldConfig, Span};

/// A point in the animated field
///
/// Only `pos` changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in logical pixels
    pub pos: DVec2,
    /// Velocity in logical pixels per nominal frame (before the 1.8 scale)
    pub vel: DVec2,
    pub radius: f64,
    /// Opacity of the dim base draw
    pub base_alpha: f64,
    /// Lateral sine-drift amplitude
    pub drift: f64,
}

/// Number of particles for a viewport
///
/// The count is scaled by `base / base`, evaluated in floating point exactly
/// as written. For some densities this rounds down to `density - 1`, which is
/// the intended visual density.
pub fn particle_count(config: &FieldConfig, viewport: &Viewport) -> usize {
    let base = config.base_particle_count as f64;
    let density = (config.density_cap as f64)
        .min((viewport.area() / config.particle_density_divisor).floor());
    let scaled = (base * (density / base)).floor();
    (config.min_particle_count as f64).max(scaled) as usize
}

fn sample<R: Rng>(rng: &mut R, span: Span) -> f64 {
    rng.random_range(span.min..span.max)
}

/// Generate a fresh particle set for a viewport
pub fn populate<R: Rng>(config: &FieldConfig, viewport: &Viewport, rng: &mut R) -> Vec<Particle> {
    let count = particle_count(config, viewport);
    let mut particles = Vec::with_capacity(count);

    for _ in 0..count {
        let pos = DVec2::new(
            rng.random::<f64>() * viewport.width,
            rng.random::<f64>() * viewport.height,
        );
        let radius = sample(rng, config.radius);
        let base_alpha = sample(rng, config.opacity);
        let drift = sample(rng, config.drift);
        let vel = DVec2::new(sample(rng, config.velocity), sample(rng, config.velocity));

        particles.push(Particle {
            pos,
            vel,
            radius,
            base_alpha,
            drift,
        });
    }

    particles
}
