//! Field state
//!
//! One `FieldState` exists per mounted background.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::{Particle, populate};
use crate::platform::Viewport;
use crate::settings::FieldConfig;

/// Complete animated field state
#[derive(Debug, Clone)]
pub struct FieldState {
    pub config: FieldConfig,
    pub viewport: Viewport,
    /// Sweep direction in radians, kept in [0, 2π)
    pub angle: f64,
    /// Highlight band half-width in logical pixels (recomputed on resize)
    pub band_width: f64,
    /// Live particle set (replaced whole on resize)
    pub particles: Vec<Particle>,
    /// Incremented every time the particle set is replaced
    pub generation: u64,
    rng: Pcg32,
}

impl FieldState {
    /// Create a field sized to `viewport`
    pub fn new(config: FieldConfig, viewport: Viewport, seed: u64) -> Self {
        let config = config.sanitized();
        let mut state = Self {
            band_width: config.band_width(viewport.width, viewport.height),
            config,
            viewport,
            angle: 0.0,
            particles: Vec::new(),
            generation: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.repopulate();
        state
    }

    /// Adopt a new viewport: recompute the band width and regenerate particles
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.band_width = self.config.band_width(viewport.width, viewport.height);
        self.repopulate();
        log::debug!(
            "Field resized to {}x{} @{}x: {} particles, band {:.1}px",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            self.particles.len(),
            self.band_width
        );
    }

    fn repopulate(&mut self) {
        // Build the new set fully before swapping it in
        let particles = populate(&self.config, &self.viewport, &mut self.rng);
        self.particles = particles;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::particle_count;

    #[test]
    fn test_new_populates() {
        let viewport = Viewport::new(1920.0, 1080.0, 1.0);
        let state = FieldState::new(FieldConfig::default(), viewport, 1);
        assert_eq!(state.particles.len(), 94);
        assert_eq!(state.generation, 1);
        assert_eq!(state.angle, 0.0);
        assert!((state.band_width - 194.4).abs() < 1e-9);
    }

    #[test]
    fn test_resize_replaces_set() {
        let mut state = FieldState::new(FieldConfig::default(), Viewport::new(800.0, 600.0, 1.0), 3);
        let before = state.particles.clone();

        let big = Viewport::new(2560.0, 1440.0, 2.0);
        state.resize(big);
        assert_eq!(state.generation, 2);
        assert_eq!(state.viewport, big);
        assert_eq!(state.particles.len(), particle_count(&state.config, &big));
        assert_ne!(state.particles, before);
        assert_eq!(state.band_width, 220.0);
    }

    #[test]
    fn test_resize_same_size_same_count() {
        let viewport = Viewport::new(1366.0, 768.0, 1.0);
        let mut state = FieldState::new(FieldConfig::default(), viewport, 11);
        let first = state.particles.clone();
        state.resize(viewport);
        assert_eq!(state.particles.len(), first.len());
        // Positions are redrawn
        assert_ne!(state.particles, first);
    }

    #[test]
    fn test_resize_keeps_angle() {
        let mut state = FieldState::new(FieldConfig::default(), Viewport::new(800.0, 600.0, 1.0), 5);
        state.angle = 1.25;
        state.resize(Viewport::new(1024.0, 768.0, 1.0));
        assert_eq!(state.angle, 1.25);
    }
}
