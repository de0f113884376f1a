//! Field configuration
//!
//! Every tunable has a default; a partial JSON override can be stored in
//! LocalStorage under `starfield_config`.

use serde::{Deserialize, Serialize};

/// Half-open sampling range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Animated field tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // === Population ===
    /// Viewport area (px²) per unit of density
    pub particle_density_divisor: f64,
    /// Upper bound on density
    pub density_cap: u32,
    /// Base count the density is scaled against
    pub base_particle_count: u32,
    /// Lower bound on particle count
    pub min_particle_count: u32,

    // === Particle ranges ===
    pub radius: Span,
    pub opacity: Span,
    pub drift: Span,
    /// Per-axis velocity range
    pub velocity: Span,

    // === Motion ===
    /// Sweep rotation in radians per nominal 60 Hz frame
    pub angular_speed: f64,
    /// Distance past the edges before a particle wraps (logical px)
    pub wrap_margin: f64,
    /// Elapsed time clamp for physics (ms)
    pub max_frame_delta_ms: f64,

    // === Highlight band ===
    /// Band half-width as a fraction of the smaller viewport dimension
    pub band_width_factor: f64,
    pub band_width_min: f64,
    pub band_width_max: f64,

    /// Fixed RNG seed (clock-seeded when absent)
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_density_divisor: 22000.0,
            density_cap: 260,
            base_particle_count: 90,
            min_particle_count: 40,

            radius: Span::new(0.6, 2.2),
            opacity: Span::new(0.08, 0.26),
            drift: Span::new(-0.1, 0.1),
            velocity: Span::new(-0.04, 0.04),

            angular_speed: 0.0065,
            wrap_margin: 20.0,
            max_frame_delta_ms: 40.0,

            band_width_factor: 0.18,
            band_width_min: 80.0,
            band_width_max: 220.0,

            seed: None,
        }
    }
}

impl FieldConfig {
    /// Highlight band half-width for a viewport (unrounded)
    pub fn band_width(&self, width: f64, height: f64) -> f64 {
        (width.min(height) * self.band_width_factor).clamp(self.band_width_min, self.band_width_max)
    }

    /// Repair values that would break population or physics.
    /// Each repaired field falls back to its default.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.particle_density_divisor.is_finite() && self.particle_density_divisor > 0.0) {
            log::warn!("Invalid particle_density_divisor {}, using default", self.particle_density_divisor);
            self.particle_density_divisor = defaults.particle_density_divisor;
        }
        if self.base_particle_count == 0 {
            log::warn!("base_particle_count must be positive, using default");
            self.base_particle_count = defaults.base_particle_count;
        }

        for (name, span, fallback) in [
            ("radius", &mut self.radius, defaults.radius),
            ("opacity", &mut self.opacity, defaults.opacity),
            ("drift", &mut self.drift, defaults.drift),
            ("velocity", &mut self.velocity, defaults.velocity),
        ] {
            if !span.is_valid() {
                log::warn!("Invalid {} range {:?}, using default", name, span);
                *span = fallback;
            }
        }

        if !self.angular_speed.is_finite() {
            self.angular_speed = defaults.angular_speed;
        }
        if !(self.wrap_margin.is_finite() && self.wrap_margin >= 0.0) {
            self.wrap_margin = defaults.wrap_margin;
        }
        if !(self.max_frame_delta_ms.is_finite() && self.max_frame_delta_ms > 0.0) {
            self.max_frame_delta_ms = defaults.max_frame_delta_ms;
        }

        let band_ok = self.band_width_factor.is_finite()
            && self.band_width_min.is_finite()
            && self.band_width_max.is_finite()
            && self.band_width_min > 0.0
            && self.band_width_min <= self.band_width_max;
        if !band_ok {
            log::warn!("Invalid highlight band settings, using defaults");
            self.band_width_factor = defaults.band_width_factor;
            self.band_width_min = defaults.band_width_min;
            self.band_width_max = defaults.band_width_max;
        }

        self
    }

    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "starfield_config";

    /// Load config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded field config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring malformed field config: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_width_clamps() {
        let config = FieldConfig::default();
        assert_eq!(config.band_width(100.0, 100.0), 80.0);
        assert_eq!(config.band_width(4000.0, 3000.0), 220.0);
        assert!((config.band_width(1920.0, 1080.0) - 194.4).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_override() {
        let config = FieldConfig::from_json(r#"{"wrap_margin": 35.0, "seed": 7}"#).unwrap();
        assert_eq!(config.wrap_margin, 35.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.density_cap, 260);
        assert_eq!(config.radius, Span::new(0.6, 2.2));
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let config = FieldConfig {
            particle_density_divisor: 0.0,
            base_particle_count: 0,
            radius: Span::new(3.0, 1.0),
            max_frame_delta_ms: f64::NAN,
            band_width_min: 300.0,
            ..Default::default()
        }
        .sanitized();

        let defaults = FieldConfig::default();
        assert_eq!(config.particle_density_divisor, defaults.particle_density_divisor);
        assert_eq!(config.base_particle_count, defaults.base_particle_count);
        assert_eq!(config.radius, defaults.radius);
        assert_eq!(config.max_frame_delta_ms, defaults.max_frame_delta_ms);
        assert_eq!(config.band_width_min, defaults.band_width_min);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(FieldConfig::from_json("{not json").is_err());
    }
}
