//! Layered background composition
//!
//! Draw order (later layers composite over earlier ones):
//! 1. clear
//! 2. vertical wash
//! 3. dim base stars
//! 4. additive sweep band
//! 5. glow on particles near the sweep line
//! 6. radial vignette

use glam::DVec2;

use super::paint::{CompositeMode, Glow, Gradient, GradientShape, Paint, Rgba, palette};
use super::surface::Surface;
use crate::consts::HIGHLIGHT_THRESHOLD;
use crate::field::{FieldState, Particle};

/// What a frame drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub particles: usize,
    /// Particles that received a glow draw
    pub highlighted: usize,
}

/// Unit direction of the sweep line
#[inline]
pub fn sweep_direction(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Highlight strength for a particle at `offset` from the viewport center.
///
/// Combines closeness to the sweep line (within `band_width`) with closeness
/// to the center (over `max_dim`).
pub fn highlight_intensity(offset: DVec2, dir: DVec2, band_width: f64, max_dim: f64) -> f64 {
    let perp = dir.perp_dot(offset).abs();
    let dist_center = offset.length();

    let in_band = (1.0 - perp / band_width).max(0.0);
    let near_center = (1.0 - dist_center / max_dim).max(0.0);

    in_band.powf(1.8) * (0.7 + 0.3 * near_center)
}

/// Glow draw for a highlighted particle
fn highlight_draw(p: &Particle, intensity: f64) -> (f64, Rgba, Glow) {
    let alpha = (p.base_alpha * 6.0 * intensity).min(0.9);
    let color = Rgba::new(
        (110.0 + 145.0 * intensity).floor() as u8,
        (140.0 + 90.0 * intensity).floor() as u8,
        255,
        alpha,
    );
    let glow = Glow {
        blur: 8.0 + 18.0 * intensity,
        color: palette::GLOW.with_alpha(alpha.min(palette::GLOW_MAX_ALPHA)),
    };
    (p.radius + 1.6 * intensity * 4.0, color, glow)
}

/// Render one frame of the field onto `surface`.
///
/// A zero-area viewport draws nothing.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &mut S) -> RenderStats {
    let viewport = &state.viewport;
    if viewport.is_empty() {
        return RenderStats::default();
    }

    let (w, h) = (viewport.width, viewport.height);
    let full = DVec2::new(w, h);
    let center = viewport.center();

    // 1. Clear
    surface.clear(w, h);

    // 2. Background wash
    let wash = Paint::Gradient(Gradient {
        shape: GradientShape::Linear {
            from: DVec2::ZERO,
            to: DVec2::new(0.0, h),
        },
        stops: &palette::WASH,
    });
    surface.fill_rect(DVec2::ZERO, full, &wash);

    // 3. Dim base stars
    for p in &state.particles {
        surface.fill_circle(p.pos, p.radius, palette::STAR.with_alpha(p.base_alpha), None);
    }

    // 4. Sweep band, spanning the viewport extent either side of center
    let dir = sweep_direction(state.angle);
    let reach = DVec2::new(dir.x * w, dir.y * h);
    let sweep = Paint::Gradient(Gradient {
        shape: GradientShape::Linear {
            from: center - reach,
            to: center + reach,
        },
        stops: &palette::SWEEP,
    });
    surface.save();
    surface.set_composite(CompositeMode::Lighter);
    surface.fill_rect(DVec2::ZERO, full, &sweep);
    surface.restore();

    // 5. Highlight particles near the sweep line
    let max_dim = viewport.max_dim();
    let mut highlighted = 0;
    for p in &state.particles {
        let intensity = highlight_intensity(p.pos - center, dir, state.band_width, max_dim);
        if intensity > HIGHLIGHT_THRESHOLD {
            let (radius, color, glow) = highlight_draw(p, intensity);
            surface.fill_circle(p.pos, radius, color, Some(glow));
            highlighted += 1;
        }
    }

    // 6. Vignette
    let vignette = Paint::Gradient(Gradient {
        shape: GradientShape::Radial {
            center,
            inner_radius: viewport.min_dim() * 0.05,
            outer_radius: max_dim,
        },
        stops: &palette::VIGNETTE,
    });
    surface.fill_rect(DVec2::ZERO, full, &vignette);

    RenderStats {
        particles: state.particles.len(),
        highlighted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_intensity_on_line_at_center() {
        let dir = sweep_direction(0.0);
        let i = highlight_intensity(DVec2::ZERO, dir, 100.0, 800.0);
        assert!((i - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_outside_band() {
        let dir = sweep_direction(0.0);
        // Perpendicular to a horizontal line is vertical distance
        assert_eq!(highlight_intensity(DVec2::new(0.0, 150.0), dir, 100.0, 800.0), 0.0);
        assert!(highlight_intensity(DVec2::new(0.0, 50.0), dir, 100.0, 800.0) > 0.0);
    }

    #[test]
    fn test_intensity_far_along_line() {
        // On the line but beyond max_dim: only the 0.7 floor remains
        let dir = sweep_direction(FRAC_PI_2);
        let i = highlight_intensity(DVec2::new(0.0, 1000.0), dir, 100.0, 800.0);
        assert!((i - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_highlight_draw_color_ramp() {
        let p = Particle {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: 1.0,
            base_alpha: 0.2,
            drift: 0.0,
        };
        let (radius, color, glow) = highlight_draw(&p, 1.0);
        assert!((radius - 7.4).abs() < 1e-12);
        assert_eq!((color.r, color.g, color.b), (255, 230, 255));
        assert!((color.a - 0.9).abs() < 1e-12);
        assert!((glow.blur - 26.0).abs() < 1e-12);
        assert!((glow.color.a - 0.85).abs() < 1e-12);

        let (_, dim, glow) = highlight_draw(&p, 0.5);
        assert_eq!((dim.r, dim.g), (182, 185));
        assert!((dim.a - 0.6).abs() < 1e-12);
        assert!((glow.color.a - 0.6).abs() < 1e-12);
    }
}
