//! 2D rendering module
//!
//! The background is composed against the `Surface` trait; the browser
//! implementation lives in `crate::web`.

pub mod layers;
pub mod paint;
pub mod recorder;
pub mod surface;

pub use layers::{RenderStats, highlight_intensity, render, sweep_direction};
pub use paint::{ColorStop, CompositeMode, Glow, Gradient, GradientShape, Paint, Rgba};
pub use recorder::{DrawCall, RecordingSurface};
pub use surface::Surface;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldState;
    use crate::platform::Viewport;
    use crate::settings::FieldConfig;
    use glam::DVec2;

    fn field(w: f64, h: f64) -> FieldState {
        FieldState::new(FieldConfig::default(), Viewport::new(w, h, 1.0), 2024)
    }

    #[test]
    fn test_layer_order() {
        let state = field(800.0, 600.0);
        let mut surface = RecordingSurface::new();
        let stats = render(&state, &mut surface);

        let n = state.particles.len();
        let calls = &surface.calls;
        assert_eq!(calls[0], DrawCall::Clear { width: 800.0, height: 600.0 });
        assert!(matches!(
            calls[1],
            DrawCall::FillRect { paint: Paint::Gradient(Gradient { shape: GradientShape::Linear { .. }, .. }), .. }
        ));
        for call in &calls[2..2 + n] {
            assert!(matches!(call, DrawCall::FillCircle { glow: None, .. }));
        }
        assert_eq!(calls[2 + n], DrawCall::Save);
        assert!(matches!(
            calls[3 + n],
            DrawCall::FillRect { composite: CompositeMode::Lighter, .. }
        ));
        assert_eq!(calls[4 + n], DrawCall::Restore);

        let glow_calls = &calls[5 + n..calls.len() - 1];
        assert_eq!(glow_calls.len(), stats.highlighted);
        assert!(glow_calls
            .iter()
            .all(|c| matches!(c, DrawCall::FillCircle { glow: Some(_), .. })));

        match calls.last() {
            Some(DrawCall::FillRect {
                paint: Paint::Gradient(Gradient { shape: GradientShape::Radial { center, inner_radius, outer_radius }, .. }),
                composite: CompositeMode::SourceOver,
                ..
            }) => {
                assert_eq!(*center, DVec2::new(400.0, 300.0));
                assert!((inner_radius - 30.0).abs() < 1e-12);
                assert_eq!(*outer_radius, 800.0);
            }
            other => panic!("expected vignette last, got {:?}", other),
        }
        assert_eq!(surface.composite(), CompositeMode::SourceOver);
    }

    #[test]
    fn test_base_stars_use_base_alpha() {
        let state = field(1024.0, 768.0);
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        let base: Vec<_> = surface
            .circles()
            .filter_map(|c| match c {
                DrawCall::FillCircle { center, radius, color, glow: None } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(base.len(), state.particles.len());
        for ((center, radius, color), p) in base.iter().zip(&state.particles) {
            assert_eq!(*center, p.pos);
            assert_eq!(*radius, p.radius);
            assert_eq!(*color, paint::palette::STAR.with_alpha(p.base_alpha));
        }
    }

    #[test]
    fn test_sweep_gradient_geometry() {
        let mut state = field(800.0, 600.0);
        state.angle = 0.0;
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        let sweep = surface.calls.iter().find_map(|c| match c {
            DrawCall::FillRect {
                paint: Paint::Gradient(g),
                composite: CompositeMode::Lighter,
                ..
            } => Some(*g),
            _ => None,
        });
        let sweep = sweep.expect("sweep layer");
        assert_eq!(sweep.stops.len(), 5);
        match sweep.shape {
            GradientShape::Linear { from, to } => {
                assert_eq!(from, DVec2::new(-400.0, 300.0));
                assert_eq!(to, DVec2::new(1200.0, 300.0));
            }
            other => panic!("unexpected sweep shape {:?}", other),
        }
    }

    #[test]
    fn test_particle_on_sweep_line_glows() {
        let mut state = field(800.0, 600.0);
        state.angle = 0.0;
        state.particles.truncate(2);
        // On the horizontal line through the center
        state.particles[0].pos = DVec2::new(500.0, 300.0);
        // Far from the line
        state.particles[1].pos = DVec2::new(400.0, 10.0);

        let mut surface = RecordingSurface::new();
        let stats = render(&state, &mut surface);
        assert_eq!(stats.highlighted, 1);
        assert_eq!(surface.glow_count(), 1);
    }

    #[test]
    fn test_empty_viewport_draws_nothing() {
        let state = field(0.0, 600.0);
        let mut surface = RecordingSurface::new();
        let stats = render(&state, &mut surface);
        assert!(surface.calls.is_empty());
        assert_eq!(stats, RenderStats::default());
    }
}
