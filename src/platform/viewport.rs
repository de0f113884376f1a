//! Viewport geometry

use glam::DVec2;

/// Logical viewport plus device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical (CSS) width
    pub width: f64,
    /// Logical (CSS) height
    pub height: f64,
    /// Device pixel ratio, always >= 1
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Build a viewport, clamping dimensions to >= 0 and the ratio to >= 1
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
            pixel_ratio: if pixel_ratio.is_finite() { pixel_ratio.max(1.0) } else { 1.0 },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_dim(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Backing surface size in physical pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).floor() as u32,
            (self.height * self.pixel_ratio).floor() as u32,
        )
    }

    /// Canvas transform mapping logical units to physical pixels
    pub fn transform(&self) -> [f64; 6] {
        [self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_inputs() {
        let vp = Viewport::new(-10.0, f64::NAN, 0.5);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
        assert_eq!(vp.pixel_ratio, 1.0);
        assert!(vp.is_empty());

        assert_eq!(Viewport::new(10.0, 10.0, f64::INFINITY).pixel_ratio, 1.0);
    }

    #[test]
    fn test_surface_size_floors() {
        let vp = Viewport::new(801.0, 601.0, 1.5);
        assert_eq!(vp.surface_size(), (1201, 901));
        assert_eq!(vp.transform(), [1.5, 0.0, 0.0, 1.5, 0.0, 0.0]);
    }

    #[test]
    fn test_center_and_dims() {
        let vp = Viewport::new(1920.0, 1080.0, 2.0);
        assert_eq!(vp.center(), DVec2::new(960.0, 540.0));
        assert_eq!(vp.min_dim(), 1080.0);
        assert_eq!(vp.max_dim(), 1920.0);
        assert_eq!(vp.surface_size(), (3840, 2160));
    }
}
