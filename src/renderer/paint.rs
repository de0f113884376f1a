//! Colors, gradients and composite modes

use glam::DVec2;

/// 8-bit RGB with floating alpha, matching CSS `rgba()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// A gradient color stop at `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientShape {
    Linear { from: DVec2, to: DVec2 },
    Radial { center: DVec2, inner_radius: f64, outer_radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub shape: GradientShape,
    pub stops: &'static [ColorStop],
}

/// Fill style for rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(Gradient),
}

/// Blend mode for subsequent fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    #[default]
    SourceOver,
    /// Additive
    Lighter,
}

impl CompositeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

/// Blurred shadow drawn around a fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Rgba,
}

/// Fixed palette for the background layers
pub mod palette {
    use super::{ColorStop, Rgba};

    const CLEAR: Rgba = Rgba::new(0, 0, 0, 0.0);
    const VIOLET: Rgba = Rgba::new(127, 124, 255, 0.0);

    pub const WASH: [ColorStop; 2] = [
        ColorStop::new(0.0, Rgba::new(4, 6, 16, 0.6)),
        ColorStop::new(1.0, Rgba::new(2, 3, 8, 0.75)),
    ];

    /// Dim base star tint (alpha set per particle)
    pub const STAR: Rgba = Rgba::new(180, 200, 255, 0.0);

    pub const SWEEP: [ColorStop; 5] = [
        ColorStop::new(0.0, CLEAR),
        ColorStop::new(0.45, VIOLET.with_alpha(0.03)),
        ColorStop::new(0.5, Rgba::new(0, 224, 255, 0.08)),
        ColorStop::new(0.55, VIOLET.with_alpha(0.06)),
        ColorStop::new(1.0, CLEAR),
    ];

    /// Glow shadow hue (alpha set per particle)
    pub const GLOW: Rgba = Rgba::new(100, 160, 255, 0.0);
    pub const GLOW_MAX_ALPHA: f64 = 0.85;

    pub const VIGNETTE: [ColorStop; 3] = [
        ColorStop::new(0.0, Rgba::new(40, 30, 55, 0.0)),
        ColorStop::new(0.6, Rgba::new(10, 8, 20, 0.12)),
        ColorStop::new(1.0, Rgba::new(2, 2, 6, 0.7)),
    ];
}
