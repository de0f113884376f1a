//! Draw-call recording surface
//!
//! Used by tests and the headless native binary in place of a canvas.

use glam::DVec2;

use super::paint::{CompositeMode, Glow, Paint, Rgba};
use super::surface::Surface;
use crate::platform::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Configure { size: (u32, u32), transform: [f64; 6] },
    Clear { width: f64, height: f64 },
    FillRect { origin: DVec2, size: DVec2, paint: Paint, composite: CompositeMode },
    FillCircle { center: DVec2, radius: f64, color: Rgba, glow: Option<Glow> },
    Save,
    Restore,
}

/// Records every call; composite state is tracked across save/restore
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    composite: CompositeMode,
    stack: Vec<CompositeMode>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded calls, keeping composite state
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn composite(&self) -> CompositeMode {
        self.composite
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
    }

    pub fn glow_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { glow: Some(_), .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, viewport: &Viewport) {
        self.calls.push(DrawCall::Configure {
            size: viewport.surface_size(),
            transform: viewport.transform(),
        });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.calls.push(DrawCall::FillRect {
            origin,
            size,
            paint: *paint,
            composite: self.composite,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba, glow: Option<Glow>) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn save(&mut self) {
        self.stack.push(self.composite);
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        if let Some(mode) = self.stack.pop() {
            self.composite = mode;
        }
        self.calls.push(DrawCall::Restore);
    }
}
