//! Abstract 2D drawing surface
//!
//! All coordinates are logical pixels. `configure` establishes the
//! logical-to-physical transform.

use glam::DVec2;

use super::paint::{CompositeMode, Glow, Paint, Rgba};
use crate::platform::Viewport;

pub trait Surface {
    /// Resize the backing store to the viewport's physical size and set the
    /// pixel-ratio transform
    fn configure(&mut self, viewport: &Viewport);

    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint);

    /// Filled circle, optionally with a blurred glow that is reset afterwards
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba, glow: Option<Glow>);

    fn set_composite(&mut self, mode: CompositeMode);

    fn save(&mut self);

    fn restore(&mut self);
}
