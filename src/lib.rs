//! Starfield background - animated canvas backdrop for the portfolio site
//!
//! Core modules:
//! - `field`: Particle field state, population and per-frame physics
//! - `renderer`: Layered 2D composition against an abstract drawing surface
//! - `platform`: Viewport geometry and frame timing
//! - `background`: Mount/resize/frame/teardown lifecycle controller
//! - `settings`: Tunable field configuration
//! - `web`: Browser host (wasm32 only)

pub mod background;
pub mod error;
pub mod field;
pub mod platform;
pub mod renderer;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use background::{Background, FrameOutcome};
pub use error::BackgroundError;
pub use field::{FieldState, Particle, advance};
pub use platform::{FrameClock, Viewport};
pub use renderer::{RecordingSurface, Surface, render};
pub use settings::FieldConfig;

use std::f64::consts::TAU;

/// Fixed animation constants
pub mod consts {
    /// Duration of one nominal 60 Hz frame in milliseconds.
    /// Rates in the config are expressed per nominal frame.
    pub const NOMINAL_FRAME_MS: f64 = 16.6667;

    /// Velocity multiplier applied per nominal frame
    pub const VELOCITY_SCALE: f64 = 1.8;

    /// Drift phase: time contribution (per ms) and spatial frequency
    pub const DRIFT_TIME_RATE: f64 = 0.0002;
    pub const DRIFT_FREQUENCY: f64 = 0.0001;

    /// Highlight cutoff below which a particle gets no glow draw
    pub const HIGHLIGHT_THRESHOLD: f64 = 0.01;

    /// Fallback page color when the canvas can't animate
    pub const FALLBACK_BACKGROUND: &str = "#020617";
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
