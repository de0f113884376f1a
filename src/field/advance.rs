//! Per-frame field physics

use crate::consts::*;
use crate::wrap_angle;

use super::state::FieldState;

/// Teleport a coordinate that left `[-margin, extent + margin]` to the
/// opposite side. Direction of travel is untouched.
#[inline]
pub fn wrap_coordinate(mut value: f64, extent: f64, margin: f64) -> f64 {
    if value < -margin {
        value = extent + margin;
    }
    if value > extent + margin {
        value = -margin;
    }
    value
}

/// Advance the field by `elapsed_ms` of wall time.
///
/// `elapsed_ms` is clamped to `[0, max_frame_delta_ms]`. `now_ms` is the
/// absolute frame timestamp and only feeds the drift phase.
pub fn advance(state: &mut FieldState, elapsed_ms: f64, now_ms: f64) {
    let elapsed = if elapsed_ms.is_finite() {
        elapsed_ms.clamp(0.0, state.config.max_frame_delta_ms)
    } else {
        0.0
    };
    let t = elapsed / NOMINAL_FRAME_MS;

    state.angle = wrap_angle(state.angle + state.config.angular_speed * t);

    let width = state.viewport.width;
    let height = state.viewport.height;
    let margin = state.config.wrap_margin;
    let phase = now_ms * DRIFT_TIME_RATE;

    for p in &mut state.particles {
        p.pos += p.vel * (t * VELOCITY_SCALE);
        p.pos.x += ((p.pos.y + phase) * DRIFT_FREQUENCY).sin() * p.drift;

        p.pos.x = wrap_coordinate(p.pos.x, width, margin);
        p.pos.y = wrap_coordinate(p.pos.y, height, margin);
    }
}
