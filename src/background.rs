//! Background lifecycle controller
//!
//! Owns the field and frame clock for one mounted view. The host calls
//! `frame` once per display refresh; resize notifications are queued and
//! applied at the start of the next frame so a frame never mixes particle
//! generations.

use crate::field::{FieldState, advance};
use crate::platform::{FrameClock, Viewport};
use crate::renderer::{RenderStats, Surface, render};
use crate::settings::FieldConfig;

/// Result of one frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Drawn normally
    Rendered(RenderStats),
    /// Zero-area viewport, nothing drawn
    Empty,
    /// Background is unmounted; the host must not schedule another frame
    Stopped,
}

impl FrameOutcome {
    /// Whether the host should request another frame
    pub fn wants_next_frame(&self) -> bool {
        !matches!(self, FrameOutcome::Stopped)
    }
}

pub struct Background {
    field: FieldState,
    clock: FrameClock,
    pending_resize: Option<Viewport>,
    mounted: bool,
    frames: u64,
}

impl Background {
    /// Mount onto `surface`: size it, populate the field and start the clock
    pub fn mount<S: Surface + ?Sized>(
        config: FieldConfig,
        viewport: Viewport,
        seed: u64,
        now_ms: f64,
        surface: &mut S,
    ) -> Self {
        let clock = FrameClock::new(now_ms, config.max_frame_delta_ms);
        surface.configure(&viewport);
        let field = FieldState::new(config, viewport, seed);
        log::info!(
            "Background mounted at {}x{} @{}x with {} particles (seed {})",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            field.particles.len(),
            seed
        );

        Self {
            field,
            clock,
            pending_resize: None,
            mounted: true,
            frames: 0,
        }
    }

    /// Queue a resize; the latest request wins
    pub fn request_resize(&mut self, viewport: Viewport) {
        if self.mounted {
            self.pending_resize = Some(viewport);
        }
    }

    /// Queue a resize only if `viewport` differs from the one in effect
    /// (catches pixel-ratio changes that arrive without a resize event)
    pub fn observe_viewport(&mut self, viewport: Viewport) {
        let effective = self.pending_resize.unwrap_or(self.field.viewport);
        if viewport != effective {
            self.request_resize(viewport);
        }
    }

    /// Run one frame: apply any queued resize, advance, render
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameOutcome {
        if !self.mounted {
            return FrameOutcome::Stopped;
        }

        let elapsed = self.clock.tick(now_ms);

        if let Some(viewport) = self.pending_resize.take() {
            surface.configure(&viewport);
            self.field.resize(viewport);
        }

        advance(&mut self.field, elapsed, now_ms);
        self.frames += 1;

        if self.field.viewport.is_empty() {
            return FrameOutcome::Empty;
        }
        FrameOutcome::Rendered(render(&self.field, surface))
    }

    /// Stop animating. Later frame callbacks return `Stopped`.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.pending_resize = None;
            log::info!("Background unmounted after {} frames", self.frames);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }
}
