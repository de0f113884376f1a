//! Platform abstraction layer
//!
//! Host-independent pieces of the browser environment:
//! - Viewport geometry (logical size, pixel ratio, backing surface size)
//! - Frame timing (elapsed-time clamp)

pub mod clock;
pub mod viewport;

pub use clock::FrameClock;
pub use viewport::Viewport;
