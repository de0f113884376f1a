//! Animated particle field
//!
//! Pure state and physics. No rendering or platform dependencies:
//! - Seeded RNG only (population is reproducible for a given seed)
//! - Elapsed time is clamped before it reaches the physics
//! - The particle set is only ever replaced whole

pub mod advance;
pub mod particle;
pub mod state;

pub use advance::{advance, wrap_coordinate};
pub use particle::{Particle, particle_count, populate};
pub use state::FieldState;
