//! # Hanabi
//!
//! A 2D fireworks particle simulation on fixed-point integer physics.
//!
//! Shells rise from the bottom of the sky, slow under gravity and burst at
//! the top of their arc into two concentric rings of sparks. Every drawn
//! spark leaves a short-lived trail, and sparks twinkle by randomly skipping
//! frames. Frames are composited on the CPU into any [`Surface`] and, when
//! run as an application, presented in a window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hanabi::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Fireworks::new()
//!         .with_size(800, 600)
//!         .with_tick_rate(60)
//!         .run()
//! }
//! ```
//!
//! ## Headless
//!
//! The simulation has no window dependency. Drive it directly and render into
//! a [`PixelBuffer`]:
//!
//! ```
//! use hanabi::prelude::*;
//!
//! let mut system = ParticleSystem::with_seed(320, 240, 7);
//! let mut frame = PixelBuffer::new(320, 240);
//! system.launch(LaunchSite::Center);
//! for _ in 0..60 {
//!     system.tick();
//!     system.render(&mut frame);
//! }
//! assert_eq!(system.particle_count(), 1);
//! ```
//!
//! ## Units
//!
//! Positions and velocities are Q23.8 fixed point ([`Fixed`]): 256 raw
//! units make one pixel, and the pixel a particle lands on is its raw
//! coordinate shifted right by eight. Velocities are raw units per tick.
//!
//! ## Module Overview
//!
//! | Module | Role |
//! |--------|------|
//! | [`fixed`] | Fixed-point scalars and vectors |
//! | [`particle`] | Shell and fragment update and draw rules |
//! | [`sub_emitter`] | The two-shell burst |
//! | [`trail`] | Fading afterglow |
//! | [`system`] | Particle ownership and the frame sequence |
//! | [`surface`] | Drawing primitives and the CPU compositor |
//! | [`emitter`] | Launch bands across the bottom edge |
//! | [`input`] / [`time`] | Keyboard mapping and fixed-rate timing |

mod error;
pub mod emitter;
pub mod fixed;
mod gpu;
pub mod input;
pub mod lifecycle;
pub mod particle;
mod simulation;
pub mod spawn;
pub mod sub_emitter;
pub mod surface;
pub mod system;
pub mod time;
pub mod trail;
pub mod visuals;

pub use emitter::LaunchSite;
pub use error::{CaptureError, GpuError, SimulationError};
pub use fixed::{Fixed, FixedVec2};
pub use glam::{IVec2, Vec3};
pub use lifecycle::Phase;
pub use particle::Particle;
pub use simulation::Fireworks;
pub use spawn::SpawnContext;
pub use surface::{PixelBuffer, Rgba8, Surface};
pub use system::ParticleSystem;
pub use trail::TrailParticle;
pub use visuals::{BlendMode, Palette};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use hanabi::prelude::*;
/// ```
pub mod prelude {
    pub use crate::emitter::LaunchSite;
    pub use crate::error::SimulationError;
    pub use crate::fixed::{Fixed, FixedVec2};
    pub use crate::input::{Input, KeyCode};
    pub use crate::lifecycle::Phase;
    pub use crate::simulation::Fireworks;
    pub use crate::surface::{PixelBuffer, Surface};
    pub use crate::system::ParticleSystem;
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, Palette};
    pub use crate::Vec3;
}
