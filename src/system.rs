//! The particle system: owns every live particle and trail and drives the
//! per-frame update and draw passes.
//!
//! # Frame sequence
//!
//! A fixed-rate driver calls [`ParticleSystem::tick`] then
//! [`ParticleSystem::render`] once per frame:
//!
//! 1. `tick` updates particles from last to first, removing dead ones, then
//!    splices in fragments spawned by bursts during the pass. It then does the
//!    same for trails.
//! 2. `render` clears to black, switches to additive blending, draws trails
//!    then particles, and splices in trails left by particles drawn this frame.
//!
//! Spawns always go to a pending buffer and join the live list only after the
//! pass that produced them, so they are first updated (or drawn) on the next
//! frame.
//!
//! Nothing throttles launches: each one becomes 300 fragments and every drawn
//! particle leaves a trail per frame, so memory grows with trigger rate.
//!
//! ```
//! use hanabi::fixed::Fixed;
//! use hanabi::surface::PixelBuffer;
//! use hanabi::ParticleSystem;
//!
//! let mut system = ParticleSystem::with_seed(800, 600, 1);
//! let mut surface = PixelBuffer::new(800, 600);
//! system.trigger(Fixed::from_pixel(400), Fixed::from_pixel(580));
//! for _ in 0..200 {
//!     system.tick();
//!     system.render(&mut surface);
//! }
//! assert_eq!(system.particle_count(), 300);
//! ```

use crate::emitter::LaunchSite;
use crate::fixed::{Fixed, FixedVec2};
use crate::particle::{DrawContext, Particle, UpdateContext};
use crate::spawn::SpawnContext;
use crate::surface::Surface;
use crate::trail::TrailParticle;
use crate::visuals::{BlendMode, BACKGROUND};

/// Owner of all live particles and trails.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    trails: Vec<TrailParticle>,
    pending_particles: Vec<Particle>,
    pending_trails: Vec<TrailParticle>,
    rng: SpawnContext,
}

impl ParticleSystem {
    /// An empty system for a `width`×`height` surface, seeded from entropy.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, SpawnContext::from_entropy())
    }

    /// An empty system with a deterministic random source.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(width, height, SpawnContext::seeded(seed))
    }

    fn with_rng(width: u32, height: u32, rng: SpawnContext) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
            trails: Vec::new(),
            pending_particles: Vec::new(),
            pending_trails: Vec::new(),
            rng,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Live particles, in storage order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Live trails, in storage order.
    pub fn trails(&self) -> &[TrailParticle] {
        &self.trails
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }

    /// Nothing is flying and nothing is glowing.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.trails.is_empty()
    }

    /// Launch a shell from a fixed-point origin.
    ///
    /// Always accepted; there is no launch limit or cooldown. Coordinates are
    /// meaningful within [`MIN_PIXEL`](crate::fixed::MIN_PIXEL)`..=`
    /// [`MAX_PIXEL`](crate::fixed::MAX_PIXEL) pixels; motion wraps beyond that.
    pub fn trigger(&mut self, x: Fixed, y: Fixed) {
        let origin = FixedVec2::new(x, y);
        self.particles.push(Particle::launch(origin));
        log::debug!("launch from ({}, {})", x.to_pixel(), y.to_pixel());
    }

    /// Launch a shell from a random point of `site`.
    pub fn launch(&mut self, site: LaunchSite) {
        let origin = site.origin(self.width, self.height, &mut self.rng);
        self.trigger(origin.x(), origin.y());
    }

    /// Advance the simulation one step.
    pub fn tick(&mut self) {
        let mut ctx = UpdateContext {
            width: self.width as i32,
            height: self.height as i32,
            rng: &mut self.rng,
            spawned: &mut self.pending_particles,
        };
        // Back to front: swap_remove only moves an already visited entry.
        for i in (0..self.particles.len()).rev() {
            self.particles[i].update(&mut ctx);
            if self.particles[i].is_dead() {
                self.particles.swap_remove(i);
            }
        }
        self.particles.append(&mut self.pending_particles);

        for i in (0..self.trails.len()).rev() {
            self.trails[i].update();
            if self.trails[i].is_dead() {
                self.trails.swap_remove(i);
            }
        }

        log::trace!(
            "tick: {} particles, {} trails",
            self.particles.len(),
            self.trails.len()
        );
    }

    /// Composite the current frame onto `surface`.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.set_blend_mode(BlendMode::Replace);
        surface.set_alpha(1.0);
        surface.clear(BACKGROUND);
        surface.set_blend_mode(BlendMode::Additive);

        for trail in self.trails.iter().rev() {
            trail.draw(surface);
        }

        let mut ctx = DrawContext {
            rng: &mut self.rng,
            trails: &mut self.pending_trails,
        };
        for particle in self.particles.iter().rev() {
            particle.draw(surface, &mut ctx);
        }
        self.trails.append(&mut self.pending_trails);
    }
}
