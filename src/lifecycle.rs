//! Particle lifecycle: phases, lifetimes and fade curves.
//!
//! A firework particle lives in one of two phases:
//!
//! | Phase | Created by | Ends when |
//! |-------|------------|-----------|
//! | [`Phase::Launching`] | a trigger | vertical velocity reaches zero (explodes) |
//! | [`Phase::Exploded`] | an explosion | `health` reaches zero or it leaves the frame |
//!
//! Exploded particles age one `health` point per tick. Once `health` drops
//! below [`DECAY_START_HEALTH`] their `decay` factor starts shrinking too,
//! which slows them down independently of gravity. Below [`FADE_OUT_HEALTH`]
//! they also fade out.
//!
//! Trails are simpler: they start at [`TRAIL_FADE`] and fade linearly to
//! nothing over that many ticks.

/// Which set of lifecycle rules applies to a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rising shell, decelerating under gravity.
    Launching,
    /// Fragment of a burst, aging toward death.
    Exploded,
}

/// Health given to every explosion fragment.
pub const EXPLODED_HEALTH: i32 = 200;

/// Health placeholder for launch particles. Never decremented.
pub const LAUNCH_HEALTH: i32 = 100;

/// Full speed.
pub const DECAY_FULL: i32 = 100;

/// `decay` starts dropping once `health` is below this.
pub const DECAY_START_HEALTH: i32 = 100;

/// Opacity starts dropping once `health` is below this.
pub const FADE_OUT_HEALTH: i32 = 50;

/// Initial trail fade counter.
pub const TRAIL_FADE: i32 = 10;

/// Chance (in percent) that an exploded particle skips drawing on a frame.
pub const EXPLODED_SKIP_PERCENT: u32 = 80;

/// Chance (in percent) that a launch particle skips drawing on a frame.
pub const LAUNCHING_SKIP_PERCENT: u32 = 20;

/// Opacity of the horizontal and vertical glint streaks.
pub const STREAK_ALPHA: f32 = 0.5;

impl Phase {
    /// Per-frame chance (percent) that drawing is skipped, producing twinkle.
    pub const fn skip_percent(self) -> u32 {
        match self {
            Phase::Launching => LAUNCHING_SKIP_PERCENT,
            Phase::Exploded => EXPLODED_SKIP_PERCENT,
        }
    }
}

/// Core opacity for a particle with the given health.
///
/// Full opacity until `health` drops below [`FADE_OUT_HEALTH`], then linear
/// down to zero.
pub fn particle_alpha(health: i32) -> f32 {
    if health < FADE_OUT_HEALTH {
        health.max(0) as f32 / FADE_OUT_HEALTH as f32
    } else {
        1.0
    }
}

/// Trail opacity, linear in the remaining fade counter.
pub fn trail_alpha(fade: i32) -> f32 {
    fade.max(0) as f32 / TRAIL_FADE as f32
}
