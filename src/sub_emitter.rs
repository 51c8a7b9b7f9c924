//! Explosion shells spawned when a launch particle bursts.
//!
//! A burst is two concentric shells sharing one origin:
//!
//! - [`INNER_SHELL`]: 200 slower fragments in the parent's color that form
//!   the dense visible core.
//! - [`OUTER_SHELL`]: 100 faster fragments that race outward as a sparse ring,
//!   all in one freshly rolled color.
//!
//! Fragments are written into a caller-owned buffer rather than the live
//! particle list, so an explosion can happen in the middle of an update pass.

use crate::fixed::{Fixed, FixedVec2};
use crate::particle::Particle;
use crate::spawn::SpawnContext;

/// How a shell picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellColor {
    /// Use the exploding particle's color index.
    Inherit,
    /// Roll one new color, different from the parent's, shared by the whole shell.
    Fresh,
}

/// One ring of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    /// Number of fragments.
    pub count: usize,
    /// Minimum speed in raw fixed-point units per tick (inclusive).
    pub speed_min: i32,
    /// Maximum speed in raw fixed-point units per tick (inclusive).
    pub speed_max: i32,
    /// Color policy.
    pub color: ShellColor,
}

/// Dense, slow core.
pub const INNER_SHELL: Shell = Shell {
    count: 200,
    speed_min: 10,
    speed_max: 300,
    color: ShellColor::Inherit,
};

/// Sparse, fast outer ring.
pub const OUTER_SHELL: Shell = Shell {
    count: 100,
    speed_min: 300,
    speed_max: 400,
    color: ShellColor::Fresh,
};

/// Gravity applied to every fragment, in raw units per tick².
pub const FRAGMENT_GRAVITY: Fixed = Fixed::from_raw(1);

/// Total fragments a single burst produces.
pub const fn burst_size() -> usize {
    INNER_SHELL.count + OUTER_SHELL.count
}

impl Shell {
    /// Append this shell's fragments to `out`.
    ///
    /// Returns the color index the shell was drawn in.
    pub fn emit(
        &self,
        origin: FixedVec2,
        parent_color: usize,
        rng: &mut SpawnContext,
        out: &mut Vec<Particle>,
    ) -> usize {
        let color = match self.color {
            ShellColor::Inherit => parent_color,
            ShellColor::Fresh => rng.fresh_color(parent_color),
        };

        out.reserve(self.count);
        for _ in 0..self.count {
            let angle = rng.angle_degrees();
            let speed = rng.speed(self.speed_min, self.speed_max);
            out.push(Particle::fragment(
                origin,
                FixedVec2::from_polar(speed, angle),
                color,
            ));
        }
        color
    }
}
