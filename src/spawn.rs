//! Random draws used when launching and exploding fireworks.
//!
//! Every random decision in the simulation goes through a [`SpawnContext`],
//! so a seeded context makes a whole run reproducible:
//!
//! ```
//! use hanabi::spawn::SpawnContext;
//!
//! let mut a = SpawnContext::seeded(7);
//! let mut b = SpawnContext::seeded(7);
//! assert_eq!(a.angle_degrees(), b.angle_degrees());
//! ```

use crate::visuals::Palette;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source with helpers for the draws fireworks need.
#[derive(Debug, Clone)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Context seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic context.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `lo..=hi`.
    #[inline]
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.gen_range(lo..=hi)
    }

    /// Whole-degree direction in `0..360`.
    #[inline]
    pub fn angle_degrees(&mut self) -> i32 {
        self.rng.gen_range(0..360)
    }

    /// Uniform integer speed in `min..=max`.
    #[inline]
    pub fn speed(&mut self, min: i32, max: i32) -> i32 {
        self.range_inclusive(min, max)
    }

    /// Uniform roll in `0..100`, for percent chances.
    #[inline]
    pub fn percent_roll(&mut self) -> u32 {
        self.rng.gen_range(0..100)
    }

    /// Whether an event with `percent` chance happens.
    #[inline]
    pub fn chance(&mut self, percent: u32) -> bool {
        self.percent_roll() < percent
    }

    /// A palette index different from `excluding`.
    pub fn fresh_color(&mut self, excluding: usize) -> usize {
        let pick = self.rng.gen_range(0..Palette::LEN - 1);
        if pick >= excluding {
            pick + 1
        } else {
            pick
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::from_entropy()
    }
}
