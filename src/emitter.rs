//! Where launches come from.
//!
//! Launches rise from a 50-pixel strip along the bottom of the surface. The
//! horizontal position is drawn from one of three bands (left, center, right)
//! or from the whole width.
//!
//! | Site | x range on an 800 px surface |
//! |------|------------------------------|
//! | [`LaunchSite::Left`] | 0..=250 |
//! | [`LaunchSite::Center`] | 250..=500 |
//! | [`LaunchSite::Right`] | 520..=770 |
//! | [`LaunchSite::Anywhere`] | 0..=800 |
//!
//! Bands scale proportionally on other widths.

use crate::fixed::FixedVec2;
use crate::spawn::SpawnContext;

/// Width the band layout is expressed in.
const REFERENCE_WIDTH: i32 = 800;

/// Height of the launch strip at the bottom of the surface.
pub const LAUNCH_STRIP: i32 = 50;

/// A launch request's horizontal zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchSite {
    Left,
    Center,
    Right,
    /// Uniform over the full width.
    Anywhere,
}

impl LaunchSite {
    /// Inclusive x range, in pixels, for a surface `width` pixels wide.
    pub fn x_range(self, width: u32) -> (i32, i32) {
        let width = width as i32;
        let scale = |v: i32| v * width / REFERENCE_WIDTH;
        match self {
            LaunchSite::Left => (scale(0), scale(250)),
            LaunchSite::Center => (scale(250), scale(500)),
            LaunchSite::Right => (scale(520), scale(770)),
            LaunchSite::Anywhere => (0, width),
        }
    }

    /// Random launch origin (fixed-point) for this site.
    pub fn origin(self, width: u32, height: u32, rng: &mut SpawnContext) -> FixedVec2 {
        let (x_lo, x_hi) = self.x_range(width);
        let height = height as i32;
        let x = rng.range_inclusive(x_lo, x_hi);
        let y = rng.range_inclusive((height - LAUNCH_STRIP).max(0), height);
        FixedVec2::from_pixels(x, y)
    }
}
