//! Afterglow left behind by drawn particles.
//!
//! A trail is a plain value copy of where a particle was drawn and in which
//! color. It holds no reference back to its particle and never spawns
//! anything; it fades out over [`TRAIL_FADE`] ticks and dies.

use crate::fixed::FixedVec2;
use crate::lifecycle::{trail_alpha, TRAIL_FADE};
use crate::surface::Surface;
use crate::visuals::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    position: FixedVec2,
    color: usize,
    fade: i32,
    dead: bool,
}

impl TrailParticle {
    /// A fresh trail at `position`, drawn in palette entry `color`.
    pub fn new(position: FixedVec2, color: usize) -> Self {
        Self {
            position,
            color,
            fade: TRAIL_FADE,
            dead: false,
        }
    }

    pub fn position(&self) -> FixedVec2 {
        self.position
    }

    pub fn color(&self) -> usize {
        self.color
    }

    /// Remaining fade counter, 10 at creation.
    pub fn fade(&self) -> i32 {
        self.fade
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Count down one tick; dies when the counter reaches zero.
    pub fn update(&mut self) {
        if self.dead {
            return;
        }
        self.fade -= 1;
        if self.fade <= 0 {
            self.dead = true;
        }
    }

    /// Draw a single 2×2 square at `fade / 10` opacity.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.dead {
            return;
        }
        let pixel = self.position.to_pixel();
        surface.set_alpha(trail_alpha(self.fade));
        surface.set_fill_color(Palette::color(self.color));
        surface.fill_rect(pixel.x, pixel.y, 2, 2);
    }
}
