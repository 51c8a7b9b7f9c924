//! Firework particles: rising shells and the fragments they burst into.

use crate::fixed::{Fixed, FixedVec2};
use crate::lifecycle::{
    particle_alpha, Phase, DECAY_FULL, DECAY_START_HEALTH, EXPLODED_HEALTH, LAUNCH_HEALTH,
    STREAK_ALPHA,
};
use crate::spawn::SpawnContext;
use crate::sub_emitter::{burst_size, FRAGMENT_GRAVITY, INNER_SHELL, OUTER_SHELL};
use crate::surface::Surface;
use crate::trail::TrailParticle;
use crate::visuals::Palette;

/// Initial vertical velocity of a launch, in raw units per tick (upward).
pub const LAUNCH_VELOCITY: Fixed = Fixed::from_raw(-800);

/// Gravity applied to a launch, in raw units per tick².
pub const LAUNCH_GRAVITY: Fixed = Fixed::from_raw(4);

/// State shared by every particle during an update pass.
pub struct UpdateContext<'a> {
    /// Surface width in pixels; particles right of it are culled.
    pub width: i32,
    /// Surface height in pixels; particles below it are culled.
    pub height: i32,
    pub rng: &'a mut SpawnContext,
    /// Fragments spawned during this pass. Merged once the pass completes.
    pub spawned: &'a mut Vec<Particle>,
}

/// State shared by every particle during a draw pass.
pub struct DrawContext<'a> {
    pub rng: &'a mut SpawnContext,
    /// Trails left by particles drawn during this pass.
    pub trails: &'a mut Vec<TrailParticle>,
}

/// One simulated point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: FixedVec2,
    velocity: FixedVec2,
    gravity: Fixed,
    color: usize,
    phase: Phase,
    health: i32,
    decay: i32,
    dead: bool,
}

impl Particle {
    /// A rising shell at `origin`.
    pub fn launch(origin: FixedVec2) -> Self {
        Self {
            position: origin,
            velocity: FixedVec2::new(Fixed::ZERO, LAUNCH_VELOCITY),
            gravity: LAUNCH_GRAVITY,
            color: 0,
            phase: Phase::Launching,
            health: LAUNCH_HEALTH,
            decay: DECAY_FULL,
            dead: false,
        }
    }

    /// An explosion fragment.
    ///
    /// # Panics
    ///
    /// Panics if `color` is not a palette index.
    pub fn fragment(position: FixedVec2, velocity: FixedVec2, color: usize) -> Self {
        assert!(color < Palette::LEN, "color index {color} out of palette");
        Self {
            position,
            velocity,
            gravity: FRAGMENT_GRAVITY,
            color,
            phase: Phase::Exploded,
            health: EXPLODED_HEALTH,
            decay: DECAY_FULL,
            dead: false,
        }
    }

    pub fn position(&self) -> FixedVec2 {
        self.position
    }

    pub fn velocity(&self) -> FixedVec2 {
        self.velocity
    }

    pub fn gravity(&self) -> Fixed {
        self.gravity
    }

    /// Palette index; launch particles always report 0.
    pub fn color(&self) -> usize {
        self.color
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Speed factor in percent (100 = full speed).
    pub fn decay(&self) -> i32 {
        self.decay
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Palette index actually drawn: launches are always palette entry 0.
    pub fn draw_color(&self) -> usize {
        match self.phase {
            Phase::Launching => 0,
            Phase::Exploded => self.color,
        }
    }

    /// Advance one tick.
    ///
    /// Moves, applies gravity, culls particles that leave the left, right or
    /// bottom edge, and runs the phase rules. A launch whose vertical velocity
    /// is no longer negative bursts: it dies and pushes 300 fragments into
    /// `ctx.spawned`. Dead particles are left untouched.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.dead {
            return;
        }

        self.position += self.velocity.scale_percent(self.decay);
        self.velocity.set_y(self.velocity.y() + self.gravity);

        // Only the bottom edge culls vertically; shells may rise above the top.
        let pixel = self.position.to_pixel();
        if pixel.x < 0 || pixel.x > ctx.width || pixel.y > ctx.height {
            self.dead = true;
        }

        match self.phase {
            Phase::Launching => {
                if !self.velocity.y().is_negative() {
                    self.explode(ctx);
                }
            }
            Phase::Exploded => {
                self.health -= 1;
                if self.health < DECAY_START_HEALTH && self.decay > 0 {
                    self.decay -= 1;
                }
                if self.health <= 0 {
                    self.dead = true;
                }
            }
        }
    }

    fn explode(&mut self, ctx: &mut UpdateContext<'_>) {
        self.dead = true;

        let before = ctx.spawned.len();
        INNER_SHELL.emit(self.position, self.color, ctx.rng, ctx.spawned);
        let outer = OUTER_SHELL.emit(self.position, self.color, ctx.rng, ctx.spawned);
        debug_assert_eq!(ctx.spawned.len() - before, burst_size());

        let at = self.position.to_pixel();
        log::debug!(
            "burst at ({}, {}): inner color {}, outer color {}",
            at.x,
            at.y,
            self.color,
            outer
        );
    }

    /// Draw this particle and leave a trail behind.
    ///
    /// Each frame the draw is skipped at random (80% of the time once
    /// exploded, 20% while launching), which makes the sky twinkle. A drawn
    /// particle is a 2×2 core plus two half-opacity streaks forming a small
    /// cross, and pushes one [`TrailParticle`] into `ctx.trails`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ctx: &mut DrawContext<'_>) {
        if self.dead {
            return;
        }
        if ctx.rng.chance(self.phase.skip_percent()) {
            return;
        }

        let color = self.draw_color();
        let pixel = self.position.to_pixel();

        surface.set_alpha(particle_alpha(self.health));
        surface.set_fill_color(Palette::color(color));
        surface.fill_rect(pixel.x, pixel.y, 2, 2);

        surface.set_alpha(STREAK_ALPHA);
        surface.fill_rect(pixel.x - 1, pixel.y, 4, 2);
        surface.fill_rect(pixel.x, pixel.y - 1, 2, 4);

        ctx.trails.push(TrailParticle::new(self.position, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Call, RecordingSurface};

    struct Harness {
        rng: SpawnContext,
        spawned: Vec<Particle>,
        trails: Vec<TrailParticle>,
    }

    impl Harness {
        fn new(seed: u64) -> Self {
            Self {
                rng: SpawnContext::seeded(seed),
                spawned: Vec::new(),
                trails: Vec::new(),
            }
        }

        fn update(&mut self, p: &mut Particle) {
            self.update_within(p, 800, 600);
        }

        fn update_within(&mut self, p: &mut Particle, width: i32, height: i32) {
            let mut ctx = UpdateContext {
                width,
                height,
                rng: &mut self.rng,
                spawned: &mut self.spawned,
            };
            p.update(&mut ctx);
        }

        fn draw(&mut self, p: &Particle, surface: &mut RecordingSurface) {
            let mut ctx = DrawContext {
                rng: &mut self.rng,
                trails: &mut self.trails,
            };
            p.draw(surface, &mut ctx);
        }
    }

    #[test]
    fn test_launch_defaults() {
        let p = Particle::launch(FixedVec2::from_pixels(400, 580));
        assert_eq!(p.phase(), Phase::Launching);
        assert_eq!(p.velocity(), FixedVec2::from_raw(0, -800));
        assert_eq!(p.gravity(), Fixed::from_raw(4));
        assert_eq!(p.decay(), 100);
        assert!(!p.is_dead());
    }

    #[test]
    fn test_motion_then_gravity() {
        let mut h = Harness::new(0);
        let mut p = Particle::launch(FixedVec2::from_pixels(400, 580));
        h.update(&mut p);
        // Position moves by the velocity before gravity is added.
        assert_eq!(p.position(), FixedVec2::from_raw(400 << 8, (580 << 8) - 800));
        assert_eq!(p.velocity().y().raw(), -796);
    }

    #[test]
    fn test_launch_explodes_when_velocity_reaches_zero() {
        let mut h = Harness::new(1);
        let mut p = Particle::launch(FixedVec2::from_pixels(400, 580));
        for _ in 0..199 {
            h.update(&mut p);
            assert!(!p.is_dead());
            assert!(h.spawned.is_empty());
        }
        h.update(&mut p);
        assert!(p.is_dead());
        assert_eq!(h.spawned.len(), 300);
        assert!(h.spawned.iter().all(|c| c.position() == p.position()));
        assert!(h.spawned[..200].iter().all(|c| c.color() == 0));
        let outer = h.spawned[200].color();
        assert_ne!(outer, 0);
        assert!(h.spawned[200..].iter().all(|c| c.color() == outer));
    }

    #[test]
    fn test_culled_on_apex_tick_still_bursts() {
        let mut h = Harness::new(11);
        let mut p = Particle::launch(FixedVec2::from_pixels(400, 580));
        for _ in 0..199 {
            h.update(&mut p);
        }
        assert!(!p.is_dead());

        // Bounds shrink under the shell on the tick its ascent ends.
        h.update_within(&mut p, 300, 600);
        assert!(p.position().to_pixel().x > 300);
        assert!(p.is_dead());
        assert_eq!(h.spawned.len(), 300);
        assert!(h.spawned.iter().all(|c| c.position() == p.position()));
    }

    #[test]
    fn test_culled_before_apex_does_not_burst() {
        let mut h = Harness::new(12);
        let mut p = Particle::launch(FixedVec2::from_pixels(400, 580));
        h.update_within(&mut p, 300, 600);
        assert!(p.is_dead());
        assert!(h.spawned.is_empty());
    }

    #[test]
    fn test_dead_particle_is_inert() {
        let mut h = Harness::new(2);
        let mut p = Particle::launch(FixedVec2::from_pixels(400, 580));
        for _ in 0..200 {
            h.update(&mut p);
        }
        assert!(p.is_dead());
        let snapshot = p.clone();
        h.spawned.clear();

        h.update(&mut p);
        assert_eq!(p, snapshot);
        assert!(h.spawned.is_empty());

        let mut surface = RecordingSurface::new(800, 600);
        for _ in 0..50 {
            h.draw(&p, &mut surface);
        }
        assert!(surface.calls.is_empty());
        assert!(h.trails.is_empty());
    }

    #[test]
    fn test_health_and_decay_schedule() {
        let mut h = Harness::new(3);
        let mut p = Particle::fragment(FixedVec2::from_pixels(400, 100), FixedVec2::ZERO, 1);
        let mut last_decay = p.decay();
        for tick in 1..=200 {
            h.update(&mut p);
            assert_eq!(p.health(), 200 - tick);
            assert!(p.decay() <= last_decay);
            assert!((0..=100).contains(&p.decay()));
            if p.health() >= 100 {
                assert_eq!(p.decay(), 100, "decay must wait for health < 100");
            }
            last_decay = p.decay();
            assert_eq!(p.is_dead(), tick == 200);
        }
        assert_eq!(p.decay(), 0);
    }

    #[test]
    fn test_cull_right_edge_same_tick() {
        let mut h = Harness::new(4);
        let mut p = Particle::fragment(
            FixedVec2::from_raw((800 << 8) + 200, 300 << 8),
            FixedVec2::from_raw(100, 0),
            0,
        );
        h.update(&mut p);
        assert_eq!(p.position().to_pixel().x, 801);
        assert!(p.is_dead());
    }

    #[test]
    fn test_edge_pixel_itself_survives() {
        let mut h = Harness::new(4);
        let mut p = Particle::fragment(FixedVec2::from_pixels(800, 600), FixedVec2::ZERO, 0);
        h.update(&mut p);
        assert!(!p.is_dead());
    }

    #[test]
    fn test_cull_left_and_bottom() {
        let mut h = Harness::new(5);
        let mut left = Particle::fragment(FixedVec2::from_raw(10, 300 << 8), FixedVec2::from_raw(-20, 0), 0);
        h.update(&mut left);
        assert!(left.is_dead());

        let mut bottom =
            Particle::fragment(FixedVec2::from_pixels(400, 600), FixedVec2::from_raw(0, 256), 0);
        h.update(&mut bottom);
        assert!(bottom.is_dead());
    }

    #[test]
    fn test_above_top_edge_is_not_culled() {
        let mut h = Harness::new(6);
        let mut p = Particle::fragment(FixedVec2::from_pixels(400, 0), FixedVec2::from_raw(0, -400), 0);
        for _ in 0..20 {
            h.update(&mut p);
        }
        assert!(p.position().to_pixel().y < 0);
        assert!(!p.is_dead());
    }

    #[test]
    fn test_draw_cross_and_trail() {
        let mut h = Harness::new(7);
        let p = Particle::fragment(FixedVec2::from_pixels(10, 20), FixedVec2::ZERO, 2);
        let mut surface = RecordingSurface::new(800, 600);

        // With an 80% skip chance a draw happens well within 200 tries.
        for _ in 0..200 {
            h.draw(&p, &mut surface);
            if !h.trails.is_empty() {
                break;
            }
        }
        assert_eq!(h.trails.len(), 1);
        assert_eq!(
            surface.calls,
            vec![
                Call::Alpha(1.0),
                Call::FillColor(Palette::color(2)),
                Call::FillRect { x: 10, y: 20, w: 2, h: 2 },
                Call::Alpha(0.5),
                Call::FillRect { x: 9, y: 20, w: 4, h: 2 },
                Call::FillRect { x: 10, y: 19, w: 2, h: 4 },
            ]
        );
        assert_eq!(h.trails[0].position(), p.position());
        assert_eq!(h.trails[0].color(), 2);
    }

    #[test]
    fn test_draw_fades_near_death() {
        let mut h = Harness::new(8);
        let mut p = Particle::fragment(FixedVec2::from_pixels(400, 100), FixedVec2::ZERO, 1);
        for _ in 0..175 {
            h.update(&mut p);
        }
        assert_eq!(p.health(), 25);

        let mut surface = RecordingSurface::new(800, 600);
        for _ in 0..200 {
            h.draw(&p, &mut surface);
            if !surface.calls.is_empty() {
                break;
            }
        }
        assert_eq!(surface.calls[0], Call::Alpha(0.5));
    }

    #[test]
    fn test_launch_draws_in_first_color() {
        let mut h = Harness::new(9);
        let p = Particle::launch(FixedVec2::from_pixels(100, 500));
        let mut surface = RecordingSurface::new(800, 600);
        for _ in 0..50 {
            h.draw(&p, &mut surface);
        }
        assert!(!h.trails.is_empty());
        assert!(h.trails.iter().all(|t| t.color() == 0));
        assert!(surface
            .calls
            .iter()
            .all(|c| !matches!(c, Call::FillColor(col) if *col != Palette::color(0))));
    }

    #[test]
    fn test_skip_rates_roughly_match() {
        let mut h = Harness::new(10);
        let exploded = Particle::fragment(FixedVec2::from_pixels(10, 10), FixedVec2::ZERO, 0);
        let launching = Particle::launch(FixedVec2::from_pixels(10, 10));
        let mut surface = RecordingSurface::new(800, 600);

        for _ in 0..10_000 {
            h.draw(&exploded, &mut surface);
        }
        let drawn = h.trails.len();
        assert!((1_700..2_300).contains(&drawn), "exploded drew {drawn}");

        h.trails.clear();
        for _ in 0..10_000 {
            h.draw(&launching, &mut surface);
        }
        let drawn = h.trails.len();
        assert!((7_700..8_300).contains(&drawn), "launching drew {drawn}");
    }
}
