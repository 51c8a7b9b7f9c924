//! Frame timing for the fixed-rate simulation driver.
//!
//! The simulation advances in whole ticks at a fixed nominal rate (60 Hz by
//! default) no matter how often the window redraws. [`Time`] measures real
//! elapsed time and converts it into the number of ticks owed:
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // Once per redraw:
//! for _ in 0..time.update() {
//!     system.tick();
//!     system.render(&mut frame);
//! }
//! ```
//!
//! If the host stalls, at most [`MAX_CATCH_UP`] ticks run in one frame and
//! the rest of the backlog is dropped, so a long pause does not replay as a
//! burst of fast-forward.

use std::time::{Duration, Instant};

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Most ticks run for a single frame.
pub const MAX_CATCH_UP: u32 = 5;

/// Time tracking for the fixed-step driver.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Real time not yet consumed by ticks.
    accumulator: Duration,
    /// Length of one tick.
    step: Duration,
    /// Total ticks run since start.
    tick_count: u64,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl Time {
    /// Create a new timer at the default tick rate, starting from now.
    pub fn new() -> Self {
        Self::with_tick_rate(DEFAULT_TICK_RATE)
    }

    /// Create a new timer running `hz` ticks per second. Zero is treated as one.
    pub fn with_tick_rate(hz: u32) -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            accumulator: Duration::ZERO,
            step: step_for(hz),
            tick_count: 0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Measure the time since the last call and return how many ticks to run.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.advance(elapsed)
    }

    /// Feed `elapsed` real time into the accumulator and return the ticks owed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_CATCH_UP {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_CATCH_UP && self.accumulator >= self.step {
            log::trace!("dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Total simulation ticks since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

fn step_for(hz: u32) -> Duration {
    Duration::from_secs(1) / hz.max(1)
}
