//! Fireworks window builder and runner.
//!
//! ```ignore
//! use hanabi::Fireworks;
//!
//! Fireworks::new()
//!     .with_size(800, 600)
//!     .with_tick_rate(60)
//!     .run()?;
//! ```
//!
//! Controls: `1`/`2`/`3` launch from the left/center/right, and any key
//! while `Shift` is down launches anywhere. Held keys keep launching on
//! auto-repeat. `F12` saves the current frame as a PNG into the capture
//! directory, creating it if needed. `Escape` quits.

use crate::error::{CaptureError, SimulationError};
use crate::gpu::GpuState;
use crate::input::{Input, KeyCode};
use crate::surface::PixelBuffer;
use crate::system::ParticleSystem;
use crate::time::{Time, DEFAULT_TICK_RATE};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Host configuration for a fireworks window.
///
/// Use method chaining to configure, then call `.run()` to start.
#[derive(Debug, Clone)]
pub struct Fireworks {
    width: u32,
    height: u32,
    title: String,
    tick_rate: u32,
    seed: Option<u64>,
    capture_dir: PathBuf,
}

impl Fireworks {
    /// An 800×600 window at 60 ticks per second.
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Hanabi".to_string(),
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
            capture_dir: PathBuf::from("."),
        }
    }

    /// Set the surface size in pixels. Zero dimensions are raised to one.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the simulation rate in ticks per second.
    pub fn with_tick_rate(mut self, hz: u32) -> Self {
        self.tick_rate = hz.max(1);
        self
    }

    /// Make every random draw reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Directory `F12` captures are written to.
    pub fn with_capture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.capture_dir = dir.into();
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// The particle system this configuration starts with.
    pub fn build_system(&self) -> ParticleSystem {
        match self.seed {
            Some(seed) => ParticleSystem::with_seed(self.width, self.height, seed),
            None => ParticleSystem::new(self.width, self.height),
        }
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        log::info!(
            "starting {}x{} at {} Hz (seed: {:?})",
            self.width,
            self.height,
            self.tick_rate,
            self.seed
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Fireworks {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: Fireworks,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    system: ParticleSystem,
    frame: PixelBuffer,
    input: Input,
    time: Time,
    error: Option<SimulationError>,
}

impl App {
    fn new(config: Fireworks) -> Self {
        Self {
            system: config.build_system(),
            frame: PixelBuffer::new(config.width, config.height),
            time: Time::with_tick_rate(config.tick_rate),
            input: Input::new(),
            window: None,
            gpu_state: None,
            error: None,
            config,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());
        self.gpu_state = Some(pollster::block_on(GpuState::new(
            window,
            self.config.width,
            self.config.height,
        ))?);
        Ok(())
    }

    /// Run the ticks owed since the last redraw, each followed by a render.
    fn advance(&mut self) {
        for &site in self.input.launch_sites() {
            self.system.launch(site);
        }

        let ticks = self.time.update();
        for _ in 0..ticks {
            self.system.tick();
            self.system.render(&mut self.frame);
        }

        if self.input.key_pressed(KeyCode::F12) {
            self.capture();
        }
        self.input.begin_frame();
    }

    fn capture(&self) {
        match capture_frame(&self.frame, &self.config.capture_dir, self.time.ticks()) {
            Ok(path) => log::info!("saved {}", path.display()),
            Err(e) => log::warn!("{e}"),
        }
    }
}

/// Write `frame` to `dir/hanabi-<tick>.png`, creating `dir` if needed.
fn capture_frame(frame: &PixelBuffer, dir: &Path, tick: u64) -> Result<PathBuf, CaptureError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("hanabi-{tick}.png"));
    frame.save_png(&path)?;
    Ok(path)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { .. } if self.input.key_pressed(KeyCode::Escape) => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.advance();

                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.upload(&self.frame);
                    match gpu_state.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    if self.time.frame() % 30 == 0 {
                        window.set_title(&format!(
                            "{} - {:.0} fps - {} sparks",
                            self.config.title,
                            self.time.fps(),
                            self.system.particle_count()
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
