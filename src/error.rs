//! Error types for the fireworks host.
//!
//! The simulation itself never fails: out-of-frame particles are culled
//! silently. These errors cover the window, the GPU presenter and frame
//! capture.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur while writing a frame to disk.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Failed to encode the frame.
    #[error("Failed to encode frame {path}: {source}")]
    Encode {
        /// Destination that could not be written.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Failed to prepare the capture directory.
    #[error("Failed to prepare capture directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when running the fireworks window.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
