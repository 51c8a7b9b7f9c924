//! Raster surfaces the fireworks are composited onto.
//!
//! [`Surface`] is the small immediate-mode interface the simulation draws
//! through: a fill color, a global alpha, a blend mode, rectangles and a full
//! clear. [`PixelBuffer`] implements it on the CPU with RGBA8 storage that can
//! be uploaded to a GPU texture or written to a PNG as-is.

use crate::error::CaptureError;
use crate::visuals::BlendMode;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::path::Path;

/// Immediate-mode 2D drawing target.
///
/// Coordinates are whole pixels with the origin at the top-left corner.
/// Rectangles partially or fully outside the raster are clipped.
pub trait Surface {
    /// Raster width in pixels.
    fn width(&self) -> u32;

    /// Raster height in pixels.
    fn height(&self) -> u32;

    /// Select how subsequent fills combine with existing pixels.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Set the RGB color (0..1) for subsequent fills.
    fn set_fill_color(&mut self, color: Vec3);

    /// Set the opacity (0..1) for subsequent fills.
    fn set_alpha(&mut self, alpha: f32);

    /// Fill a `w`×`h` rectangle whose top-left corner is (`x`, `y`).
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Overwrite every pixel with an opaque color, ignoring blend mode and alpha.
    fn clear(&mut self, color: Vec3);
}

/// One RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8 { r: 0, g: 0, b: 0, a: 255 };

    /// Opaque pixel from a 0..1 RGB color.
    pub fn opaque(color: Vec3) -> Self {
        Rgba8 {
            r: to_channel(color.x),
            g: to_channel(color.y),
            b: to_channel(color.z),
            a: 255,
        }
    }

    /// The RGB channels as 0..1 floats.
    pub fn rgb(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// CPU raster implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    blend_mode: BlendMode,
    fill_color: Vec3,
    alpha: f32,
}

impl PixelBuffer {
    /// Create a buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::BLACK; (width * height) as usize],
            blend_mode: BlendMode::Replace,
            fill_color: Vec3::ONE,
            alpha: 1.0,
        }
    }

    /// Pixel at (`x`, `y`), or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major (`width * height * 4` bytes).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Current fill opacity.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether every pixel equals `color`.
    pub fn is_filled_with(&self, color: Rgba8) -> bool {
        self.pixels.iter().all(|p| *p == color)
    }

    /// Write the current frame to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CaptureError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|source| CaptureError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn blend(&self, dst: Rgba8) -> Rgba8 {
        let src = self.fill_color;
        let dst_rgb = dst.rgb();
        let out = match self.blend_mode {
            BlendMode::Replace => src * self.alpha + dst_rgb * (1.0 - self.alpha),
            BlendMode::Additive => (dst_rgb + src * self.alpha).min(Vec3::ONE),
        };
        Rgba8::opaque(out)
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    fn set_fill_color(&mut self, color: Vec3) {
        self.fill_color = color;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in y0..y1 {
            let start = (row * self.width as i64) as usize;
            for col in x0..x1 {
                let i = start + col as usize;
                self.pixels[i] = self.blend(self.pixels[i]);
            }
        }
    }

    fn clear(&mut self, color: Vec3) {
        self.pixels.fill(Rgba8::opaque(color));
    }
}
