//! Colors and compositing modes used when drawing fireworks.
//!
//! Rendering is additive: overlapping sparks brighten each other, so a dense
//! burst core washes out toward white while the sparse outer shell keeps its
//! hue.
//!
//! ```
//! use hanabi::visuals::{BlendMode, Palette};
//!
//! let gold = Palette::color(0);
//! assert!(gold.x > gold.z);
//! assert_eq!(BlendMode::default(), BlendMode::Replace);
//! ```

use glam::Vec3;

/// Blend mode for surface fills.
///
/// Mirrors the two compositing modes a 2D canvas offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard source-over alpha blending (default).
    ///
    /// `dst = src * alpha + dst * (1 - alpha)`.
    #[default]
    Replace,

    /// Additive ("lighter") blending.
    ///
    /// `dst = min(1, dst + src * alpha)`. Used for all particle drawing so
    /// trails and sparks glow where they overlap.
    Additive,
}

/// Opaque black, the night sky.
pub const BACKGROUND: Vec3 = Vec3::ZERO;

/// The fixed firework palette.
///
/// Index 0 doubles as the rising-shell color: every launch particle and every
/// trail it leaves is drawn in it.
pub struct Palette;

impl Palette {
    /// Number of palette entries.
    pub const LEN: usize = 4;

    /// 8-bit sRGB stops: gold, orange, blue, green.
    pub const RGB8: [[u8; 3]; Self::LEN] = [
        [0xff, 0xdd, 0x55],
        [0xff, 0x66, 0x22],
        [0x22, 0x55, 0xff],
        [0x44, 0xff, 0x44],
    ];

    /// Palette entry as an RGB color in 0..1.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Palette::LEN`.
    pub fn color(index: usize) -> Vec3 {
        rgb8(Self::RGB8[index])
    }

    /// All palette entries as RGB colors.
    pub fn colors() -> [Vec3; Self::LEN] {
        Self::RGB8.map(rgb8)
    }
}

/// Convert an 8-bit RGB triple to 0..1 floats.
pub fn rgb8([r, g, b]: [u8; 3]) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}
