//! Fixed-point coordinates with 8 fractional bits.
//!
//! All particle motion is integrated in integer units where one logical pixel
//! equals 256 raw units. Pixel mapping is an arithmetic right shift, so
//! negative coordinates floor toward negative infinity (`-1` raw is pixel `-1`).
//!
//! Pixel coordinates must lie within [`MIN_PIXEL`]`..=`[`MAX_PIXEL`] to be
//! representable. Arithmetic wraps on overflow instead of panicking, so values
//! outside that range are meaningless but never abort a frame.
//!
//! ```
//! use hanabi::fixed::Fixed;
//!
//! let x = Fixed::from_pixel(400);
//! assert_eq!(x.raw(), 400 << 8);
//! assert_eq!(x.to_pixel(), 400);
//! ```

use glam::IVec2;
use std::ops::{Add, AddAssign};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 8;

/// Raw units per logical pixel.
pub const ONE: i32 = 1 << FRAC_BITS;

/// Smallest representable whole pixel coordinate.
pub const MIN_PIXEL: i32 = i32::MIN >> FRAC_BITS;

/// Largest representable whole pixel coordinate.
pub const MAX_PIXEL: i32 = i32::MAX >> FRAC_BITS;

/// A fixed-point scalar (Q23.8 stored in an `i32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// Wrap a raw fixed-point value.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// Convert a whole pixel coordinate to fixed-point.
    ///
    /// Pixels outside [`MIN_PIXEL`]`..=`[`MAX_PIXEL`] wrap.
    #[inline]
    pub const fn from_pixel(pixel: i32) -> Self {
        Fixed(pixel.wrapping_shl(FRAC_BITS))
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Logical pixel coordinate (`raw >> 8`).
    #[inline]
    pub const fn to_pixel(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// `raw * percent / 100`, truncated toward zero.
    #[inline]
    pub const fn scale_percent(self, percent: i32) -> Self {
        Fixed(scale_raw(self.0, percent))
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

/// Product computed in 64 bits so large coordinates do not overflow.
#[inline]
const fn scale_raw(raw: i32, percent: i32) -> i32 {
    (raw as i64 * percent as i64 / 100) as i32
}

/// A 2D fixed-point vector, stored as raw units in an [`IVec2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedVec2(IVec2);

impl FixedVec2 {
    pub const ZERO: FixedVec2 = FixedVec2(IVec2::ZERO);

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        FixedVec2(IVec2::new(x.raw(), y.raw()))
    }

    /// Build from raw fixed-point components.
    #[inline]
    pub const fn from_raw(x: i32, y: i32) -> Self {
        FixedVec2(IVec2::new(x, y))
    }

    /// Build from whole pixel coordinates.
    #[inline]
    pub const fn from_pixels(x: i32, y: i32) -> Self {
        FixedVec2(IVec2::new(
            x.wrapping_shl(FRAC_BITS),
            y.wrapping_shl(FRAC_BITS),
        ))
    }

    /// Velocity of magnitude `speed` (raw units) pointing at `degrees`.
    ///
    /// Components are rounded to the nearest raw unit.
    pub fn from_polar(speed: i32, degrees: i32) -> Self {
        let radians = (degrees as f64).to_radians();
        let speed = speed as f64;
        FixedVec2(IVec2::new(
            (speed * radians.cos()).round() as i32,
            (speed * radians.sin()).round() as i32,
        ))
    }

    #[inline]
    pub const fn x(self) -> Fixed {
        Fixed(self.0.x)
    }

    #[inline]
    pub const fn y(self) -> Fixed {
        Fixed(self.0.y)
    }

    #[inline]
    pub fn set_y(&mut self, y: Fixed) {
        self.0.y = y.raw();
    }

    /// Raw storage.
    #[inline]
    pub const fn raw(self) -> IVec2 {
        self.0
    }

    /// Logical pixel position of both components.
    #[inline]
    pub fn to_pixel(self) -> IVec2 {
        IVec2::new(self.x().to_pixel(), self.y().to_pixel())
    }

    /// Component-wise [`Fixed::scale_percent`].
    #[inline]
    pub const fn scale_percent(self, percent: i32) -> Self {
        FixedVec2(IVec2::new(
            scale_raw(self.0.x, percent),
            scale_raw(self.0.y, percent),
        ))
    }

    /// Euclidean length in raw units.
    pub fn length(self) -> f64 {
        let x = self.0.x as f64;
        let y = self.0.y as f64;
        (x * x + y * y).sqrt()
    }
}

impl Add for FixedVec2 {
    type Output = FixedVec2;

    #[inline]
    fn add(self, rhs: FixedVec2) -> FixedVec2 {
        FixedVec2(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for FixedVec2 {
    #[inline]
    fn add_assign(&mut self, rhs: FixedVec2) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}
