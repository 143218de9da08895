#![forbid(unsafe_code)]

//! Linear RGB colors with channels in `[0.0, 1.0]`.

/// A background color.
///
/// Channels are stored as `f64` so a completed transition can hand back the
/// exact target it was given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from float channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Pack into `0xRRGGBB`, rounding and clamping each channel.
    #[must_use]
    pub fn to_hex(self) -> u32 {
        let q = |c: f64| -> u32 { (c.clamp(0.0, 1.0) * 255.0).round() as u32 };
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Linear blend toward `other`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}
