#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Scene coordinates are right-handed: X grows to the right, Y grows up and
//! Z grows toward the viewer, so covers pushed "into" the screen have a
//! negative Z.

/// A point or offset in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }
}

/// The visual state of one cover: everything a transform sink accepts.
///
/// Rotation is about the Y axis only, in radians. Scale is uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin, unrotated, unit scale, fully opaque.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Create a transform from its parts.
    #[inline]
    pub const fn new(position: Vec3, rotation_y: f64, scale: f64, opacity: f64) -> Self {
        Self {
            position,
            rotation_y,
            scale,
            opacity,
        }
    }

    /// Move every field a fraction `rate` of the way toward `target`.
    ///
    /// `rate == 1.0` lands exactly on the target.
    #[inline]
    pub fn approach(&mut self, target: &Self, rate: f64) {
        if rate >= 1.0 {
            *self = *target;
            return;
        }
        self.position.x += (target.position.x - self.position.x) * rate;
        self.position.y += (target.position.y - self.position.y) * rate;
        self.position.z += (target.position.z - self.position.z) * rate;
        self.rotation_y += (target.rotation_y - self.rotation_y) * rate;
        self.scale += (target.scale - self.scale) * rate;
        self.opacity += (target.opacity - self.opacity) * rate;
    }

    /// Largest absolute per-field difference from `other`.
    #[must_use]
    pub fn max_delta(&self, other: &Self) -> f64 {
        [
            self.position.x - other.position.x,
            self.position.y - other.position.y,
            self.position.z - other.position.z,
            self.rotation_y - other.rotation_y,
            self.scale - other.scale,
            self.opacity - other.opacity,
        ]
        .into_iter()
        .fold(0.0_f64, |acc, d| acc.max(d.abs()))
    }

    /// Whether every field is within `threshold` of `other`.
    #[inline]
    #[must_use]
    pub fn is_near(&self, other: &Self, threshold: f64) -> bool {
        self.max_delta(other) <= threshold
    }

    /// Derive the floor reflection of this transform.
    ///
    /// X, Z, rotation and scale are copied; Y is mirrored below the floor
    /// plane; opacity is dampened.
    #[must_use]
    pub fn reflection(&self, params: &ReflectionParams) -> Self {
        Self {
            position: Vec3::new(
                self.position.x,
                -self.position.y - params.gap,
                self.position.z,
            ),
            rotation_y: self.rotation_y,
            scale: self.scale,
            opacity: self.opacity * params.opacity_factor,
        }
    }
}

/// How a reflection is placed relative to its cover.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflectionParams {
    /// Distance below the mirrored Y at which the reflection sits
    /// (one cover height by default).
    pub gap: f64,
    /// Multiplier applied to the cover's opacity.
    pub opacity_factor: f64,
}

impl Default for ReflectionParams {
    fn default() -> Self {
        Self {
            gap: 2.0,
            opacity_factor: 0.3,
        }
    }
}
