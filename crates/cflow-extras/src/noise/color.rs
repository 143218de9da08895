#![forbid(unsafe_code)]

//! Noise-driven color variation.
//!
//! Shifts each channel of a base color by a small amount taken from three
//! decorrelated slices of the same noise field, so neighbouring covers (or
//! successive ticks) get related but distinct tints.

use cflow_core::color::Rgb;

use super::simplex::SimplexNoise;

/// Z offsets separating the three channel slices.
const CHANNEL_OFFSETS: [f64; 3] = [0.0, 17.31, 43.97];

/// Applies bounded, noise-driven tint offsets to colors.
#[derive(Debug, Clone)]
pub struct ColorJitter {
    noise: SimplexNoise,
    /// Largest per-channel shift, in channel units.
    amplitude: f64,
    /// Input scale applied to the sample coordinates.
    frequency: f64,
}

impl ColorJitter {
    #[must_use]
    pub fn new(noise: SimplexNoise) -> Self {
        Self {
            noise,
            amplitude: 0.05,
            frequency: 0.35,
        }
    }

    /// Set the maximum channel shift (builder pattern). Clamped to `[0, 1]`.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude.clamp(0.0, 1.0);
        self
    }

    /// Set the sampling frequency (builder pattern).
    #[must_use]
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Tint `base` using the field at `(u, v)` and time slice `t`.
    ///
    /// Channels are clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(&self, base: Rgb, u: f64, v: f64, t: f64) -> Rgb {
        let (x, y) = (u * self.frequency, v * self.frequency);
        let shift = |offset: f64| {
            (self.noise.evaluate(x, y, t + offset) * self.amplitude).clamp(-1.0, 1.0)
        };
        Rgb::new(
            (base.r + shift(CHANNEL_OFFSETS[0])).clamp(0.0, 1.0),
            (base.g + shift(CHANNEL_OFFSETS[1])).clamp(0.0, 1.0),
            (base.b + shift(CHANNEL_OFFSETS[2])).clamp(0.0, 1.0),
        )
    }
}
