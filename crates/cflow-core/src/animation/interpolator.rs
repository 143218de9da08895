#![forbid(unsafe_code)]

//! Exponential per-tick approach of current transforms toward targets.
//!
//! Every numeric field moves by the same fraction of its remaining distance:
//!
//!   current += (target - current) × rate
//!
//! # Invariants
//!
//! 1. `rate` is always in `[MIN_RATE, 1.0]` (clamped on construction).
//! 2. A step reports "still converging" iff, after the update, some field of
//!    some cover differs from its target by more than the threshold.
//! 3. [`StepMode::Immediate`] writes `current = target` exactly and always
//!    reports settled.
//!
//! # Failure Modes
//!
//! - Very small rate: convergence takes proportionally more ticks. Rates
//!   below [`MIN_RATE`] are raised so the threshold is always crossed.
//! - Non-finite rate: replaced by `1.0` (snap).
//! - Threshold below [`MIN_THRESHOLD`]: raised to it.
//! - Mismatched slice lengths in [`Interpolator::step_transforms`]: the
//!   shorter length wins; extra entries are left untouched.

use crate::geometry::Transform;
use crate::item::CoverItem;

/// Per-field distance below which a cover counts as settled.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Default fraction of the remaining distance covered per tick.
pub const DEFAULT_RATE: f64 = 0.1;

/// Smallest accepted rate.
pub const MIN_RATE: f64 = 0.01;

/// Smallest accepted convergence threshold.
///
/// Below this the approach can stall one ulp away from a target and never
/// report settled.
pub const MIN_THRESHOLD: f64 = 1e-9;

/// How a step moves the current transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Exponential approach by `rate`.
    #[default]
    Smooth,
    /// Snap straight to the target (initial placement, layout mode switches).
    Immediate,
}

/// Advances current transforms toward their targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator {
    rate: f64,
    threshold: f64,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

impl Interpolator {
    /// Create an interpolator. `rate` is clamped to `[MIN_RATE, 1.0]`.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(MIN_RATE, 1.0)
        } else {
            1.0
        };
        Self {
            rate,
            threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }

    /// Set the convergence threshold (builder pattern).
    ///
    /// The magnitude is raised to at least [`MIN_THRESHOLD`]; a non-finite
    /// value keeps the default.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_finite() {
            threshold.abs().max(MIN_THRESHOLD)
        } else {
            DEFAULT_CONVERGENCE_THRESHOLD
        };
        self
    }

    #[inline]
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Advance every cover toward its own target.
    ///
    /// Returns `true` while any cover is still converging.
    pub fn step(&self, items: &mut [CoverItem], mode: StepMode) -> bool {
        let mut converging = false;
        for item in items.iter_mut() {
            converging |= self.advance(&mut item.current, &item.target, mode);
        }
        converging
    }

    /// Advance `current[i]` toward `targets[i]` for parallel slices.
    ///
    /// Returns `true` while any transform is still converging.
    pub fn step_transforms(
        &self,
        current: &mut [Transform],
        targets: &[Transform],
        mode: StepMode,
    ) -> bool {
        let mut converging = false;
        for (cur, target) in current.iter_mut().zip(targets) {
            converging |= self.advance(cur, target, mode);
        }
        converging
    }

    /// Whether any cover is further than the threshold from its target,
    /// without moving anything.
    #[must_use]
    pub fn is_converging(&self, items: &[CoverItem]) -> bool {
        items.iter().any(|item| !item.is_settled(self.threshold))
    }

    fn advance(&self, current: &mut Transform, target: &Transform, mode: StepMode) -> bool {
        match mode {
            StepMode::Immediate => {
                *current = *target;
                false
            }
            StepMode::Smooth => {
                current.approach(target, self.rate);
                !current.is_near(target, self.threshold)
            }
        }
    }
}
