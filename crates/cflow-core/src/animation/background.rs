#![forbid(unsafe_code)]

//! Background color transition.
//!
//! A two-state machine (`Idle`, `Transitioning`) that blends the current
//! background toward a target over a fixed number of ticks.
//!
//! # Invariants
//!
//! 1. `target().is_none()` iff the state is [`TransitionState::Idle`].
//! 2. `progress()` is in `[0, 1)` whenever observed between ticks.
//! 3. The tick that pushes progress to `>= 1` emits the target exactly and
//!    returns the machine to `Idle` with `current == target`.
//! 4. Retargeting while transitioning overwrites the target and restarts
//!    progress from zero; the blend origin stays at `current`. Pending
//!    targets are never queued.
//!
//! # Failure Modes
//!
//! - Non-positive or non-finite step: raised to [`MIN_STEP`] so the
//!   transition always completes.

use crate::color::Rgb;

/// Progress added per tick (about 50 ticks per transition).
pub const DEFAULT_STEP: f64 = 0.02;

/// Smallest accepted step.
pub const MIN_STEP: f64 = 1e-4;

/// Whether a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning,
}

/// Blends the background from `current` toward `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundTransition {
    current: Option<Rgb>,
    target: Option<Rgb>,
    progress: f64,
    step: f64,
}

impl Default for BackgroundTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundTransition {
    /// An idle transition with no known current color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            target: None,
            progress: 0.0,
            step: DEFAULT_STEP,
        }
    }

    /// Set the per-tick step (builder pattern). Clamped to `[MIN_STEP, 1]`.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = if step.is_finite() {
            step.clamp(MIN_STEP, 1.0)
        } else {
            MIN_STEP
        };
        self
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> TransitionState {
        if self.target.is_some() {
            TransitionState::Transitioning
        } else {
            TransitionState::Idle
        }
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }

    /// Blend origin; `None` until the first retarget.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<Rgb> {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<Rgb> {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start (or restart) a transition toward `color`.
    ///
    /// `present` is the color currently on screen; it seeds the blend origin
    /// the first time a transition is requested.
    pub fn retarget(&mut self, color: Rgb, present: Rgb) {
        if self.current.is_none() {
            self.current = Some(present);
        }
        self.target = Some(color);
        self.progress = 0.0;
    }

    /// Drop the pending target without reaching it.
    pub fn cancel(&mut self) {
        self.target = None;
        self.progress = 0.0;
    }

    /// Advance one tick. Returns the color to display, or `None` when idle.
    pub fn tick(&mut self) -> Option<Rgb> {
        let target = self.target?;
        self.progress += self.step;
        if self.progress >= 1.0 {
            self.current = Some(target);
            self.target = None;
            self.progress = 0.0;
            return Some(target);
        }
        let from = self.current.unwrap_or(target);
        Some(from.lerp(target, self.progress))
    }
}
