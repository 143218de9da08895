#![forbid(unsafe_code)]

//! Core: transforms, colors, and tick-driven animation primitives.
//!
//! # Role in Coverflow
//! `cflow-core` is the value layer. It owns the numeric shapes every other
//! crate passes around (positions, per-cover transforms, background colors)
//! and the two components that make progress across ticks: the
//! [`Interpolator`](animation::interpolator::Interpolator) and the
//! [`BackgroundTransition`](animation::background::BackgroundTransition).
//!
//! # Primary responsibilities
//! - **Transform**: position, Y rotation, uniform scale, opacity.
//! - **Reflection**: derived synchronously from a cover's current transform.
//! - **Rgb**: linear color blending for background transitions.
//! - **CoverItem**: current + target transform for one cover.
//!
//! # How it fits in the system
//! `cflow-layout` produces target transforms, `cflow-runtime` owns the
//! selection and drives one tick per display refresh. Nothing in this crate
//! schedules itself or reads a clock.

pub mod animation;
pub mod color;
pub mod geometry;
pub mod item;
pub mod palette;

pub use animation::background::{BackgroundTransition, TransitionState};
pub use animation::interpolator::{Interpolator, StepMode};
pub use color::Rgb;
pub use geometry::{ReflectionParams, Transform, Vec3};
pub use item::CoverItem;
pub use palette::{ItemHint, PlatformHint};
