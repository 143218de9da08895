#![forbid(unsafe_code)]

//! Feature-gated extras for Coverflow.
//!
//! - `noise`: deterministic 3D simplex noise over a seeded permutation table.
//! - `noise-color`: noise-driven jitter of `cflow_core::color::Rgb` values.

#[cfg(feature = "noise")]
pub mod noise;
