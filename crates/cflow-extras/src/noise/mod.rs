#![forbid(unsafe_code)]

//! Procedural gradient noise.
//!
//! A [`SimplexNoise`] evaluates a continuous pseudo-random scalar field over
//! 3D space. The field is fully determined by its [`PermutationTable`]: two
//! generators built from equal tables return bit-identical values for the same
//! input, and evaluation never mutates the generator.
//!
//! # Design Goals
//!
//! - **Pure functions**: `evaluate` reads the table and nothing else.
//! - **Deterministic**: tables come from an explicit RNG or seed; use
//!   [`PermutationTable::from_entropy`] only when reproducibility is not
//!   wanted.
//! - **Total**: every finite input produces a finite value in roughly
//!   `[-1, 1]`. Output is not clamped.
//!
//! ```ignore
//! use cflow_extras::noise::{PermutationTable, SimplexNoise};
//!
//! let noise = SimplexNoise::new(PermutationTable::with_seed(7));
//! let v = noise.evaluate(0.3, 1.7, 42.0);
//! assert!((-1.0..=1.0).contains(&v));
//! ```

#[cfg(feature = "noise-color")]
pub mod color;
pub mod permutation;
pub mod simplex;

pub use permutation::PermutationTable;
pub use simplex::{FractalParams, GRADIENTS, SimplexNoise};
