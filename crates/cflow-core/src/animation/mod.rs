#![forbid(unsafe_code)]

//! Tick-driven animation.
//!
//! Both components here are resumed by the next call from an external
//! scheduler, never by a timer of their own. Each call is a bounded,
//! non-blocking computation: one tick equals one display refresh, whatever
//! the refresh rate happens to be.
//!
//! - [`interpolator`]: exponential approach of every cover's current
//!   transform toward its target.
//! - [`background`]: fixed-step linear blend between two background colors.

pub mod background;
pub mod interpolator;
