#![forbid(unsafe_code)]

//! Runtime: navigation, configuration, and the per-tick engine.
//!
//! # Role in Coverflow
//! `cflow-runtime` owns the selection and drives animation. It turns
//! navigation requests into new layout targets, steps covers and the
//! background once per tick, and hands the results to a host through the
//! traits in [`host`].
//!
//! # Primary responsibilities
//! - **NavigationController**: wrap/clamp moves, jumps, random picks.
//! - **Coverflow**: composes solver, interpolator, navigator, and background.
//! - **CoverflowConfig**: validated tunables, optionally loaded from files.
//!
//! # Logging
//! Events are emitted with `tracing` under the `cflow.nav`, `cflow.tick`,
//! and `cflow.background` targets. Each tick runs inside a `cflow.tick` span.

pub mod config;
pub mod engine;
pub mod host;
pub mod navigation;

pub use config::{
    AnimationConfig, BackgroundConfig, ConfigError, CoverflowConfig, LayoutConfig,
    NavigationConfig, ReflectionConfig,
};
pub use engine::{Coverflow, CoverflowState, TickStatus};
pub use host::{ColorSink, CoverflowHost, RecordingHost, SelectionListener, TransformSink};
pub use navigation::{Direction, EdgePolicy, NavigationController, SelectionState};
