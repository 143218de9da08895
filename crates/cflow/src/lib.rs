#![forbid(unsafe_code)]

//! Coverflow public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude. A typical host implements the three sink traits, builds a
//! [`Coverflow`], forwards input as navigation calls, and calls
//! [`Coverflow::tick`] once per display refresh.
//!
//! ```ignore
//! use cflow::prelude::*;
//!
//! let hints = ["steam", "epic", "xbox"]
//!     .map(|name| ItemHint::platform(PlatformHint::from_name(name)));
//! let mut carousel = Coverflow::new(CoverflowConfig::default(), hints, RecordingHost::new())?;
//! carousel.navigate(Direction::Next);
//! while !carousel.tick().is_idle() {}
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cflow_core::animation::background::{BackgroundTransition, TransitionState};
pub use cflow_core::animation::interpolator::{Interpolator, StepMode};
pub use cflow_core::color::Rgb;
pub use cflow_core::geometry::{ReflectionParams, Transform, Vec3};
pub use cflow_core::item::CoverItem;
pub use cflow_core::palette::{ItemHint, PlatformHint};

// --- Layout re-exports -----------------------------------------------------

pub use cflow_layout::{LayoutMode, LayoutParams, LayoutSolver};

// --- Runtime re-exports ----------------------------------------------------

pub use cflow_runtime::{
    ColorSink, ConfigError, Coverflow, CoverflowConfig, CoverflowHost, CoverflowState, Direction,
    EdgePolicy, NavigationController, RecordingHost, SelectionListener, SelectionState,
    TickStatus, TransformSink,
};

// --- Extras re-exports -----------------------------------------------------

#[cfg(feature = "extras")]
pub use cflow_extras::noise::{FractalParams, PermutationTable, SimplexNoise};

#[cfg(feature = "noise-color")]
pub use cflow_extras::noise::color::ColorJitter;

// --- Errors ---------------------------------------------------------------

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// Invalid or unreadable configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Config(ConfigError::Io(err))
    }
}

/// Standard result type for cflow APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ColorSink, Coverflow, CoverflowConfig, CoverflowHost, Direction, Error, ItemHint,
        LayoutMode, PlatformHint, RecordingHost, Result, Rgb, SelectionListener, TickStatus,
        Transform, TransformSink,
    };

    pub use crate::{core, layout, runtime};

    #[cfg(feature = "extras")]
    pub use crate::extras;
}

pub use cflow_core as core;
#[cfg(feature = "extras")]
pub use cflow_extras as extras;
pub use cflow_layout as layout;
pub use cflow_runtime as runtime;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn build(config: CoverflowConfig) -> Result<Coverflow<RecordingHost>> {
        let hints = [PlatformHint::Steam, PlatformHint::Xbox].map(ItemHint::platform);
        Ok(Coverflow::new(config, hints, RecordingHost::new())?)
    }

    #[test]
    fn config_errors_convert() {
        let mut config = CoverflowConfig::default();
        config.animation.animation_rate = -1.0;
        let err = build(config).unwrap_err();
        assert!(matches!(err, Error::Config(crate::ConfigError::Validation(_))));
        assert!(err.to_string().contains("animation_rate"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn prelude_drives_a_carousel() {
        let mut cf = build(CoverflowConfig::default()).expect("valid");
        assert!(cf.navigate(Direction::Next));
        let mut ticks = 0;
        while !cf.tick().is_idle() {
            ticks += 1;
            assert!(ticks < 1_000, "carousel never settled");
        }
        assert_eq!(cf.selection().current_index, 1);
        assert_eq!(cf.host().present_color(), PlatformHint::Xbox.accent());
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::other("disk").into();
        assert!(err.to_string().contains("disk"));
    }
}
