#![forbid(unsafe_code)]

//! Configuration for the Coverflow engine.
//!
//! Captures every tunable as a single [`CoverflowConfig`] that can be built in
//! code or, with the `config-file` feature, loaded from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # coverflow.toml
//! [layout]
//! spacing = 0.9
//! zoom_on_select = false
//!
//! [animation]
//! animation_rate = 0.15
//!
//! [navigation]
//! wrap_navigation = false
//! ```
//!
//! ```rust,ignore
//! let config = CoverflowConfig::from_toml_file("coverflow.toml")?;
//! let config = CoverflowConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `CoverflowConfig::default()` reproduces the component defaults exactly
//! (layout constants, 0.001 convergence threshold, 0.02 background step).
//!
//! # Validation
//!
//! Loaders and [`CoverflowConfig::validated`] reject non-finite values, an
//! animation rate outside `(0, 1]`, and floors outside `[0, 1]`, so an invalid
//! configuration never reaches the tick loop.

#[cfg(feature = "config-file")]
use std::path::Path;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

use cflow_core::animation::background::DEFAULT_STEP;
use cflow_core::animation::interpolator::{
    DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_RATE, MIN_THRESHOLD,
};
use cflow_core::geometry::ReflectionParams;
use cflow_layout::{LayoutMode, LayoutParams};

use crate::navigation::EdgePolicy;

// ---------------------------------------------------------------------------
// Top-level CoverflowConfig
// ---------------------------------------------------------------------------

/// Every tunable of the engine.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct CoverflowConfig {
    /// Target-transform solver parameters.
    pub layout: LayoutConfig,

    /// Floor reflection placement.
    pub reflection: ReflectionConfig,

    /// Per-tick interpolation.
    pub animation: AnimationConfig,

    /// Edge behaviour of directional moves.
    pub navigation: NavigationConfig,

    /// Background color transitions.
    pub background: BackgroundConfig,
}

impl CoverflowConfig {
    /// Load from a TOML string. The result is validated.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk. The result is validated.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string. The result is validated.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk. The result is validated.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSer)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let l = &self.layout;

        for (name, value) in [
            ("layout.spacing", l.spacing),
            ("layout.side_offset", l.side_offset),
            ("layout.depth_offset", l.depth_offset),
            ("layout.side_angle", l.side_angle),
            ("layout.base_y", l.base_y),
            ("reflection.gap", self.reflection.gap),
        ] {
            if !value.is_finite() {
                errors.push(format!("{name} must be finite, got {value}"));
            }
        }

        for (name, value) in [
            ("layout.zoom_factor", l.zoom_factor),
            ("layout.flat_side_scale", l.flat_side_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                errors.push(format!("{name} must be > 0, got {value}"));
            }
        }

        for (name, value) in [
            ("layout.scale_falloff", l.scale_falloff),
            ("layout.opacity_falloff", l.opacity_falloff),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }

        for (name, value) in [
            ("layout.base_scale_floor", l.base_scale_floor),
            ("layout.base_opacity_floor", l.base_opacity_floor),
            ("reflection.opacity_factor", self.reflection.opacity_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("{name} must be in [0, 1], got {value}"));
            }
        }

        // Interpolation rate in (0, 1]
        let rate = self.animation.animation_rate;
        if !(rate > 0.0 && rate <= 1.0) {
            errors.push(format!("animation.animation_rate must be in (0, 1], got {rate}"));
        }

        let threshold = self.animation.convergence_threshold;
        if !(threshold.is_finite() && threshold >= MIN_THRESHOLD) {
            errors.push(format!(
                "animation.convergence_threshold must be >= {MIN_THRESHOLD:e}, got {threshold}"
            ));
        }

        let step = self.background.step;
        if !(step > 0.0 && step <= 1.0) {
            errors.push(format!("background.step must be in (0, 1], got {step}"));
        }

        errors
    }

    /// Return `self` if it validates, otherwise every violation.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Solver parameters.
    #[must_use]
    pub fn to_layout_params(&self) -> LayoutParams {
        let l = &self.layout;
        LayoutParams {
            mode: l.mode,
            spacing: l.spacing,
            side_offset: l.side_offset,
            depth_offset: l.depth_offset,
            side_angle: l.side_angle,
            base_y: l.base_y,
            zoom_factor: l.zoom_factor,
            zoom_on_select: l.zoom_on_select,
            min_scale: l.base_scale_floor,
            scale_falloff: l.scale_falloff,
            min_opacity: l.base_opacity_floor,
            opacity_falloff: l.opacity_falloff,
            flat_side_scale: l.flat_side_scale,
        }
    }

    /// Reflection placement, or `None` when reflections are disabled.
    #[must_use]
    pub fn to_reflection_params(&self) -> Option<ReflectionParams> {
        self.reflection.enabled.then_some(ReflectionParams {
            gap: self.reflection.gap,
            opacity_factor: self.reflection.opacity_factor,
        })
    }

    /// Edge policy for directional moves.
    #[must_use]
    pub fn edge_policy(&self) -> EdgePolicy {
        if self.navigation.wrap_navigation {
            EdgePolicy::Wrap
        } else {
            EdgePolicy::Clamp
        }
    }
}

// ---------------------------------------------------------------------------
// Section configs
// ---------------------------------------------------------------------------

/// Layout section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct LayoutConfig {
    /// Zoom or flat layout.
    pub mode: LayoutMode,
    /// Gap between non-selected covers.
    pub spacing: f64,
    /// X distance from the selected cover to its first neighbour.
    pub side_offset: f64,
    /// Z step per unit of offset.
    pub depth_offset: f64,
    /// Y rotation of side covers in radians.
    pub side_angle: f64,
    /// Y of every cover.
    pub base_y: f64,
    /// Selected-cover scale in the zoom layout.
    pub zoom_factor: f64,
    /// Enlarge the selected cover.
    pub zoom_on_select: bool,
    /// Lower bound of side-cover scale.
    pub base_scale_floor: f64,
    /// Scale lost per unit of offset.
    pub scale_falloff: f64,
    /// Lower bound of side-cover opacity.
    pub base_opacity_floor: f64,
    /// Opacity lost per unit of offset.
    pub opacity_falloff: f64,
    /// Side-cover scale in the flat layout.
    pub flat_side_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let p = LayoutParams::default();
        Self {
            mode: p.mode,
            spacing: p.spacing,
            side_offset: p.side_offset,
            depth_offset: p.depth_offset,
            side_angle: p.side_angle,
            base_y: p.base_y,
            zoom_factor: p.zoom_factor,
            zoom_on_select: p.zoom_on_select,
            base_scale_floor: p.min_scale,
            scale_falloff: p.scale_falloff,
            base_opacity_floor: p.min_opacity,
            opacity_falloff: p.opacity_falloff,
            flat_side_scale: p.flat_side_scale,
        }
    }
}

/// Reflection section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct ReflectionConfig {
    /// Emit reflection transforms.
    pub enabled: bool,
    /// Distance below the mirrored Y.
    pub gap: f64,
    /// Opacity multiplier.
    pub opacity_factor: f64,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        let p = ReflectionParams::default();
        Self {
            enabled: true,
            gap: p.gap,
            opacity_factor: p.opacity_factor,
        }
    }
}

/// Animation section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct AnimationConfig {
    /// Fraction of the remaining distance covered per tick, in `(0, 1]`.
    pub animation_rate: f64,
    /// Per-field distance below which a cover counts as settled.
    pub convergence_threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animation_rate: DEFAULT_RATE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

/// Navigation section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct NavigationConfig {
    /// Wrap past either end instead of stopping.
    pub wrap_navigation: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wrap_navigation: true,
        }
    }
}

/// Background section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct BackgroundConfig {
    /// Retarget the background color on every navigation.
    pub dynamic_background: bool,
    /// Transition progress added per tick, in `(0, 1]`.
    pub step: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            dynamic_background: true,
            step: DEFAULT_STEP,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when building or loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config-file")]
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::TomlSer(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::TomlSer(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
