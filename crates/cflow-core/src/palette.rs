#![forbid(unsafe_code)]

//! Per-item color hints used to pick a background when a cover is selected.

use crate::color::Rgb;

/// The storefront a cover came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlatformHint {
    Steam,
    Epic,
    Xbox,
    #[default]
    Other,
}

impl PlatformHint {
    /// Parse a platform name as reported by a library scanner.
    ///
    /// Unknown names map to [`PlatformHint::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "steam" => Self::Steam,
            "epic" | "epic games" | "egs" => Self::Epic,
            "xbox" | "microsoft" | "gamepass" => Self::Xbox,
            _ => Self::Other,
        }
    }

    /// Background accent for this platform.
    #[must_use]
    pub fn accent(self) -> Rgb {
        match self {
            Self::Steam => Rgb::from_hex(0x1b2838),
            Self::Epic => Rgb::from_hex(0x2a2a2a),
            Self::Xbox => Rgb::from_hex(0x0e4b0e),
            Self::Other => Rgb::from_hex(0x1a1a2e),
        }
    }
}

/// What a caller knows about an item's preferred background.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHint {
    pub platform: PlatformHint,
    /// Explicit color (e.g. sampled from the cover art). Wins over the
    /// platform accent.
    pub color: Option<Rgb>,
}

impl ItemHint {
    /// Hint carrying only a platform.
    #[must_use]
    pub const fn platform(platform: PlatformHint) -> Self {
        Self {
            platform,
            color: None,
        }
    }

    /// Hint carrying an explicit color.
    #[must_use]
    pub const fn color(color: Rgb) -> Self {
        Self {
            platform: PlatformHint::Other,
            color: Some(color),
        }
    }

    /// The color to transition the background toward.
    #[must_use]
    pub fn background(&self) -> Rgb {
        self.color.unwrap_or_else(|| self.platform.accent())
    }
}
