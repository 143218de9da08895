#![forbid(unsafe_code)]

//! Target-transform solver for a row of covers.
//!
//! Given the selected index, every cover's target transform is a pure
//! function of its signed offset `d = index - selected`. Two layouts are
//! supported; they are not algebraically equivalent and are selected with
//! [`LayoutMode`].
//!
//! # Zoom layout
//!
//! ```text
//! d == 0:  pos (0, base_y, 0), rot 0, scale zoom_factor (or 1.0), opacity 1
//! d != 0:  side = sign(d), n = |d|
//!          x = side * (side_offset + (n - 1) * spacing)
//!          z = -depth_offset * n
//!          rot = side * side_angle
//!          scale = max(min_scale, 1 - n * scale_falloff)
//!          opacity = max(min_opacity, 1 - n * opacity_falloff)
//! ```
//!
//! # Flat layout
//!
//! ```text
//! d == 0:  pos (0, base_y, 0), rot 0, scale 1, opacity 1
//! d != 0:  x = d * spacing + side * side_offset
//!          z = |d| * depth_offset
//!          rot = side * side_angle, scale = flat_side_scale, opacity 1
//! ```

use cflow_core::geometry::{Transform, Vec3};
use cflow_core::item::CoverItem;
use serde::{Deserialize, Serialize};

pub use cflow_core::geometry::ReflectionParams;

/// Which layout formula the solver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Depth-receding row with scale and opacity falloff.
    #[default]
    Zoom,
    /// Evenly spaced row with a fixed side scale and no opacity falloff.
    Flat,
}

/// Numeric parameters shared by both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub mode: LayoutMode,
    /// Gap between consecutive non-selected covers.
    pub spacing: f64,
    /// X distance from the selected cover to its first neighbour.
    pub side_offset: f64,
    /// Z step per unit of offset.
    pub depth_offset: f64,
    /// Y rotation of side covers, in radians.
    pub side_angle: f64,
    /// Y of every cover.
    pub base_y: f64,
    /// Scale of the selected cover when `zoom_on_select` is on.
    pub zoom_factor: f64,
    pub zoom_on_select: bool,
    /// Lower bound of side-cover scale in the zoom layout.
    pub min_scale: f64,
    pub scale_falloff: f64,
    /// Lower bound of side-cover opacity in the zoom layout.
    pub min_opacity: f64,
    pub opacity_falloff: f64,
    /// Scale of every side cover in the flat layout.
    pub flat_side_scale: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Zoom,
            spacing: 1.1,
            side_offset: 2.0,
            depth_offset: 1.5,
            side_angle: std::f64::consts::FRAC_PI_4,
            base_y: 0.0,
            zoom_factor: 1.3,
            zoom_on_select: true,
            min_scale: 0.5,
            scale_falloff: 0.1,
            min_opacity: 0.3,
            opacity_falloff: 0.2,
            flat_side_scale: 0.8,
        }
    }
}

/// Computes target transforms. Holds parameters only; solving is pure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSolver {
    params: LayoutParams,
}

impl LayoutSolver {
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    #[inline]
    pub fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.params.mode
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.params.mode = mode;
    }

    /// Target transform of the cover at `index` when `selected` is chosen.
    #[must_use]
    pub fn solve_one(&self, index: usize, selected: usize) -> Transform {
        let d = index as i64 - selected as i64;
        match self.params.mode {
            LayoutMode::Zoom => self.zoom(d),
            LayoutMode::Flat => self.flat(d),
        }
    }

    /// Target transforms for `count` covers. Empty when `count == 0`.
    #[must_use]
    pub fn solve(&self, count: usize, selected: usize) -> Vec<Transform> {
        (0..count).map(|i| self.solve_one(i, selected)).collect()
    }

    /// Write each cover's target for the given selection.
    ///
    /// Covers are addressed by their position in the slice.
    pub fn apply(&self, items: &mut [CoverItem], selected: usize) {
        for (i, item) in items.iter_mut().enumerate() {
            item.target = self.solve_one(i, selected);
        }
    }

    fn center(&self, scale: f64) -> Transform {
        Transform::new(Vec3::new(0.0, self.params.base_y, 0.0), 0.0, scale, 1.0)
    }

    fn zoom(&self, d: i64) -> Transform {
        let p = &self.params;
        if d == 0 {
            let scale = if p.zoom_on_select { p.zoom_factor } else { 1.0 };
            return self.center(scale);
        }
        let side = d.signum() as f64;
        let n = d.unsigned_abs() as f64;
        Transform::new(
            Vec3::new(
                side * (p.side_offset + (n - 1.0) * p.spacing),
                p.base_y,
                -p.depth_offset * n,
            ),
            side * p.side_angle,
            p.min_scale.max(1.0 - n * p.scale_falloff),
            p.min_opacity.max(1.0 - n * p.opacity_falloff),
        )
    }

    fn flat(&self, d: i64) -> Transform {
        let p = &self.params;
        if d == 0 {
            return self.center(1.0);
        }
        let side = d.signum() as f64;
        let n = d.unsigned_abs() as f64;
        Transform::new(
            Vec3::new(
                d as f64 * p.spacing + side * p.side_offset,
                p.base_y,
                n * p.depth_offset,
            ),
            side * p.side_angle,
            p.flat_side_scale,
            1.0,
        )
    }
}
