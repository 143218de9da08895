#![forbid(unsafe_code)]

//! Seams between the engine and whatever draws it.
//!
//! The engine never touches a scene graph, a DOM, or a GPU. Each tick it
//! pushes plain values through these traits, and the host decides what to do
//! with them.

use cflow_core::color::Rgb;
use cflow_core::geometry::Transform;

/// Receives per-cover transforms.
pub trait TransformSink {
    /// The cover at `index` is now drawn with `transform`.
    fn apply_transform(&mut self, index: usize, transform: &Transform);

    /// The reflection of the cover at `index`. Ignored by default.
    fn apply_reflection(&mut self, index: usize, transform: &Transform) {
        let _ = (index, transform);
    }
}

/// Reads and writes the background color.
pub trait ColorSink {
    /// Color currently presented. Seeds the first background transition.
    fn present_color(&self) -> Rgb;

    fn set_background(&mut self, color: Rgb);
}

/// Told when the target selection changes.
pub trait SelectionListener {
    fn selection_changed(&mut self, index: usize) {
        let _ = index;
    }
}

/// Everything the engine needs from its host.
pub trait CoverflowHost: TransformSink + ColorSink + SelectionListener {}

impl<T: TransformSink + ColorSink + SelectionListener> CoverflowHost for T {}

/// A host that keeps the latest values in memory.
///
/// Useful for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingHost {
    /// Latest transform per cover.
    pub transforms: Vec<Transform>,
    /// Latest reflection per cover.
    pub reflections: Vec<Transform>,
    /// Every background color pushed, in order.
    pub backgrounds: Vec<Rgb>,
    /// Every selection change, in order.
    pub selections: Vec<usize>,
    /// Color reported by `present_color` before any background is pushed.
    pub initial_color: Rgb,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `color` instead of black.
    #[must_use]
    pub fn with_initial_color(mut self, color: Rgb) -> Self {
        self.initial_color = color;
        self
    }

    /// Number of covers that have received at least one transform.
    #[must_use]
    pub fn cover_count(&self) -> usize {
        self.transforms.len()
    }

    fn slot(list: &mut Vec<Transform>, index: usize) -> &mut Transform {
        if index >= list.len() {
            list.resize(index + 1, Transform::IDENTITY);
        }
        &mut list[index]
    }
}

impl TransformSink for RecordingHost {
    fn apply_transform(&mut self, index: usize, transform: &Transform) {
        *Self::slot(&mut self.transforms, index) = *transform;
    }

    fn apply_reflection(&mut self, index: usize, transform: &Transform) {
        *Self::slot(&mut self.reflections, index) = *transform;
    }
}

impl ColorSink for RecordingHost {
    fn present_color(&self) -> Rgb {
        self.backgrounds.last().copied().unwrap_or(self.initial_color)
    }

    fn set_background(&mut self, color: Rgb) {
        self.backgrounds.push(color);
    }
}

impl SelectionListener for RecordingHost {
    fn selection_changed(&mut self, index: usize) {
        self.selections.push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cflow_core::geometry::Vec3;

    fn assert_host<H: CoverflowHost>(_: &H) {}

    #[test]
    fn recording_host_is_a_coverflow_host() {
        assert_host(&RecordingHost::new());
    }

    #[test]
    fn transforms_grow_to_index() {
        let mut host = RecordingHost::new();
        let t = Transform::new(Vec3::new(1.0, 0.0, 0.0), 0.0, 1.0, 1.0);
        host.apply_transform(3, &t);
        assert_eq!(host.cover_count(), 4);
        assert_eq!(host.transforms[3], t);
        assert_eq!(host.transforms[0], Transform::IDENTITY);
    }

    #[test]
    fn present_color_tracks_last_push() {
        let mut host = RecordingHost::new().with_initial_color(Rgb::WHITE);
        assert_eq!(host.present_color(), Rgb::WHITE);
        host.set_background(Rgb::BLACK);
        assert_eq!(host.present_color(), Rgb::BLACK);
    }

    #[test]
    fn default_listener_and_reflection_are_noops() {
        struct Minimal;
        impl TransformSink for Minimal {
            fn apply_transform(&mut self, _: usize, _: &Transform) {}
        }
        impl ColorSink for Minimal {
            fn present_color(&self) -> Rgb {
                Rgb::BLACK
            }
            fn set_background(&mut self, _: Rgb) {}
        }
        impl SelectionListener for Minimal {}

        let mut host = Minimal;
        host.apply_reflection(0, &Transform::IDENTITY);
        host.selection_changed(1);
        assert_host(&host);
    }
}
