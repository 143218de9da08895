#![forbid(unsafe_code)]

//! One cover in the row.

use crate::geometry::{ReflectionParams, Transform};
use crate::palette::ItemHint;

/// A cover with a stable index, the transform it is currently drawn with,
/// and the transform it is converging toward.
///
/// The reflection has no state of its own; see [`CoverItem::reflection`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoverItem {
    pub index: usize,
    pub current: Transform,
    pub target: Transform,
    pub hint: ItemHint,
}

impl CoverItem {
    /// A cover at the identity transform.
    #[must_use]
    pub fn new(index: usize, hint: ItemHint) -> Self {
        Self {
            index,
            current: Transform::IDENTITY,
            target: Transform::IDENTITY,
            hint,
        }
    }

    /// Build `count` covers with default hints.
    #[must_use]
    pub fn row(count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::new(i, ItemHint::default())).collect()
    }

    /// Build covers from a sequence of hints, indexed in order.
    #[must_use]
    pub fn from_hints(hints: impl IntoIterator<Item = ItemHint>) -> Vec<Self> {
        hints
            .into_iter()
            .enumerate()
            .map(|(i, hint)| Self::new(i, hint))
            .collect()
    }

    /// Reflection derived from the current transform.
    #[inline]
    #[must_use]
    pub fn reflection(&self, params: &ReflectionParams) -> Transform {
        self.current.reflection(params)
    }

    /// Whether the current transform is within `threshold` of the target.
    #[inline]
    #[must_use]
    pub fn is_settled(&self, threshold: f64) -> bool {
        self.current.is_near(&self.target, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PlatformHint;

    #[test]
    fn row_assigns_sequential_indices() {
        let row = CoverItem::row(4);
        let indices: Vec<usize> = row.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(row.iter().all(|c| c.is_settled(0.0)));
    }

    #[test]
    fn from_hints_keeps_order() {
        let row = CoverItem::from_hints([
            ItemHint::platform(PlatformHint::Xbox),
            ItemHint::platform(PlatformHint::Steam),
        ]);
        assert_eq!(row[0].hint.platform, PlatformHint::Xbox);
        assert_eq!(row[1].index, 1);
    }

    #[test]
    fn reflection_follows_current_not_target() {
        let mut item = CoverItem::new(0, ItemHint::default());
        item.target.position.x = 5.0;
        item.current.position.x = 1.0;
        let r = item.reflection(&ReflectionParams::default());
        assert_eq!(r.position.x, 1.0);
    }
}
