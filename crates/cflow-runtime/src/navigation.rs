#![forbid(unsafe_code)]

//! Selection state and navigation requests.
//!
//! [`NavigationController`] exclusively owns the [`SelectionState`]. Every
//! request resolves to a new target index or is rejected; nothing else in the
//! engine writes the target.
//!
//! # Invariants
//!
//! 1. With `count > 0`, `target_index < count` and `current_index < count`
//!    after every operation.
//! 2. A request that resolves to the current target is rejected and leaves
//!    the state untouched.
//! 3. With `count == 0` every request is rejected.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Out-of-range `navigate_to` | Rejected, logged at debug |
//! | Move past an edge under [`EdgePolicy::Clamp`] | Rejected |
//! | Count shrinks below the selection | Selection clamped to the last cover |

use rand::Rng;

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed step for this direction.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// What a relative move does at either end of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Past the end goes to the start and vice versa.
    #[default]
    Wrap,
    /// Stop at the first and last cover.
    Clamp,
}

/// Which cover is shown and which one the layout is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Cover the settled layout was last solved for.
    pub current_index: usize,
    /// Cover the layout is converging toward.
    pub target_index: usize,
    /// Set on navigation, cleared when the layout settles.
    pub is_animating: bool,
}

/// Turns navigation requests into target-index changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    selection: SelectionState,
    count: usize,
    policy: EdgePolicy,
}

impl NavigationController {
    /// A controller over `count` covers with the first one selected.
    #[must_use]
    pub fn new(count: usize, policy: EdgePolicy) -> Self {
        Self {
            selection: SelectionState::default(),
            count,
            policy,
        }
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[inline]
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.selection.target_index
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.selection.current_index
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.selection.is_animating
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: EdgePolicy) {
        self.policy = policy;
    }

    /// Change the number of covers, clamping the selection into range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        let last = count.saturating_sub(1);
        self.selection.target_index = self.selection.target_index.min(last);
        self.selection.current_index = self.selection.current_index.min(last);
    }

    /// Mark the layout as moving or settled.
    pub fn set_animating(&mut self, animating: bool) {
        self.selection.is_animating = animating;
    }

    /// The layout settled: the target is now the current cover.
    pub fn commit(&mut self) {
        self.selection.current_index = self.selection.target_index;
        self.selection.is_animating = false;
    }

    /// Move one cover in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        self.navigate_by(direction.delta())
    }

    /// Move `delta` covers from the target, honouring the edge policy.
    pub fn navigate_by(&mut self, delta: i64) -> Option<usize> {
        if self.count == 0 {
            return self.reject("empty");
        }
        let n = i64::try_from(self.count).unwrap_or(i64::MAX);
        let from = i64::try_from(self.selection.target_index).unwrap_or(i64::MAX);
        let next = match self.policy {
            // Both operands are below `n`, so the sum cannot overflow.
            EdgePolicy::Wrap => (from + delta.rem_euclid(n)).rem_euclid(n),
            EdgePolicy::Clamp => from.saturating_add(delta).clamp(0, n - 1),
        };
        self.set_target(next as usize)
    }

    /// Jump to `index`. Rejected when out of range.
    pub fn navigate_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.count {
            tracing::debug!(
                target: "cflow.nav",
                index,
                count = self.count,
                "navigate_to out of range"
            );
            return None;
        }
        self.set_target(index)
    }

    pub fn navigate_first(&mut self) -> Option<usize> {
        if self.count == 0 {
            return self.reject("empty");
        }
        self.set_target(0)
    }

    pub fn navigate_last(&mut self) -> Option<usize> {
        if self.count == 0 {
            return self.reject("empty");
        }
        self.set_target(self.count - 1)
    }

    /// Jump to a uniformly chosen cover. The draw may land on the current
    /// target, which is then rejected like any other no-op.
    pub fn navigate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.count == 0 {
            return self.reject("empty");
        }
        let index = rng.random_range(0..self.count);
        self.set_target(index)
    }

    fn set_target(&mut self, index: usize) -> Option<usize> {
        if index == self.selection.target_index {
            return self.reject("unchanged");
        }
        let from = self.selection.target_index;
        self.selection.target_index = index;
        self.selection.is_animating = true;
        tracing::debug!(target: "cflow.nav", from, to = index, "target changed");
        Some(index)
    }

    fn reject(&self, reason: &'static str) -> Option<usize> {
        tracing::debug!(
            target: "cflow.nav",
            reason,
            target_index = self.selection.target_index,
            animating = self.selection.is_animating,
            "navigation rejected"
        );
        None
    }
}
