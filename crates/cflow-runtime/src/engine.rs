#![forbid(unsafe_code)]

//! The per-tick engine.
//!
//! [`Coverflow`] composes the layout solver, the interpolator, the navigation
//! controller, and the background transition around one explicit
//! [`CoverflowState`]. The host drives it by calling [`Coverflow::tick`] once
//! per display refresh; navigation calls may arrive between ticks.
//!
//! # Tick order
//!
//! 1. If the selection is animating, step every cover toward its target and
//!    push transforms (and reflections) to the host.
//! 2. When the layout stops converging, commit `current_index`.
//! 3. Advance the background transition and push the blended color.
//!
//! # Invariants
//!
//! 1. Navigation only rewrites targets; current transforms move in `tick`.
//! 2. Every accepted navigation notifies the [`SelectionListener`] exactly
//!    once and, with dynamic backgrounds on, retargets the background.
//! 3. `current_index` equals `target_index` whenever the engine is settled.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Invalid config | `Coverflow::new` returns [`ConfigError::Validation`] |
//! | No covers | Navigation rejected, ticks only advance the background |
//!
//! [`SelectionListener`]: crate::host::SelectionListener

use cflow_core::animation::background::BackgroundTransition;
use cflow_core::animation::interpolator::{Interpolator, StepMode};
use cflow_core::geometry::ReflectionParams;
use cflow_core::item::CoverItem;
use cflow_core::palette::ItemHint;
use cflow_layout::{LayoutMode, LayoutSolver};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::Instant;

use crate::config::{ConfigError, CoverflowConfig};
use crate::host::CoverflowHost;
use crate::navigation::{Direction, EdgePolicy, NavigationController, SelectionState};

/// Everything that changes across ticks.
#[derive(Debug, Clone)]
pub struct CoverflowState {
    pub navigation: NavigationController,
    pub items: Vec<CoverItem>,
    pub background: BackgroundTransition,
}

/// Outcome of one [`Coverflow::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStatus {
    /// At least one cover is still further than the threshold from its target.
    pub layout_converging: bool,
    /// The background has not reached its target yet.
    pub background_active: bool,
}

impl TickStatus {
    /// Nothing left to animate.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.layout_converging && !self.background_active
    }
}

/// A coverflow carousel bound to a host.
#[derive(Debug)]
pub struct Coverflow<H: CoverflowHost> {
    solver: LayoutSolver,
    interpolator: Interpolator,
    reflection: Option<ReflectionParams>,
    dynamic_background: bool,
    state: CoverflowState,
    rng: SmallRng,
    ticks: u64,
    host: H,
}

impl<H: CoverflowHost> Coverflow<H> {
    /// Build an engine with one cover per hint, the first one selected.
    ///
    /// Covers are placed at their targets immediately. With dynamic
    /// backgrounds on, the background starts moving toward the first
    /// cover's color.
    pub fn new(
        config: CoverflowConfig,
        hints: impl IntoIterator<Item = ItemHint>,
        host: H,
    ) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let items = CoverItem::from_hints(hints);
        let navigation = NavigationController::new(items.len(), config.edge_policy());
        let background = BackgroundTransition::new().with_step(config.background.step);

        let mut engine = Self {
            solver: LayoutSolver::new(config.to_layout_params()),
            interpolator: Interpolator::new(config.animation.animation_rate)
                .with_threshold(config.animation.convergence_threshold),
            reflection: config.to_reflection_params(),
            dynamic_background: config.background.dynamic_background,
            state: CoverflowState {
                navigation,
                items,
                background,
            },
            rng: SmallRng::from_os_rng(),
            ticks: 0,
            host,
        };
        engine.snap();
        if engine.dynamic_background {
            engine.retarget_background(0);
        }
        tracing::debug!(
            target: "cflow.tick",
            covers = engine.state.items.len(),
            mode = ?engine.solver.mode(),
            "coverflow created"
        );
        Ok(engine)
    }

    /// Reseed the generator used by [`navigate_random`](Self::navigate_random).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn state(&self) -> &CoverflowState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CoverItem] {
        &self.state.items
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.state.navigation.selection()
    }

    #[inline]
    #[must_use]
    pub fn background(&self) -> &BackgroundTransition {
        &self.state.background
    }

    #[inline]
    #[must_use]
    pub fn solver(&self) -> &LayoutSolver {
        &self.solver
    }

    #[inline]
    #[must_use]
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    #[inline]
    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.solver.mode()
    }

    #[inline]
    #[must_use]
    pub fn reflection_params(&self) -> Option<&ReflectionParams> {
        self.reflection.as_ref()
    }

    /// Ticks run since construction.
    #[inline]
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    #[inline]
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Neither the layout nor the background is moving.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.state.navigation.is_animating() && self.state.background.is_idle()
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Move one cover. Returns whether the target changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let target = self.state.navigation.navigate(direction);
        self.on_target(target)
    }

    /// Move `delta` covers from the current target.
    pub fn navigate_by(&mut self, delta: i64) -> bool {
        let target = self.state.navigation.navigate_by(delta);
        self.on_target(target)
    }

    pub fn navigate_to(&mut self, index: usize) -> bool {
        let target = self.state.navigation.navigate_to(index);
        self.on_target(target)
    }

    pub fn navigate_first(&mut self) -> bool {
        let target = self.state.navigation.navigate_first();
        self.on_target(target)
    }

    pub fn navigate_last(&mut self) -> bool {
        let target = self.state.navigation.navigate_last();
        self.on_target(target)
    }

    pub fn navigate_random(&mut self) -> bool {
        let target = self.state.navigation.navigate_random(&mut self.rng);
        self.on_target(target)
    }

    fn on_target(&mut self, target: Option<usize>) -> bool {
        let Some(index) = target else {
            return false;
        };
        self.solver.apply(&mut self.state.items, index);
        if self.dynamic_background {
            self.retarget_background(index);
        }
        self.host.selection_changed(index);
        true
    }

    fn retarget_background(&mut self, index: usize) {
        let Some(item) = self.state.items.get(index) else {
            return;
        };
        let color = item.hint.background();
        self.state
            .background
            .retarget(color, self.host.present_color());
        tracing::debug!(
            target: "cflow.background",
            index,
            color = format_args!("#{:06x}", color.to_hex()),
            "background retargeted"
        );
    }

    // ── Tick ────────────────────────────────────────────────────────────

    /// Advance one frame.
    pub fn tick(&mut self) -> TickStatus {
        let start = Instant::now();
        self.ticks += 1;
        let span = tracing::debug_span!(
            "cflow.tick",
            tick = self.ticks,
            covers = self.state.items.len(),
            converging = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        )
        .entered();

        let layout_converging = if self.state.navigation.is_animating() {
            let converging = self
                .interpolator
                .step(&mut self.state.items, StepMode::Smooth);
            self.push_transforms();
            if !converging {
                self.state.navigation.commit();
                tracing::debug!(
                    target: "cflow.tick",
                    index = self.state.navigation.current_index(),
                    tick = self.ticks,
                    "layout settled"
                );
            }
            converging
        } else {
            false
        };

        let background_active = match self.state.background.tick() {
            Some(color) => {
                self.host.set_background(color);
                let active = !self.state.background.is_idle();
                if !active {
                    tracing::debug!(
                        target: "cflow.background",
                        color = format_args!("#{:06x}", color.to_hex()),
                        "background settled"
                    );
                }
                active
            }
            None => false,
        };

        let duration_us = start.elapsed().as_micros() as u64;
        span.record("converging", layout_converging);
        span.record("duration_us", duration_us);

        TickStatus {
            layout_converging,
            background_active,
        }
    }

    /// Tick until idle or until `max_ticks` ticks have run.
    ///
    /// Returns the number of ticks run. Zero when already settled.
    pub fn run_until_settled(&mut self, max_ticks: usize) -> usize {
        let mut ran = 0;
        while ran < max_ticks && !self.is_settled() {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Jump every cover to its target and commit the selection.
    ///
    /// The background transition is left running.
    pub fn snap(&mut self) {
        self.solver
            .apply(&mut self.state.items, self.state.navigation.target_index());
        self.interpolator
            .step(&mut self.state.items, StepMode::Immediate);
        self.state.navigation.commit();
        self.push_transforms();
    }

    fn push_transforms(&mut self) {
        for (i, item) in self.state.items.iter().enumerate() {
            self.host.apply_transform(i, &item.current);
            if let Some(params) = &self.reflection {
                self.host.apply_reflection(i, &item.reflection(params));
            }
        }
    }

    // ── Reconfiguration ─────────────────────────────────────────────────

    /// Replace the covers. The selection is clamped and covers are placed
    /// immediately.
    pub fn set_items(&mut self, hints: impl IntoIterator<Item = ItemHint>) {
        self.state.items = CoverItem::from_hints(hints);
        self.state.navigation.set_count(self.state.items.len());
        self.snap();
        tracing::debug!(
            target: "cflow.nav",
            covers = self.state.items.len(),
            index = self.state.navigation.target_index(),
            "items replaced"
        );
    }

    /// Switch layouts. Covers snap to the new targets.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.solver.mode() == mode {
            return;
        }
        self.solver.set_mode(mode);
        self.relayout();
    }

    /// Toggle enlarging the selected cover. Covers snap to the new targets.
    pub fn set_zoom_on_select(&mut self, zoom: bool) {
        if self.solver.params().zoom_on_select == zoom {
            return;
        }
        self.solver.params_mut().zoom_on_select = zoom;
        self.relayout();
    }

    pub fn set_wrap_navigation(&mut self, wrap: bool) {
        let policy = if wrap {
            EdgePolicy::Wrap
        } else {
            EdgePolicy::Clamp
        };
        self.state.navigation.set_policy(policy);
    }

    /// Turning dynamic backgrounds off cancels any running transition.
    pub fn set_dynamic_background(&mut self, enabled: bool) {
        self.dynamic_background = enabled;
        if !enabled {
            self.state.background.cancel();
        }
    }

    /// Change the interpolation rate. Clamped like [`Interpolator::new`].
    pub fn set_animation_rate(&mut self, rate: f64) {
        self.interpolator = Interpolator::new(rate).with_threshold(self.interpolator.threshold());
    }

    fn relayout(&mut self) {
        self.snap();
        tracing::debug!(
            target: "cflow.tick",
            mode = ?self.solver.mode(),
            zoom_on_select = self.solver.params().zoom_on_select,
            "relayout"
        );
    }
}
