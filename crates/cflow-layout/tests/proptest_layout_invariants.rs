#![forbid(unsafe_code)]

//! Property-based invariant tests for the cover layout solver.
//!
//! 1. The selected cover is always at (0, base_y, 0) with rotation 0
//! 2. Side covers respect the scale and opacity floors (zoom layout)
//! 3. Covers on the right have positive X, covers on the left negative X
//! 4. Solving is deterministic

use cflow_layout::{LayoutMode, LayoutParams, LayoutSolver};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_mode() -> impl Strategy<Value = LayoutMode> {
    prop_oneof![Just(LayoutMode::Zoom), Just(LayoutMode::Flat)]
}

fn arb_params() -> impl Strategy<Value = LayoutParams> {
    (
        arb_mode(),
        0.1f64..3.0,
        0.5f64..4.0,
        0.0f64..3.0,
        -2.0f64..2.0,
        any::<bool>(),
    )
        .prop_map(|(mode, spacing, side_offset, depth_offset, base_y, zoom)| LayoutParams {
            mode,
            spacing,
            side_offset,
            depth_offset,
            base_y,
            zoom_on_select: zoom,
            ..LayoutParams::default()
        })
}

fn arb_row() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|n| (Just(n), 0..n))
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Selected cover placement
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selected_cover_is_centered(params in arb_params(), (n, sel) in arb_row()) {
        let solver = LayoutSolver::new(params);
        let row = solver.solve(n, sel);
        prop_assert_eq!(row.len(), n);
        let c = row[sel];
        prop_assert_eq!(c.position.x, 0.0);
        prop_assert_eq!(c.position.y, params.base_y);
        prop_assert_eq!(c.position.z, 0.0);
        prop_assert_eq!(c.rotation_y, 0.0);
        prop_assert_eq!(c.opacity, 1.0);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Floors
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_side_covers_respect_floors((n, sel) in arb_row()) {
        let params = LayoutParams::default();
        let solver = LayoutSolver::new(params);
        for (i, t) in solver.solve(n, sel).into_iter().enumerate() {
            if i == sel {
                continue;
            }
            prop_assert!(t.scale >= params.min_scale);
            prop_assert!(t.scale < 1.0);
            prop_assert!(t.opacity >= params.min_opacity);
            prop_assert!(t.opacity < 1.0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Sides
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn side_sign_matches_offset(params in arb_params(), (n, sel) in arb_row()) {
        let solver = LayoutSolver::new(params);
        for (i, t) in solver.solve(n, sel).into_iter().enumerate() {
            if i > sel {
                prop_assert!(t.position.x > 0.0, "cover {} right of {} at x={}", i, sel, t.position.x);
                prop_assert!(t.rotation_y > 0.0);
            } else if i < sel {
                prop_assert!(t.position.x < 0.0, "cover {} left of {} at x={}", i, sel, t.position.x);
                prop_assert!(t.rotation_y < 0.0);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn solve_deterministic(params in arb_params(), (n, sel) in arb_row()) {
        let solver = LayoutSolver::new(params);
        prop_assert_eq!(solver.solve(n, sel), solver.solve(n, sel));
    }
}
