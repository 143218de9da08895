#![forbid(unsafe_code)]

//! Property-based invariant tests for the simplex noise generator.
//!
//! 1. Output stays within [-1, 1] for arbitrary finite input
//! 2. Generators over equal tables agree bit for bit
//! 3. Evaluation does not depend on call history
//! 4. Doubled tables satisfy table[i] == table[i & 255]
//! 5. Fractal output stays within [-1, 1]

use cflow_extras::noise::{FractalParams, PermutationTable, SimplexNoise};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_coord() -> impl Strategy<Value = f64> {
    -1.0e4f64..1.0e4
}

fn arb_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (arb_coord(), arb_coord(), arb_coord())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bounded output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evaluate_bounded(seed in any::<u64>(), (x, y, z) in arb_point()) {
        let v = SimplexNoise::with_seed(seed).evaluate(x, y, z);
        prop_assert!(v.is_finite());
        prop_assert!((-1.0..=1.0).contains(&v), "noise({}, {}, {}) = {}", x, y, z, v);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Equal tables, equal fields
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn equal_tables_agree(seed in any::<u64>(), (x, y, z) in arb_point()) {
        let a = SimplexNoise::new(PermutationTable::with_seed(seed));
        let b = SimplexNoise::new(PermutationTable::from_rng(&mut SmallRng::seed_from_u64(seed)));
        prop_assert_eq!(a.evaluate(x, y, z).to_bits(), b.evaluate(x, y, z).to_bits());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No hidden state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn history_independent(
        seed in any::<u64>(),
        p in arb_point(),
        others in prop::collection::vec(arb_point(), 0..20),
    ) {
        let noise = SimplexNoise::with_seed(seed);
        let before = noise.evaluate(p.0, p.1, p.2);
        for (x, y, z) in others {
            let _ = noise.evaluate(x, y, z);
        }
        prop_assert_eq!(before.to_bits(), noise.evaluate(p.0, p.1, p.2).to_bits());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Doubled table layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn table_is_doubled(seed in any::<u64>(), shuffled in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let table = if shuffled {
            PermutationTable::shuffled(&mut rng)
        } else {
            PermutationTable::from_rng(&mut rng)
        };
        prop_assert_eq!(table.len(), 512);
        for i in 0..512 {
            prop_assert_eq!(table.get(i), table.get(i & 255));
        }
        if shuffled {
            prop_assert!(table.is_permutation());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Fractal bounded
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fractal_bounded(
        seed in any::<u64>(),
        (x, y, z) in arb_point(),
        octaves in 0u32..8,
        persistence in 0.0f64..1.0,
    ) {
        let params = FractalParams { octaves, persistence, ..FractalParams::default() };
        let v = SimplexNoise::with_seed(seed).fractal(x, y, z, params);
        prop_assert!((-1.0..=1.0).contains(&v), "fractal = {}", v);
    }
}
