#![forbid(unsafe_code)]

//! 3D simplex noise.
//!
//! Algorithm after Stefan Gustavson, "Simplex noise demystified" (2005):
//! <https://weber.itn.liu.se/~stegu/simplexnoise/simplexnoise.pdf>
//!
//! 1. Skew the input by `F3 = 1/3` and floor to find the lattice cell.
//! 2. Unskew by `G3 = 1/6` to get the offset `(x0, y0, z0)` from the cell
//!    origin.
//! 3. Rank `x0, y0, z0` to pick one of the six tetrahedra in the cell.
//! 4. Hash each of the four corners through the permutation table to one of
//!    twelve gradients.
//! 5. Each corner contributes `t⁴ · (g · d)` with `t = 0.6 - |d|²`, or zero
//!    when `t < 0`.
//! 6. The sum is scaled by 32 to land in roughly `[-1, 1]`.
//!
//! The ranking comparisons below mix `>=` and `<` exactly as the reference
//! implementation does; changing any of them moves tie points into a
//! different tetrahedron and changes the field.

use super::permutation::PermutationTable;

/// Skew factor for 3D: `(sqrt(4) - 1) / 3`.
pub const F3: f64 = 1.0 / 3.0;

/// Unskew factor for 3D: `(1 - 1/sqrt(4)) / 3`.
pub const G3: f64 = 1.0 / 6.0;

/// Squared radius of each corner's kernel.
const KERNEL_RADIUS_SQ: f64 = 0.6;

/// Output scale bringing the sum into roughly `[-1, 1]`.
const OUTPUT_SCALE: f64 = 32.0;

/// Gradient directions: the midpoints of the twelve edges of a cube.
pub const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Octave settings for [`SimplexNoise::fractal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Number of layers summed. Zero yields `0.0`.
    pub octaves: u32,
    /// Base frequency multiplier applied to the input.
    pub frequency: f64,
    /// Amplitude multiplier per octave.
    pub persistence: f64,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            frequency: 1.0,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// A deterministic 3D gradient-noise field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Create a generator over `table`.
    #[must_use]
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Create a generator from a seeded random-fill table.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PermutationTable::with_seed(seed))
    }

    #[inline]
    #[must_use]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Gradient index in `[0, 12)` for lattice corner `(i, j, k)`, where each
    /// coordinate is already folded into `[0, 256]`.
    #[inline]
    fn gradient_index(&self, i: usize, j: usize, k: usize) -> usize {
        let p = &self.table;
        p.get(i + p.get(j + p.get(k))) % 12
    }

    /// Evaluate the field at `(x, y, z)`.
    ///
    /// Finite input yields finite output; non-finite input yields an
    /// unspecified value.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew into simplex space and find the containing cell.
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;
        let k = (z + s).floor() as i64;

        // Unskew the cell origin back to input space.
        let t = (i + j + k) as f64 * G3;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        // Second and third corners (offsets in skewed lattice coordinates).
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        // Fold lattice coordinates into the table (two's complement for
        // negative cells).
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let (i1, j1, k1) = (i1 as usize, j1 as usize, k1 as usize);
        let (i2, j2, k2) = (i2 as usize, j2 as usize, k2 as usize);

        let gi0 = self.gradient_index(ii, jj, kk);
        let gi1 = self.gradient_index(ii + i1, jj + j1, kk + k1);
        let gi2 = self.gradient_index(ii + i2, jj + j2, kk + k2);
        let gi3 = self.gradient_index(ii + 1, jj + 1, kk + 1);

        let n0 = corner(gi0, x0, y0, z0);
        let n1 = corner(gi1, x1, y1, z1);
        let n2 = corner(gi2, x2, y2, z2);
        let n3 = corner(gi3, x3, y3, z3);

        OUTPUT_SCALE * (n0 + n1 + n2 + n3)
    }

    /// Sum `params.octaves` layers of noise, normalised by the total
    /// amplitude so the result stays in roughly `[-1, 1]`.
    #[must_use]
    pub fn fractal(&self, x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut norm = 0.0;
        let mut freq = params.frequency;
        for _ in 0..params.octaves {
            sum += amplitude * self.evaluate(x * freq, y * freq, z * freq);
            norm += amplitude;
            amplitude *= params.persistence;
            freq *= params.lacunarity;
        }
        if norm == 0.0 { 0.0 } else { sum / norm }
    }
}

#[inline]
fn corner(gi: usize, x: f64, y: f64, z: f64) -> f64 {
    let mut t = KERNEL_RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    t *= t;
    let g = &GRADIENTS[gi];
    t * t * (g[0] * x + g[1] * y + g[2] * z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> SimplexNoise {
        SimplexNoise::new(PermutationTable::reference())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(reference().evaluate(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn golden_values_reference_table() {
        let n = reference();
        assert_close(n.evaluate(1.25, -2.5, 3.75), 0.4166605195473258);
        assert_close(n.evaluate(-7.3, 4.1, 0.6), -0.6659305372181076);
        assert_close(n.evaluate(10.1, 20.2, 30.3), -0.003974783999997206);
        assert_close(n.evaluate(-300.7, 512.25, -1023.5), 0.4203802749374876);
    }

    #[test]
    fn golden_values_cover_every_ordering() {
        let n = reference();
        assert_close(n.evaluate(0.1, 0.9, 0.3), 0.2908633663209872);
        assert_close(n.evaluate(0.9, 0.1, 0.3), -0.35277454564609023);
        assert_close(n.evaluate(0.3, 0.1, 0.9), 0.27694685893004095);
        assert_close(n.evaluate(0.3, 0.9, 0.1), 0.18551348516872423);
        assert_close(n.evaluate(0.1, 0.3, 0.9), -0.10708654590946498);
        assert_close(n.evaluate(0.9, 0.3, 0.1), -0.17137692497119322);
    }

    #[test]
    fn vanishes_at_simplex_vertices() {
        // Unskewed lattice points are simplex vertices; every kernel is
        // either centred there (zero offset) or out of range.
        let n = SimplexNoise::with_seed(11);
        for (i, j, k) in [(0, 0, 0), (1, 0, 0), (3, -2, 5), (-4, -4, 7), (100, 50, -25)] {
            let t = f64::from(i + j + k) * G3;
            let (x, y, z) = (f64::from(i) - t, f64::from(j) - t, f64::from(k) - t);
            let v = n.evaluate(x, y, z);
            assert!(v.abs() < 1e-9, "({i},{j},{k}) -> {v}");
        }
    }

    #[test]
    fn integer_inputs_are_reproducible() {
        let a = SimplexNoise::with_seed(3);
        let b = SimplexNoise::with_seed(3);
        for i in -5..5 {
            for j in -5..5 {
                for k in -2..2 {
                    let (x, y, z) = (f64::from(i), f64::from(j), f64::from(k));
                    let first = a.evaluate(x, y, z);
                    assert_eq!(first.to_bits(), a.evaluate(x, y, z).to_bits());
                    assert_eq!(first.to_bits(), b.evaluate(x, y, z).to_bits());
                }
            }
        }
    }

    #[test]
    fn different_tables_differ() {
        let a = SimplexNoise::with_seed(1);
        let b = SimplexNoise::with_seed(2);
        let differs = (0..64).any(|i| {
            let x = f64::from(i) * 0.37 + 0.11;
            a.evaluate(x, x * 0.5, 1.3) != b.evaluate(x, x * 0.5, 1.3)
        });
        assert!(differs);
    }

    #[test]
    fn bounded_on_dense_grid() {
        let n = reference();
        let mut max = 0.0_f64;
        for a in 0..40 {
            for b in 0..40 {
                for c in 0..10 {
                    let v = n.evaluate(
                        f64::from(a) * 0.173 - 3.0,
                        f64::from(b) * 0.191 - 3.0,
                        f64::from(c) * 0.37 - 1.0,
                    );
                    max = max.max(v.abs());
                }
            }
        }
        assert!(max <= 1.0, "max |noise| = {max}");
        assert!(max > 0.3, "field looks degenerate, max = {max}");
    }

    #[test]
    fn continuous_between_nearby_points() {
        let n = reference();
        let a = n.evaluate(2.5, 1.25, -0.75);
        let b = n.evaluate(2.5 + 1e-7, 1.25, -0.75);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn negative_coordinates_fold_into_table() {
        let n = reference();
        let v = n.evaluate(-1e6 + 0.3, -2e6 + 0.7, -3e6 + 0.1);
        assert!(v.is_finite());
        assert!(v.abs() <= 1.0);
    }

    #[test]
    fn gradients_have_two_unit_components() {
        for g in GRADIENTS {
            let nonzero = g.iter().filter(|c| **c != 0.0).count();
            assert_eq!(nonzero, 2);
            assert!(g.iter().all(|c| c.abs() == 1.0 || *c == 0.0));
        }
    }

    #[test]
    fn fractal_single_octave_matches_evaluate() {
        let n = reference();
        let params = FractalParams {
            octaves: 1,
            ..FractalParams::default()
        };
        assert_eq!(n.fractal(0.4, 1.1, 2.2, params), n.evaluate(0.4, 1.1, 2.2));
    }

    #[test]
    fn fractal_zero_octaves_is_zero() {
        let params = FractalParams {
            octaves: 0,
            ..FractalParams::default()
        };
        assert_eq!(reference().fractal(0.4, 1.1, 2.2, params), 0.0);
    }

    #[test]
    fn fractal_stays_bounded() {
        let n = SimplexNoise::with_seed(17);
        for i in 0..500 {
            let x = f64::from(i) * 0.071;
            let v = n.fractal(x, x * 1.3, x * 0.7, FractalParams::default());
            assert!(v.abs() <= 1.0, "fractal out of range: {v}");
        }
    }
}
