#![no_main]

use cflow_extras::noise::{PermutationTable, SimplexNoise};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, f64, f64, f64)| {
    let (seed, x, y, z) = input;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return;
    }
    // Beyond this the lattice coordinates lose their fractional part.
    if x.abs() > 1e6 || y.abs() > 1e6 || z.abs() > 1e6 {
        return;
    }
    let noise = SimplexNoise::new(PermutationTable::with_seed(seed));
    let v = noise.evaluate(x, y, z);
    assert!(v.is_finite(), "non-finite output at ({x}, {y}, {z})");
    assert!(v.abs() <= 1.5, "output {v} out of range");
    assert_eq!(v.to_bits(), noise.evaluate(x, y, z).to_bits());
});
