#![forbid(unsafe_code)]

//! Permutation (hash) tables for gradient noise.
//!
//! A table is 256 base entries in `[0, 256)` stored twice back to back, so a
//! lookup at `base + offset` with both terms below 256 never needs wrapping.
//!
//! # Invariants
//!
//! 1. `len() == 512` and `get(i) == get(i & 255)` for every `i < 512`.
//! 2. The table is immutable once built.
//!
//! [`PermutationTable::from_rng`] fills the base independently per entry and
//! keeps any repeated values; only [`PermutationTable::shuffled`] and
//! [`PermutationTable::reference`] guarantee a true permutation.

use std::fmt;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Number of distinct base entries.
pub const BASE_SIZE: usize = 256;

/// Ken Perlin's reference permutation.
const REFERENCE: [u8; BASE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// A doubled 256-entry hash table.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; BASE_SIZE * 2],
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl PermutationTable {
    /// Build from an explicit base table.
    #[must_use]
    pub fn from_base(base: &[u8; BASE_SIZE]) -> Self {
        let mut perm = [0u8; BASE_SIZE * 2];
        perm[..BASE_SIZE].copy_from_slice(base);
        perm[BASE_SIZE..].copy_from_slice(base);
        Self { perm }
    }

    /// The classic table used by reference simplex implementations.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_base(&REFERENCE)
    }

    /// Fill each base entry with an independent uniform draw in `[0, 256)`.
    ///
    /// Repeated values are kept.
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut base = [0u8; BASE_SIZE];
        for slot in &mut base {
            *slot = rng.random::<u8>();
        }
        Self::from_base(&base)
    }

    /// A true permutation of `0..256`, shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut base = [0u8; BASE_SIZE];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        base.shuffle(rng);
        Self::from_base(&base)
    }

    /// Random-fill table from a seeded [`SmallRng`].
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut SmallRng::seed_from_u64(seed))
    }

    /// Random-fill table seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(&mut SmallRng::from_os_rng())
    }

    /// Entry at `i`. `i` must be below 512.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> usize {
        usize::from(self.perm[i])
    }

    /// The first 256 entries.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &[u8] {
        &self.perm[..BASE_SIZE]
    }

    /// The full doubled table.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the base holds every value in `0..256` exactly once.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; BASE_SIZE];
        for &v in self.base() {
            if std::mem::replace(&mut seen[usize::from(v)], true) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_doubled(table: &PermutationTable) {
        assert_eq!(table.len(), 512);
        for i in 0..512 {
            assert_eq!(table.get(i), table.get(i & 255), "mismatch at {i}");
        }
    }

    #[test]
    fn reference_is_permutation() {
        let table = PermutationTable::reference();
        assert!(table.is_permutation());
        assert_doubled(&table);
        assert_eq!(table.get(0), 151);
        assert_eq!(table.get(256), 151);
        assert_eq!(table.get(511), 180);
    }

    #[test]
    fn seeded_tables_repeat() {
        assert_eq!(PermutationTable::with_seed(99), PermutationTable::with_seed(99));
        assert_ne!(PermutationTable::with_seed(1), PermutationTable::with_seed(2));
    }

    #[test]
    fn random_fill_is_doubled() {
        for seed in 0..8 {
            assert_doubled(&PermutationTable::with_seed(seed));
        }
    }

    #[test]
    fn random_fill_keeps_duplicates() {
        // 256 independent draws from 256 values collide with overwhelming
        // probability (the chance of none is 256!/256^256).
        let dupes = (0..16)
            .map(PermutationTable::with_seed)
            .filter(|t| !t.is_permutation())
            .count();
        assert_eq!(dupes, 16);
    }

    #[test]
    fn shuffled_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(5);
        let table = PermutationTable::shuffled(&mut rng);
        assert!(table.is_permutation());
        assert_doubled(&table);
    }

    #[test]
    fn from_base_copies_both_halves() {
        let mut base = [0u8; BASE_SIZE];
        base[3] = 200;
        let table = PermutationTable::from_base(&base);
        assert_eq!(table.get(3), 200);
        assert_eq!(table.get(259), 200);
        assert!(!table.is_permutation());
    }

    #[test]
    fn debug_is_compact() {
        let dbg = format!("{:?}", PermutationTable::reference());
        assert!(dbg.contains("PermutationTable"));
        assert!(dbg.len() < 120, "{dbg}");
    }

    #[test]
    fn entropy_table_is_doubled() {
        assert_doubled(&PermutationTable::from_entropy());
    }
}
