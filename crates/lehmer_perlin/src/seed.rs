//! # Noise Seeds
//!
//! A generator is keyed by a single `u64`. Table construction reads it as a
//! mixed-radix number in base 12! and takes three digits, one per
//! 12-gradient block of the table.
//!
//! ## Seed Space
//!
//! `u64::MAX / (12!)^2` is 80, so the third digit never exceeds 80 and
//! nothing is left over after the third division. Distinct seeds always
//! give distinct digit triples, but seeds that differ only in the third
//! digit can still produce identical tables (see `PermutationTable`).

/// Number of distinct permutations of the 12 canonical gradients (12!).
pub const PERMUTATION_COUNT: u64 = 479_001_600;

/// Seed for deterministic noise generation.
///
/// All tables derive from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoiseSeed(u64);

impl NoiseSeed {
    /// Creates a new noise seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Splits the seed into three permutation indices.
    ///
    /// Each index is in `0..12!`: `s0 = seed mod 12!`, then the seed is
    /// divided by 12! and the next digit taken, twice more.
    #[must_use]
    pub const fn split(self) -> [u64; 3] {
        let mut remaining = self.0;
        let s0 = remaining % PERMUTATION_COUNT;
        remaining /= PERMUTATION_COUNT;
        let s1 = remaining % PERMUTATION_COUNT;
        remaining /= PERMUTATION_COUNT;
        let s2 = remaining % PERMUTATION_COUNT;
        [s0, s1, s2]
    }

    /// Derives the seed of a secondary noise layer.
    ///
    /// Mixes the layer number into the seed with the SplitMix64 finalizer,
    /// so neighbouring layers get unrelated permutation digits.
    #[inline]
    #[must_use]
    pub const fn derive(self, layer: u64) -> Self {
        let mut z = self.0 ^ layer.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }
}

impl Default for NoiseSeed {
    fn default() -> Self {
        Self(0xDEAD_BEEF_CAFE_BABE)
    }
}

impl From<u64> for NoiseSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}
