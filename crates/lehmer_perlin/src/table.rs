//! # Permutation Table
//!
//! The gradient lookup table shared by every sample of one generator.
//!
//! ## Layout
//!
//! ```text
//!   index   0..12   12..24   24..32   32
//!           P0      P1       P2[..8]  = [0]
//! ```
//!
//! Each `Pn` is the canonical gradient set reordered by the permutation
//! selected by sub-seed `n`, so every full 12-entry block contains each
//! gradient exactly once. The trailing entry repeats index 0 so lookups
//! at `X + 1` never leave the table.
//!
//! Only the first 8 entries of `P2` are used. Sub-seed 2 is at most 80
//! (see `NoiseSeed`), which only reorders `P2[7..]`, so in practice the
//! last block varies in at most one entry.

use crate::gradient::{GradientCode, CANONICAL_GRADIENTS};
use crate::permutation::lehmer_permutation;
use crate::seed::NoiseSeed;

/// Lattice period of the noise field. Must be a power of two.
pub const TABLE_SIZE: usize = 32;

/// Mask reducing a lattice coordinate into `0..TABLE_SIZE`.
pub const TABLE_MASK: usize = TABLE_SIZE - 1;

const BLOCK: usize = CANONICAL_GRADIENTS.len();

const _: () = assert!(TABLE_SIZE.is_power_of_two());

/// Cyclic table of `TABLE_SIZE + 1` gradient codes.
///
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    entries: [GradientCode; TABLE_SIZE + 1],
}

impl PermutationTable {
    /// Builds the table for a seed.
    ///
    /// Total over all seeds: every `u64` gives a valid table.
    #[must_use]
    pub fn build(seed: NoiseSeed) -> Self {
        let sub_seeds = seed.split();
        tracing::debug!(
            seed = seed.value(),
            s0 = sub_seeds[0],
            s1 = sub_seeds[1],
            s2 = sub_seeds[2],
            "building permutation table"
        );

        let blocks = sub_seeds.map(permuted_gradients);

        let mut entries = [CANONICAL_GRADIENTS[0]; TABLE_SIZE + 1];
        for (i, entry) in entries.iter_mut().take(TABLE_SIZE).enumerate() {
            *entry = blocks[i / BLOCK][i % BLOCK];
        }
        entries[TABLE_SIZE] = entries[0];

        Self { entries }
    }

    /// Returns the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > TABLE_SIZE`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> GradientCode {
        self.entries[index]
    }

    /// Returns the packed entry at `index` as a hash value.
    #[inline]
    pub(crate) fn hash(&self, index: usize) -> usize {
        usize::from(self.entries[index].raw())
    }

    /// Returns all `TABLE_SIZE + 1` entries.
    #[must_use]
    pub fn as_slice(&self) -> &[GradientCode] {
        &self.entries
    }

    /// Number of entries, including the wraparound entry.
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub const fn len(&self) -> usize {
        TABLE_SIZE + 1
    }
}

/// The canonical gradients reordered by the permutation at `index`.
fn permuted_gradients(index: u64) -> [GradientCode; BLOCK] {
    let order = lehmer_permutation(BLOCK - 1, index);
    let mut out = CANONICAL_GRADIENTS;
    for (slot, &source) in out.iter_mut().zip(&order) {
        *slot = CANONICAL_GRADIENTS[source];
    }
    out
}
