//! # Index-to-Permutation Mapping
//!
//! Maps an index in `0..n!` to one permutation of `0..n` using the
//! factorial number system (Lehmer code).
//!
//! The smallest value is placed first: with `n` items and index `i`,
//! `0` is inserted at position `i / (n-1)!` of the permutation of the
//! remaining items, which is built the same way from `i mod (n-1)!`.
//! The enumeration order is fixed; changing it changes every noise field.

/// Largest `upper` bound accepted by [`lehmer_permutation`] (`20!` is the
/// largest factorial that fits in a `u64`).
pub const MAX_UPPER: usize = 19;

/// Returns `n!`.
///
/// # Panics
///
/// Panics if `n!` does not fit in a `u64` (`n > 20`).
#[must_use]
pub const fn factorial(n: u64) -> u64 {
    let mut acc: u64 = 1;
    let mut k = 2;
    while k <= n {
        acc = match acc.checked_mul(k) {
            Some(v) => v,
            None => panic!("factorial overflows u64"),
        };
        k += 1;
    }
    acc
}

/// Returns the permutation of `0..=upper` selected by `index`.
///
/// `index` is reduced modulo `(upper + 1)!`, so every index is valid and
/// indices in `0..(upper + 1)!` map one-to-one onto the permutations.
///
/// # Panics
///
/// Panics if `upper > MAX_UPPER`.
#[must_use]
pub fn lehmer_permutation(upper: usize, index: u64) -> Vec<usize> {
    assert!(upper <= MAX_UPPER, "permutation range 0..={upper} too large");
    let mut out = Vec::with_capacity(upper + 1);
    permute(0, upper, index, &mut out);
    out
}

/// Builds the permutation of `lower..=upper` into `out`.
fn permute(lower: usize, upper: usize, index: u64, out: &mut Vec<usize>) {
    if lower == upper {
        out.push(upper);
        return;
    }

    let range = (upper - lower) as u64;
    let index = index % factorial(range + 1);
    let slot = (index / factorial(range)) as usize;

    permute(lower + 1, upper, index, out);
    out.insert(slot, lower);
}
