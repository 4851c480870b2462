//! In-place Fisher–Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down to `1`, swapping each slot with a uniform
/// index in `[0, i]`. Consumes exactly `n - 1` uniform draws for `n >= 1`
/// items (none for an empty slice), so a seeded rng gives a reproducible
/// permutation. Elements are moved, never modified.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

/// Uniform index in `[0, bound)` from a single `f64` draw.
#[inline]
fn uniform_index<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    let j = (rng.random::<f64>() * bound as f64) as usize;
    j.min(bound - 1)
}
