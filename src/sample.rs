//! Random sampling primitives.
//!
//! Every sampler takes the random source explicitly. There is no hidden
//! global generator: reseeding means building a new rng with [`seeded_rng`]
//! and handing it to the generator, which keeps "seed + generate" a single
//! owned unit and lets tests run in parallel.
//!
//! Each call to [`uniform`] consumes exactly one `f64` draw, and
//! [`normal`] consumes draws in pairs until it accepts. Generators call these
//! in a fixed order, so the same seed reproduces the same dataset bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sample from the continuous uniform distribution over `[a, b)`.
///
/// No check that `a <= b`; with `a > b` the sample lies in `(b, a]`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + rng.random::<f64>() * (b - a)
}

/// Sample from a Gaussian with the given mean and variance.
///
/// Uses the Marsaglia polar method: draw `v1, v2` uniformly in `[-1, 1)`
/// until `s = v1² + v2²` lies in `(0, 1]`, then return
/// `mean + sqrt(variance) * v1 * sqrt(-2 ln(s) / s)`.
///
/// `s == 0` is rejected along with `s > 1`; accepting it would divide by zero
/// and turn the sample into NaN.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, variance: f64) -> f64 {
    let (v1, s) = loop {
        let v1 = 2.0 * rng.random::<f64>() - 1.0;
        let v2 = 2.0 * rng.random::<f64>() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s > 0.0 && s <= 1.0 {
            break (v1, s);
        }
    };

    let z = v1 * (-2.0 * s.ln() / s).sqrt();
    mean + variance.sqrt() * z
}

/// Standard normal sample (mean 0, variance 1).
#[inline]
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    normal(rng, 0.0, 1.0)
}

/// Build a reproducible rng from a seed string.
///
/// Strings that parse as a `u64` seed the rng with that value directly, so
/// `"12345"` and `12345` agree. Anything else is hashed with 64-bit FNV-1a.
pub fn seeded_rng(seed: &str) -> StdRng {
    StdRng::seed_from_u64(seed_value(seed))
}

/// The numeric seed a seed string maps to.
pub fn seed_value(seed: &str) -> u64 {
    let trimmed = seed.trim();
    match trimmed.parse::<u64>() {
        Ok(v) => v,
        Err(_) => fnv1a(trimmed.as_bytes()),
    }
}

/// A fresh seed string, formatted like `"0.48213"`.
pub fn fresh_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:.5}", rng.random::<f64>())
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |h, &b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Replays a fixed list of `u64` words, cycling when exhausted.
    pub(crate) struct Scripted {
        words: Vec<u64>,
        pos: usize,
    }

    impl Scripted {
        pub(crate) fn new(words: Vec<u64>) -> Self {
            Self { words, pos: 0 }
        }

        /// Word that `random::<f64>()` maps to `value` (exact for multiples of 2^-53).
        pub(crate) fn word_for(value: f64) -> u64 {
            ((value * (1u64 << 53) as f64) as u64) << 11
        }
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let w = self.words[self.pos % self.words.len()];
            self.pos += 1;
            w
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    /// Counts raw draws made on an inner rng.
    pub(crate) struct Counting<R> {
        pub(crate) inner: R,
        pub(crate) draws: usize,
    }

    impl<R: RngCore> RngCore for Counting<R> {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst);
        }
    }
}
