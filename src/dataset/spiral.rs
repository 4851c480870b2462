//! Two interleaved Archimedean spirals.

use std::f64::consts::PI;

use rand::Rng;

use super::split_counts;
use crate::example::{Example, NEGATIVE, POSITIVE};
use crate::sample::uniform;

/// Outer radius reached by each arm.
const MAX_RADIUS: f64 = 5.0;
/// Number of full turns each arm makes.
const TURNS: f64 = 1.75;

/// Two spirals, the negative arm rotated by π from the positive one.
///
/// Point `i` of an arm with `m` points sits at radius `5·i/m` and angle
/// `1.75·2π·i/m + phase`, then receives `uniform(-1, 1)·noise` jitter on
/// each axis.
pub fn spiral<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    let mut out = Vec::with_capacity(sample_count);
    let arms = [(0.0, POSITIVE), (PI, NEGATIVE)];
    for (&(phase, label), m) in arms.iter().zip(split_counts(sample_count, arms.len())) {
        for i in 0..m {
            let frac = i as f64 / m as f64;
            let r = frac * MAX_RADIUS;
            let t = TURNS * frac * 2.0 * PI + phase;
            let x = r * t.sin() + uniform(rng, -1.0, 1.0) * noise;
            let y = r * t.cos() + uniform(rng, -1.0, 1.0) * noise;
            out.push(Example::new(x, y, label));
        }
    }
    out
}
