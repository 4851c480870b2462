//! XOR quadrants.

use rand::Rng;

use crate::example::{sign_label, Example};
use crate::geom::Point;
use crate::sample::uniform;

const RADIUS: f64 = 5.0;
/// Gap kept clear on both sides of each axis.
const PADDING: f64 = 0.3;

/// Uniform points over `[-5, 5]²`, each coordinate pushed `0.3` away from
/// its axis. Positive in the first and third quadrants.
///
/// The label is read from a jittered copy (`uniform(-5, 5)·noise` per axis),
/// so noise flips labels near the axes while positions stay clean.
pub fn xor<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    let mut out = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        let x = pad(uniform(rng, -RADIUS, RADIUS));
        let y = pad(uniform(rng, -RADIUS, RADIUS));
        let p = Point::new(x, y);
        let jittered = p.offset(
            uniform(rng, -RADIUS, RADIUS) * noise,
            uniform(rng, -RADIUS, RADIUS) * noise,
        );
        out.push(Example::at(p, xor_label(jittered)));
    }
    out
}

#[inline]
fn pad(v: f64) -> f64 {
    if v > 0.0 {
        v + PADDING
    } else {
        v - PADDING
    }
}

fn xor_label(p: Point) -> f64 {
    sign_label(p.x * p.y >= 0.0)
}
