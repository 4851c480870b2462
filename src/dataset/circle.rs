//! Ring-shaped generators: concentric circles and interleaving moons.

use std::f64::consts::PI;

use rand::Rng;

use super::split_counts;
use crate::example::{sign_label, Example};
use crate::geom::{distance, Point};
use crate::sample::uniform;

/// Outer radius of the circle dataset.
const CIRCLE_RADIUS: f64 = 5.0;
/// Fraction of [`CIRCLE_RADIUS`] the ring bounds stretch by at full noise.
const CIRCLE_STRETCH: f64 = 0.3;

/// Arc radius of the moon dataset.
const MOON_RADIUS: f64 = 3.0;
/// Centre of the upper (positive) arc.
const UPPER_MOON: Point = Point::new(-1.5, -0.75);
/// Centre of the lower (negative) arc.
const LOWER_MOON: Point = Point::new(1.5, 0.75);

/// A disk of positive examples inside a ring of negative ones.
///
/// The inner population draws its radius from `[0, 2.5 + s]`, the outer from
/// `[3.5 - s, 5 + s]`, with `s = 1.5·noise`. Labels come from a jittered copy
/// of each point (jitter `uniform(-5, 5)·noise` per axis): `+1` inside radius
/// 2.5, `-1` outside. The stored position is not jittered, so at high noise
/// labels bleed across the boundary.
pub fn circle<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    let spread = CIRCLE_STRETCH * CIRCLE_RADIUS * noise;
    let bands = [
        (0.0, CIRCLE_RADIUS * 0.5 + spread),
        (CIRCLE_RADIUS * 0.7 - spread, CIRCLE_RADIUS + spread),
    ];

    let mut out = Vec::with_capacity(sample_count);
    for (&(lo, hi), count) in bands.iter().zip(split_counts(sample_count, bands.len())) {
        for _ in 0..count {
            let r = uniform(rng, lo, hi);
            let angle = uniform(rng, 0.0, 2.0 * PI);
            let p = Point::new(r * angle.sin(), r * angle.cos());
            let jittered = p.offset(
                uniform(rng, -CIRCLE_RADIUS, CIRCLE_RADIUS) * noise,
                uniform(rng, -CIRCLE_RADIUS, CIRCLE_RADIUS) * noise,
            );
            out.push(Example::at(p, circle_label(jittered)));
        }
    }
    out
}

fn circle_label(p: Point) -> f64 {
    sign_label(distance(p, Point::ORIGIN) < CIRCLE_RADIUS * 0.5)
}

/// Two interleaving half rings.
///
/// The positive arc is centred at `(-1.5, -0.75)` and spans angles `[0, π]`;
/// the negative arc is centred at `(1.5, 0.75)` and spans `[π, 2π]`. Radii are
/// drawn from `[3·(0.8 - noise), 3]`, so the band thickens as noise grows
/// (the lower bound stops at zero).
///
/// A point is positive when its jittered copy lies at least as close to the
/// upper arc (at the band's mid radius) as to the lower arc. This nearest-arc
/// rule is deliberate: the arcs interleave, so no single inner-disk radius
/// threshold around one centre separates them.
pub fn moon<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    let inner = MOON_RADIUS * (0.8 - noise).max(0.0);
    let band = 0.5 * (inner + MOON_RADIUS);
    let arcs = [(UPPER_MOON, 0.0), (LOWER_MOON, PI)];

    let mut out = Vec::with_capacity(sample_count);
    for (&(center, start), count) in arcs.iter().zip(split_counts(sample_count, arcs.len())) {
        for _ in 0..count {
            let r = uniform(rng, inner, MOON_RADIUS);
            let t = uniform(rng, start, start + PI);
            let p = center.offset(r * t.cos(), r * t.sin());
            let jittered = p.offset(
                uniform(rng, -MOON_RADIUS, MOON_RADIUS) * noise,
                uniform(rng, -MOON_RADIUS, MOON_RADIUS) * noise,
            );
            out.push(Example::at(p, moon_label(jittered, band)));
        }
    }
    out
}

fn moon_label(p: Point, band: f64) -> f64 {
    let to_upper = distance_to_arc(p, UPPER_MOON, band, true);
    let to_lower = distance_to_arc(p, LOWER_MOON, band, false);
    sign_label(to_upper <= to_lower)
}

/// Distance from `p` to the half circle of radius `band` around `center`,
/// the upper half when `upper` is set and the lower half otherwise.
fn distance_to_arc(p: Point, center: Point, band: f64, upper: bool) -> f64 {
    let dy = p.y - center.y;
    let on_side = if upper { dy >= 0.0 } else { dy <= 0.0 };
    if on_side {
        (distance(p, center) - band).abs()
    } else {
        let left = center.offset(-band, 0.0);
        let right = center.offset(band, 0.0);
        distance(p, left).min(distance(p, right))
    }
}
