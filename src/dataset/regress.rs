//! Regression surfaces with continuous labels in `[-1, 1]`.

use rand::Rng;

use crate::example::Example;
use crate::geom::{distance, Point, Scale, DOMAIN};
use crate::sample::uniform;

/// `x + y` over `[-12, 12]` onto `[-1, 1]`.
const PLANE_SCALE: Scale = Scale::linear((-12.0, 12.0), (-1.0, 1.0));

/// Distance to a landmark `[0, 2]` onto response `[1, 0]`, clamped.
const FALLOFF: Scale = Scale::linear((0.0, 2.0), (1.0, 0.0)).clamped();

/// Landmark centres and signs for [`regress_gaussian`].
const LANDMARKS: [(Point, f64); 6] = [
    (Point::new(-4.0, 2.5), 1.0),
    (Point::new(0.0, 2.5), -1.0),
    (Point::new(4.0, 2.5), 1.0),
    (Point::new(-4.0, -2.5), -1.0),
    (Point::new(0.0, -2.5), 1.0),
    (Point::new(4.0, -2.5), -1.0),
];

fn sample_surface<R, F>(sample_count: usize, noise: f64, rng: &mut R, label: F) -> Vec<Example>
where
    R: Rng + ?Sized,
    F: Fn(Point) -> f64,
{
    let mut out = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        let x = uniform(rng, -DOMAIN, DOMAIN);
        let y = uniform(rng, -DOMAIN, DOMAIN);
        let p = Point::new(x, y);
        let jittered = p.offset(
            uniform(rng, -DOMAIN, DOMAIN) * noise,
            uniform(rng, -DOMAIN, DOMAIN) * noise,
        );
        out.push(Example::at(p, label(jittered)));
    }
    out
}

/// Uniform points over the display domain labeled by the tilted plane `x + y`.
///
/// Noise jitters the position the label is read from, not the stored one, so
/// labels can leave `[-1, 1]` slightly when noise is high.
pub fn regress_plane<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    sample_surface(sample_count, noise, rng, plane_label)
}

fn plane_label(p: Point) -> f64 {
    PLANE_SCALE.apply(p.x + p.y)
}

/// Uniform points labeled by six signed landmarks.
///
/// Each landmark responds with `sign · falloff(distance)`; the label is the
/// response with the largest magnitude, or `0` far from every landmark.
pub fn regress_gaussian<R: Rng + ?Sized>(
    sample_count: usize,
    noise: f64,
    rng: &mut R,
) -> Vec<Example> {
    sample_surface(sample_count, noise, rng, landmark_label)
}

fn landmark_label(p: Point) -> f64 {
    LANDMARKS.iter().fold(0.0, |best: f64, &(center, sign)| {
        let response = sign * FALLOFF.apply(distance(p, center));
        if response.abs() > best.abs() {
            response
        } else {
            best
        }
    })
}
