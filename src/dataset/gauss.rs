//! Gaussian blob generators.

use rand::Rng;

use super::split_counts;
use crate::example::{Example, NEGATIVE, POSITIVE};
use crate::geom::{Linear2, Point, Scale};
use crate::sample::normal;

/// Noise `[0, 0.5]` maps linearly onto per-axis variance `[0.5, 4]`, unclamped.
const VARIANCE_SCALE: Scale = Scale::linear((0.0, 0.5), (0.5, 4.0));

/// Shear applied to the anisotropic blobs.
const ANISOTROPIC_TRANSFORM: Linear2 = Linear2::new([[0.6, -0.64], [-0.4, 0.85]]);

/// Per-axis variance of the blobs at a given noise level.
pub fn blob_variance(noise: f64) -> f64 {
    VARIANCE_SCALE.apply(noise)
}

fn push_blob<R: Rng + ?Sized>(
    rng: &mut R,
    out: &mut Vec<Example>,
    count: usize,
    center: Point,
    variance: f64,
    label: f64,
    transform: Option<&Linear2>,
) {
    for _ in 0..count {
        let x = normal(rng, center.x, variance);
        let y = normal(rng, center.y, variance);
        let p = Point::new(x, y);
        let p = match transform {
            Some(m) => m.apply(p),
            None => p,
        };
        out.push(Example::at(p, label));
    }
}

fn blobs<R: Rng + ?Sized>(
    sample_count: usize,
    noise: f64,
    rng: &mut R,
    populations: &[(Point, f64)],
    transform: Option<&Linear2>,
) -> Vec<Example> {
    let variance = blob_variance(noise);
    let mut out = Vec::with_capacity(sample_count);
    let counts = split_counts(sample_count, populations.len());
    for (&(center, label), count) in populations.iter().zip(counts) {
        push_blob(rng, &mut out, count, center, variance, label, transform);
    }
    out
}

/// Two Gaussian blobs: positive around `(2, 2)`, negative around `(-2, -2)`.
pub fn two_gauss<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    const BLOBS: [(Point, f64); 2] = [
        (Point::new(2.0, 2.0), POSITIVE),
        (Point::new(-2.0, -2.0), NEGATIVE),
    ];
    blobs(sample_count, noise, rng, &BLOBS, None)
}

/// Three Gaussian blobs: two positive on top, one negative below.
pub fn three_gauss<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    const BLOBS: [(Point, f64); 3] = [
        (Point::new(-3.0, 2.5), POSITIVE),
        (Point::new(3.0, 2.5), POSITIVE),
        (Point::new(0.0, -3.0), NEGATIVE),
    ];
    blobs(sample_count, noise, rng, &BLOBS, None)
}

/// Labels carried by the anisotropic blobs, in blob order.
///
/// Only the first is a `±1` class value. The other two are kept as given
/// rather than folded into `{-1, +1}`; datasets from this generator do not
/// pass [`crate::schema::is_valid`].
pub const ANISOTROPIC_LABELS: [f64; 3] = [1.0, -3.0, -4.0];

/// Three Gaussian blobs sheared by a fixed 2x2 transform into elongated clusters.
pub fn anisotropic<R: Rng + ?Sized>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    const BLOBS: [(Point, f64); 3] = [
        (Point::new(-3.0, -3.0), ANISOTROPIC_LABELS[0]),
        (Point::new(0.0, 3.0), ANISOTROPIC_LABELS[1]),
        (Point::new(3.0, -1.0), ANISOTROPIC_LABELS[2]),
    ];
    blobs(sample_count, noise, rng, &BLOBS, Some(&ANISOTROPIC_TRANSFORM))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::seeded_rng;

    fn mean(points: &[Example]) -> Point {
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), e| (sx + e.x(), sy + e.y()));
        Point::new(sx / n, sy / n)
    }

    #[test]
    fn variance_scale_endpoints() {
        assert!((blob_variance(0.0) - 0.5).abs() < 1e-12);
        assert!((blob_variance(0.5) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn two_gauss_blobs_sit_on_their_centres() {
        let mut rng = seeded_rng("gauss");
        let data = two_gauss(2000, 0.0, &mut rng);
        assert_eq!(data.len(), 2000);

        let (pos, neg): (Vec<Example>, Vec<Example>) =
            data.into_iter().partition(|e| e.label == POSITIVE);
        assert_eq!(pos.len(), 1000);
        assert_eq!(neg.len(), 1000);

        let mp = mean(&pos);
        let mn = mean(&neg);
        assert!((mp.x - 2.0).abs() < 0.15 && (mp.y - 2.0).abs() < 0.15);
        assert!((mn.x + 2.0).abs() < 0.15 && (mn.y + 2.0).abs() < 0.15);
    }

    #[test]
    fn odd_counts_give_extra_to_first_blob() {
        let mut rng = seeded_rng("odd");
        let data = two_gauss(7, 0.1, &mut rng);
        assert_eq!(data.len(), 7);
        assert_eq!(data.iter().filter(|e| e.label == POSITIVE).count(), 4);

        let data = three_gauss(8, 0.1, &mut rng);
        assert_eq!(data.len(), 8);
        assert_eq!(data.iter().filter(|e| e.label == NEGATIVE).count(), 2);
    }

    #[test]
    fn anisotropic_keeps_its_labels() {
        let mut rng = seeded_rng("aniso");
        let data = anisotropic(30, 0.0, &mut rng);
        assert_eq!(data.len(), 30);
        for label in ANISOTROPIC_LABELS {
            assert_eq!(data.iter().filter(|e| e.label == label).count(), 10);
        }
    }

    #[test]
    fn anisotropic_blobs_are_transformed() {
        let mut rng = seeded_rng("aniso-centre");
        let data = anisotropic(3000, 0.0, &mut rng);
        let first: Vec<Example> = data
            .iter()
            .filter(|e| e.label == ANISOTROPIC_LABELS[0])
            .cloned()
            .collect();
        let expected = ANISOTROPIC_TRANSFORM.apply(Point::new(-3.0, -3.0));
        let m = mean(&first);
        assert!((m.x - expected.x).abs() < 0.15);
        assert!((m.y - expected.y).abs() < 0.15);
    }
}
