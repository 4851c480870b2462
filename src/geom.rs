//! Planar geometry shared by the generators.

use serde::{Deserialize, Serialize};

/// Side of the square display domain `[-DOMAIN, DOMAIN]²`.
///
/// Generators aim inside it but never clamp; noise can push points outside.
pub const DOMAIN: f64 = 6.0;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Component-wise translation.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both coordinates lie in the display domain.
    pub fn in_domain(&self) -> bool {
        (-DOMAIN..=DOMAIN).contains(&self.x) && (-DOMAIN..=DOMAIN).contains(&self.y)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Linear map from a domain interval onto a range interval.
///
/// Unclamped by default, so inputs outside the domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl Scale {
    /// Create a linear scale.
    pub const fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Clamp inputs to the domain before mapping.
    pub const fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Map a value.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        let mut t = (value - d0) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }
}

/// A 2x2 matrix applied as `[a b; c d] * (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear2 {
    /// Row-major entries.
    pub m: [[f64; 2]; 2],
}

impl Linear2 {
    /// Create a matrix from rows.
    pub const fn new(m: [[f64; 2]; 2]) -> Self {
        Self { m }
    }

    /// Apply to a point.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y,
            self.m[1][0] * p.x + self.m[1][1] * p.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn scale_extrapolates_unless_clamped() {
        let s = Scale::linear((0.0, 0.5), (0.5, 4.0));
        assert!((s.apply(0.0) - 0.5).abs() < 1e-12);
        assert!((s.apply(0.5) - 4.0).abs() < 1e-12);
        assert!((s.apply(1.0) - 7.5).abs() < 1e-12);

        let c = Scale::linear((0.0, 2.0), (1.0, 0.0)).clamped();
        assert_eq!(c.apply(5.0), 0.0);
        assert_eq!(c.apply(-1.0), 1.0);
        assert!((c.apply(1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear2_multiplies() {
        let m = Linear2::new([[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(m.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn domain_check() {
        assert!(Point::new(6.0, -6.0).in_domain());
        assert!(!Point::new(6.01, 0.0).in_domain());
    }
}
