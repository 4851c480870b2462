//! Plumbing between generated examples and a clustering backend.
//!
//! The clustering algorithms themselves (k-means, DBSCAN,
//! expectation-maximization) live outside this crate. This module covers the
//! steps around them:
//!
//! 1. [`feature_rows`] turns examples into dense `[x, y]` rows.
//! 2. A [`Clustering`] backend returns one cluster id per row.
//! 3. [`assign_clusters`] writes those ids back onto the examples.
//! 4. [`centroids`] synthesizes one marker example per cluster for display.
//!
//! [`initial_centroid_indices`] picks distinct starting examples for
//! backends that seed from data points.
//!
//! Centroid markers (`is_centroid == true`) are skipped by every step, so a
//! dataset that already carries markers can be re-clustered in place.
//!
//! ## Usage
//!
//! ```rust
//! use playset::cluster::{assign_clusters, centroids};
//! use playset::dataset::two_gauss;
//! use playset::sample::seeded_rng;
//!
//! let mut data = two_gauss(20, 0.0, &mut seeded_rng("7"));
//!
//! // Stand-in backend: split on the sign of x + y.
//! let by_side = |rows: &[Vec<f32>]| -> playset::Result<Vec<usize>> {
//!     Ok(rows.iter().map(|r| usize::from(r[0] + r[1] > 0.0)).collect())
//! };
//!
//! let k = assign_clusters(&mut data, &by_side).unwrap();
//! assert_eq!(k, 2);
//! assert_eq!(centroids(&data).len(), 2);
//! ```

mod traits;

use std::collections::BTreeMap;

use rand::Rng;

use crate::error::{Error, Result};
use crate::example::Example;
use crate::geom::Point;

pub use traits::Clustering;

/// Dense `[x, y]` rows for every non-centroid example, in order.
#[allow(clippy::cast_possible_truncation)]
pub fn feature_rows(examples: &[Example]) -> Vec<Vec<f32>> {
    examples
        .iter()
        .filter(|e| !e.is_centroid)
        .map(|e| vec![e.x() as f32, e.y() as f32])
        .collect()
}

/// Run `backend` over the examples and store its ids in `cluster`.
///
/// Returns the number of distinct cluster ids produced. Errors if the backend
/// fails or returns the wrong number of ids; examples are left untouched in
/// that case.
pub fn assign_clusters<C: Clustering + ?Sized>(
    examples: &mut [Example],
    backend: &C,
) -> Result<usize> {
    let rows = feature_rows(examples);
    let ids = backend.fit_predict(&rows)?;
    if ids.len() != rows.len() {
        return Err(Error::LengthMismatch {
            expected: rows.len(),
            found: ids.len(),
        });
    }

    let mut ids = ids.into_iter();
    for example in examples.iter_mut().filter(|e| !e.is_centroid) {
        if let Some(id) = ids.next() {
            example.cluster = id;
        }
    }

    let distinct = distinct_clusters(examples);
    tracing::debug!(points = rows.len(), clusters = distinct, "assigned clusters");
    Ok(distinct)
}

fn distinct_clusters(examples: &[Example]) -> usize {
    let mut seen: Vec<usize> = examples
        .iter()
        .filter(|e| !e.is_centroid)
        .map(|e| e.cluster)
        .collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

/// One centroid marker per cluster id, ascending by id.
///
/// Each marker sits at the mean position of its cluster's members, with
/// `is_centroid` set and label `0`.
pub fn centroids(examples: &[Example]) -> Vec<Example> {
    let mut sums: BTreeMap<usize, (f64, f64, usize)> = BTreeMap::new();
    for e in examples.iter().filter(|e| !e.is_centroid) {
        let entry = sums.entry(e.cluster).or_insert((0.0, 0.0, 0));
        entry.0 += e.x();
        entry.1 += e.y();
        entry.2 += 1;
    }

    sums.into_iter()
        .map(|(cluster, (sx, sy, n))| {
            let n = n as f64;
            Example::centroid(Point::new(sx / n, sy / n), cluster)
        })
        .collect()
}

/// `k` distinct indices drawn uniformly from `0..n`.
pub fn initial_centroid_indices<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k > n {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must not exceed the number of examples",
        });
    }
    Ok(rand::seq::index::sample(rng, n, k).into_vec())
}
