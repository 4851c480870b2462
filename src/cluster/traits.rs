use crate::error::Result;

/// A hard clustering backend (one cluster id per point).
///
/// Rows are `[x, y]` as `f32`, the shape dense clustering libraries take.
/// Implemented for closures of the same signature, so a k-means, DBSCAN or
/// EM backend plugs in with a one-line adapter.
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster id per input row.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;
}

impl<F> Clustering for F
where
    F: Fn(&[Vec<f32>]) -> Result<Vec<usize>>,
{
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        self(data)
    }
}
