//! Labeled examples produced by the generators.

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Positive classification label.
pub const POSITIVE: f64 = 1.0;
/// Negative classification label.
pub const NEGATIVE: f64 = -1.0;

/// One synthetic data point with its label and later cluster assignment.
///
/// Generators set `point` and `label` only. `cluster` and `is_centroid` are
/// written by downstream clustering code; `vote_counts` belongs to ensemble
/// classifiers.
///
/// Serializes as `{"x", "y", "label", "cluster", "isCentroid", "voteCounts"?}`,
/// and deserializes from the bare upload shape `{"x", "y", "label"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Position.
    #[serde(flatten)]
    pub point: Point,
    /// `±1` for classification, `[-1, 1]` for regression.
    pub label: f64,
    /// Cluster id, `0` until a clustering pass writes it.
    #[serde(default)]
    pub cluster: usize,
    /// Set on synthesized centroid markers, never on raw data.
    #[serde(default)]
    pub is_centroid: bool,
    /// Ensemble vote tallies `[negative, positive]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_counts: Option<[u32; 2]>,
}

impl Example {
    /// A freshly generated example.
    pub fn new(x: f64, y: f64, label: f64) -> Self {
        Self::at(Point::new(x, y), label)
    }

    /// A freshly generated example at `point`.
    pub fn at(point: Point, label: f64) -> Self {
        Self {
            point,
            label,
            cluster: 0,
            is_centroid: false,
            vote_counts: None,
        }
    }

    /// A centroid marker for `cluster`.
    pub fn centroid(point: Point, cluster: usize) -> Self {
        Self {
            point,
            label: 0.0,
            cluster,
            is_centroid: true,
            vote_counts: None,
        }
    }

    /// Horizontal coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Vertical coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}

/// Sign label for a boolean decision.
#[inline]
pub(crate) fn sign_label(positive: bool) -> f64 {
    if positive {
        POSITIVE
    } else {
        NEGATIVE
    }
}
