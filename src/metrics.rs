//! Scores comparing predictions with generated labels.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::example::{NEGATIVE, POSITIVE};

/// Accuracy, precision and recall of a `±1` classifier.
///
/// Precision or recall is NaN when its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationMetrics {
    /// Fraction of correct predictions.
    pub accuracy: f64,
    /// `tp / (tp + fp)`.
    pub precision: f64,
    /// `tp / (tp + fn)`.
    pub recall: f64,
}

/// Coefficient of determination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    /// `1 - rss / tss`.
    pub r2: f64,
}

fn check_pair(pred: &[f64], truth: &[f64]) -> Result<()> {
    if pred.len() != truth.len() {
        return Err(Error::LengthMismatch {
            expected: truth.len(),
            found: pred.len(),
        });
    }
    if truth.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Mean of `0.5 * (pred - truth)²`.
pub fn loss(pred: &[f64], truth: &[f64]) -> Result<f64> {
    check_pair(pred, truth)?;
    let total: f64 = pred
        .iter()
        .zip(truth)
        .map(|(p, t)| 0.5 * (p - t).powi(2))
        .sum();
    Ok(total / truth.len() as f64)
}

/// Confusion-matrix metrics with `+1` as the positive class.
pub fn classification_metrics(pred: &[f64], truth: &[f64]) -> Result<ClassificationMetrics> {
    check_pair(pred, truth)?;

    let (mut tp, mut tn, mut fp, mut fn_) = (0u32, 0u32, 0u32, 0u32);
    for (&p, &t) in pred.iter().zip(truth) {
        match (class_of(p)?, class_of(t)?) {
            (true, true) => tp += 1,
            (false, false) => tn += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
        }
    }

    let (tp, tn, fp, fn_) = (
        f64::from(tp),
        f64::from(tn),
        f64::from(fp),
        f64::from(fn_),
    );
    Ok(ClassificationMetrics {
        accuracy: (tp + tn) / (tp + tn + fp + fn_),
        precision: tp / (tp + fp),
        recall: tp / (tp + fn_),
    })
}

fn class_of(v: f64) -> Result<bool> {
    if v == POSITIVE {
        Ok(true)
    } else if v == NEGATIVE {
        Ok(false)
    } else {
        Err(Error::InvalidClassValue(v))
    }
}

/// R² of continuous predictions.
///
/// Constant `truth` makes the total sum of squares zero; the score is then
/// NaN or infinite, as the formula gives.
pub fn regression_metrics(pred: &[f64], truth: &[f64]) -> Result<RegressionMetrics> {
    check_pair(pred, truth)?;
    let mean = truth.iter().sum::<f64>() / truth.len() as f64;
    let (tss, rss) = pred
        .iter()
        .zip(truth)
        .fold((0.0, 0.0), |(tss, rss), (p, t)| {
            (tss + (t - mean).powi(2), rss + (t - p).powi(2))
        });
    Ok(RegressionMetrics {
        r2: 1.0 - rss / tss,
    })
}
