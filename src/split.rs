//! Train/test splitting.

use crate::error::{Error, Result};

/// Split `items` into `(train, test)` at `floor(len * perc_train / 100)`.
///
/// The prefix becomes the training set, so shuffle first. `perc_train` must
/// lie in `[0, 100]`.
pub fn split_train_test<T: Clone>(items: &[T], perc_train: f64) -> Result<(Vec<T>, Vec<T>)> {
    let at = split_index(items.len(), perc_train)?;
    let (train, test) = items.split_at(at);
    Ok((train.to_vec(), test.to_vec()))
}

/// Index at which `len` items split for a training percentage.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn split_index(len: usize, perc_train: f64) -> Result<usize> {
    if !(0.0..=100.0).contains(&perc_train) {
        return Err(Error::InvalidParameter {
            name: "perc_train",
            message: "must be within [0, 100]",
        });
    }
    let at = (len as f64 * perc_train / 100.0).floor() as usize;
    Ok(at.min(len))
}
