//! Validation of user-uploaded datasets.
//!
//! An upload replaces the synthetic data only if it is a JSON array of at
//! most [`MAX_ITEMS`] objects, each with numeric `x` and `y` in `[-6, 6]` and
//! a `label` of `-1` or `1`. Extra keys are ignored.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::example::Example;
use crate::geom::DOMAIN;

/// Largest accepted upload.
pub const MAX_ITEMS: usize = 1000;

/// Whether `value` is an acceptable uploaded dataset.
///
/// Never panics and never mutates its input.
pub fn is_valid(value: &Value) -> bool {
    check(value).is_ok()
}

/// Parse, validate and convert an uploaded dataset.
///
/// Only `x`, `y` and `label` are read; uploads always arrive unassigned
/// (`cluster = 0`, not centroids). On rejection the caller's existing data
/// should be kept as is.
pub fn parse_examples(json: &str) -> Result<Vec<Example>> {
    let value: Value = serde_json::from_str(json)?;
    check(&value).map_err(|reason| {
        tracing::warn!(%reason, "rejected uploaded dataset");
        Error::InvalidDataset(reason)
    })
}

fn check(value: &Value) -> std::result::Result<Vec<Example>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| "expected an array".to_string())?;
    if items.len() > MAX_ITEMS {
        return Err(format!(
            "{} items exceeds the limit of {MAX_ITEMS}",
            items.len()
        ));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| check_item(item).map_err(|reason| format!("item {i}: {reason}")))
        .collect()
}

fn check_item(item: &Value) -> std::result::Result<Example, String> {
    let obj = item
        .as_object()
        .ok_or_else(|| "expected an object".to_string())?;

    let coord = |key: &str| -> std::result::Result<f64, String> {
        let v = obj
            .get(key)
            .ok_or_else(|| format!("missing `{key}`"))?
            .as_f64()
            .ok_or_else(|| format!("`{key}` is not a number"))?;
        if (-DOMAIN..=DOMAIN).contains(&v) {
            Ok(v)
        } else {
            Err(format!("`{key}` = {v} is outside [-{DOMAIN}, {DOMAIN}]"))
        }
    };
    let x = coord("x")?;
    let y = coord("y")?;

    let label = obj
        .get("label")
        .ok_or_else(|| "missing `label`".to_string())?;
    match label.as_f64() {
        Some(l) if l == 1.0 || l == -1.0 => Ok(Example::new(x, y, l)),
        _ => Err(format!("`label` = {label} is not -1 or 1")),
    }
}
