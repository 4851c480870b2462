use thiserror::Error;

/// Errors returned by the dataset pipeline in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// An uploaded dataset did not match the accepted schema.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// No generator is registered under this name.
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    /// Two paired sequences have different lengths.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// A classification value outside `{-1, +1}`.
    #[error("invalid class value {0}: expected -1 or 1")]
    InvalidClassValue(f64),

    /// JSON parsing failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
