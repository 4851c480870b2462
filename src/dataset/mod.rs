//! Synthetic 2D dataset generators.
//!
//! Every generator has the same shape:
//!
//! ```text
//! fn(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Example>
//! ```
//!
//! and returns exactly `sample_count` examples. Noise is a dimensionless
//! level, normally in `[0, 1]`; each generator documents where it enters.
//!
//! ## Determinism
//!
//! All randomness goes through [`crate::sample::uniform`] and
//! [`crate::sample::normal`] in a fixed order. Given the same rng state and
//! the same arguments, a generator's output is identical element for element.
//! Generators never reseed; build the rng with [`crate::sample::seeded_rng`]
//! immediately before the call.
//!
//! ## Sub-populations
//!
//! Generators built from several populations (blobs, spiral arms, rings,
//! moons) divide the count with [`split_counts`]: the first `n % k`
//! populations get one extra example. Output is ordered population by
//! population; run [`crate::shuffle::shuffle`] before splitting into
//! train and test.
//!
//! ## Classification vs regression
//!
//! Classification generators label with exactly `-1.0` or `+1.0`, except
//! [`anisotropic`], whose blobs carry `1`, `-3` and `-4`
//! (see [`gauss::ANISOTROPIC_LABELS`]). Regression generators label with a
//! continuous value in `[-1, 1]`.
//!
//! ## Usage
//!
//! ```rust
//! use playset::dataset::{circle, DatasetKind};
//! use playset::sample::seeded_rng;
//!
//! let mut rng = seeded_rng("12345");
//! let data = circle(10, 0.0, &mut rng);
//! assert_eq!(data.len(), 10);
//!
//! let kind: DatasetKind = "spiral".parse().unwrap();
//! let spiral = kind.generate(10, 0.1, &mut seeded_rng("12345"));
//! assert_eq!(spiral.len(), 10);
//! ```

mod circle;
pub mod gauss;
mod regress;
mod spiral;
mod xor;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::example::Example;

pub use circle::{circle, moon};
pub use gauss::{anisotropic, blob_variance, three_gauss, two_gauss};
pub use regress::{regress_gaussian, regress_plane};
pub use spiral::spiral;
pub use xor::xor;

/// Divide `n` items among `k` populations as evenly as possible.
///
/// The first `n % k` populations receive one extra item. `k == 0` yields no
/// populations.
pub fn split_counts(n: usize, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }
    let base = n / k;
    let extra = n % k;
    (0..k).map(|i| base + usize::from(i < extra)).collect()
}

/// The kind of target a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Problem {
    /// Labels in `{-1, +1}`.
    #[default]
    Classification,
    /// Labels in `[-1, 1]`.
    Regression,
}

impl Problem {
    /// Number of examples the playground generates for this problem.
    pub const fn default_sample_count(self) -> usize {
        match self {
            Self::Classification => 400,
            Self::Regression => 800,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
        })
    }
}

/// Every registered generator, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatasetKind {
    /// [`circle`].
    Circle,
    /// [`xor`].
    Xor,
    /// [`two_gauss`].
    Gauss,
    /// [`three_gauss`].
    Gauss3,
    /// [`spiral`].
    Spiral,
    /// [`moon`].
    Moon,
    /// [`anisotropic`].
    Anisotropic,
    /// [`regress_plane`].
    RegressPlane,
    /// [`regress_gaussian`].
    RegressGaussian,
}

impl DatasetKind {
    /// All kinds, classification first.
    pub const ALL: [Self; 9] = [
        Self::Circle,
        Self::Xor,
        Self::Gauss,
        Self::Gauss3,
        Self::Spiral,
        Self::Moon,
        Self::Anisotropic,
        Self::RegressPlane,
        Self::RegressGaussian,
    ];

    /// Registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Xor => "xor",
            Self::Gauss => "gauss",
            Self::Gauss3 => "gauss3",
            Self::Spiral => "spiral",
            Self::Moon => "moon",
            Self::Anisotropic => "aniso",
            Self::RegressPlane => "reg-plane",
            Self::RegressGaussian => "reg-gauss",
        }
    }

    /// Which problem this dataset serves.
    pub const fn problem(self) -> Problem {
        match self {
            Self::RegressPlane | Self::RegressGaussian => Problem::Regression,
            _ => Problem::Classification,
        }
    }

    /// Whether every label is exactly `-1` or `+1`.
    pub const fn has_binary_labels(self) -> bool {
        matches!(self.problem(), Problem::Classification) && !matches!(self, Self::Anisotropic)
    }

    /// Kinds that serve `problem`, in registry order.
    pub fn for_problem(problem: Problem) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |k| k.problem() == problem)
    }

    /// Classification kinds.
    pub fn classification() -> impl Iterator<Item = Self> {
        Self::for_problem(Problem::Classification)
    }

    /// Regression kinds.
    pub fn regression() -> impl Iterator<Item = Self> {
        Self::for_problem(Problem::Regression)
    }

    /// Run the generator.
    pub fn generate<R: Rng + ?Sized>(
        self,
        sample_count: usize,
        noise: f64,
        rng: &mut R,
    ) -> Vec<Example> {
        tracing::debug!(dataset = self.name(), sample_count, noise, "generating dataset");
        match self {
            Self::Circle => circle(sample_count, noise, rng),
            Self::Xor => xor(sample_count, noise, rng),
            Self::Gauss => two_gauss(sample_count, noise, rng),
            Self::Gauss3 => three_gauss(sample_count, noise, rng),
            Self::Spiral => spiral(sample_count, noise, rng),
            Self::Moon => moon(sample_count, noise, rng),
            Self::Anisotropic => anisotropic(sample_count, noise, rng),
            Self::RegressPlane => regress_plane(sample_count, noise, rng),
            Self::RegressGaussian => regress_gaussian(sample_count, noise, rng),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownDataset(s.to_string()))
    }
}

impl TryFrom<String> for DatasetKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DatasetKind> for String {
    fn from(kind: DatasetKind) -> Self {
        kind.name().to_string()
    }
}
