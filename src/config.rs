//! Playground configuration and the regenerate pipeline.
//!
//! [`PlaygroundConfig`] holds the controls that shape a dataset: which
//! generator, how much noise, the seed, and the train/test ratio. It
//! (de)serializes with serde in camelCase, so an outer state store can keep
//! it in whatever format it likes.
//!
//! [`PlaygroundConfig::generate`] runs one reproducible regeneration:
//! resolve the seed, build the rng, generate, shuffle, split.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cluster::initial_centroid_indices;
use crate::dataset::{DatasetKind, Problem};
use crate::error::{Error, Result};
use crate::example::Example;
use crate::sample::{fresh_seed, seeded_rng};
use crate::shuffle::shuffle;
use crate::split::split_train_test;

/// User-facing controls for dataset generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaygroundConfig {
    /// Generator used for classification.
    pub dataset: DatasetKind,
    /// Generator used for regression.
    pub reg_dataset: DatasetKind,
    /// Active problem; selects between `dataset` and `reg_dataset`.
    pub problem: Problem,
    /// Noise in percent, `0..=100`. Generators receive `noise / 100`.
    pub noise: f64,
    /// Seed string; a fresh one is drawn when absent.
    pub seed: Option<String>,
    /// Percentage of examples used for training.
    pub perc_train_data: f64,
    /// Requested number of clusters for the clustering backend.
    pub clusters: usize,
    /// Overrides the problem's default sample count.
    pub sample_count: Option<usize>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetKind::Circle,
            reg_dataset: DatasetKind::RegressPlane,
            problem: Problem::Classification,
            noise: 0.0,
            seed: None,
            perc_train_data: 70.0,
            clusters: 2,
            sample_count: None,
        }
    }
}

/// Output of one regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedData {
    /// Seed the data was generated from.
    pub seed: String,
    /// All examples, shuffled.
    pub examples: Vec<Example>,
    /// Training prefix of `examples`.
    pub train: Vec<Example>,
    /// Remaining examples.
    pub test: Vec<Example>,
}

impl PlaygroundConfig {
    /// Create a config with default controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the classification dataset.
    ///
    /// A regression kind switches the problem to regression and sets the
    /// regression dataset instead.
    pub fn with_dataset(mut self, dataset: DatasetKind) -> Self {
        self.problem = dataset.problem();
        match self.problem {
            Problem::Classification => self.dataset = dataset,
            Problem::Regression => self.reg_dataset = dataset,
        }
        self
    }

    /// Set the active problem.
    pub fn with_problem(mut self, problem: Problem) -> Self {
        self.problem = problem;
        self
    }

    /// Set noise in percent.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Set the seed string.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the training percentage.
    pub fn with_perc_train_data(mut self, perc: f64) -> Self {
        self.perc_train_data = perc;
        self
    }

    /// Set the requested cluster count.
    pub fn with_clusters(mut self, clusters: usize) -> Self {
        self.clusters = clusters;
        self
    }

    /// Override the number of generated examples.
    pub fn with_sample_count(mut self, n: usize) -> Self {
        self.sample_count = Some(n);
        self
    }

    /// The generator for the active problem.
    pub fn active_dataset(&self) -> DatasetKind {
        match self.problem {
            Problem::Classification => self.dataset,
            Problem::Regression => self.reg_dataset,
        }
    }

    /// Number of examples a regeneration produces.
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count
            .unwrap_or_else(|| self.problem.default_sample_count())
    }

    /// Check ranges and that each dataset slot holds a kind of its problem.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.noise) {
            return Err(Error::InvalidParameter {
                name: "noise",
                message: "must be within [0, 100]",
            });
        }
        if !(0.0..=100.0).contains(&self.perc_train_data) {
            return Err(Error::InvalidParameter {
                name: "perc_train_data",
                message: "must be within [0, 100]",
            });
        }
        if self.clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "clusters",
                message: "must be at least 1",
            });
        }
        if self.dataset.problem() != Problem::Classification {
            return Err(Error::InvalidParameter {
                name: "dataset",
                message: "must be a classification dataset",
            });
        }
        if self.reg_dataset.problem() != Problem::Regression {
            return Err(Error::InvalidParameter {
                name: "reg_dataset",
                message: "must be a regression dataset",
            });
        }
        Ok(())
    }

    /// Generate, shuffle and split a dataset.
    ///
    /// Uses the configured seed, or draws and records a fresh one. Seeding and
    /// every draw happen on one rng owned by this call.
    pub fn generate(&self) -> Result<GeneratedData> {
        self.validate()?;

        let seed = match &self.seed {
            Some(s) => s.clone(),
            None => fresh_seed(&mut rand::rng()),
        };
        let mut rng = seeded_rng(&seed);

        let kind = self.active_dataset();
        let mut examples =
            kind.generate(self.effective_sample_count(), self.noise / 100.0, &mut rng);
        shuffle(&mut examples, &mut rng);
        let (train, test) = split_train_test(&examples, self.perc_train_data)?;

        tracing::info!(
            dataset = kind.name(),
            %seed,
            train = train.len(),
            test = test.len(),
            "regenerated data"
        );

        Ok(GeneratedData {
            seed,
            examples,
            train,
            test,
        })
    }

    /// Pick `clusters` distinct starting indices among `n` examples for a
    /// centroid-based backend.
    pub fn initial_centroids<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        initial_centroid_indices(n, self.clusters, rng)
    }

    /// Generate again with a new seed, recording it in the config.
    pub fn regenerate(&mut self) -> Result<GeneratedData> {
        self.seed = Some(fresh_seed(&mut rand::rng()));
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_playground() {
        let c = PlaygroundConfig::default();
        assert_eq!(c.active_dataset(), DatasetKind::Circle);
        assert_eq!(c.effective_sample_count(), 400);
        assert_eq!(c.perc_train_data, 70.0);
        assert_eq!(c.clusters, 2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn regression_dataset_switches_problem() {
        let c = PlaygroundConfig::new().with_dataset(DatasetKind::RegressGaussian);
        assert_eq!(c.problem, Problem::Regression);
        assert_eq!(c.active_dataset(), DatasetKind::RegressGaussian);
        assert_eq!(c.dataset, DatasetKind::Circle);
        assert_eq!(c.effective_sample_count(), 800);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(PlaygroundConfig::new().with_noise(101.0).validate().is_err());
        assert!(PlaygroundConfig::new()
            .with_perc_train_data(-5.0)
            .validate()
            .is_err());
        assert!(PlaygroundConfig::new().with_clusters(0).validate().is_err());

        let mut c = PlaygroundConfig::new();
        c.dataset = DatasetKind::RegressPlane;
        assert!(c.validate().is_err());
    }

    #[test]
    fn generate_is_reproducible_and_split() {
        let c = PlaygroundConfig::new()
            .with_dataset(DatasetKind::Spiral)
            .with_noise(20.0)
            .with_seed("42")
            .with_sample_count(50);
        let a = c.generate().unwrap();
        let b = c.generate().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, "42");
        assert_eq!(a.examples.len(), 50);
        assert_eq!(a.train.len(), 35);
        assert_eq!(a.test.len(), 15);
        assert_eq!(&a.examples[..35], a.train.as_slice());
    }

    #[test]
    fn generate_shuffles_generation_order() {
        let data = PlaygroundConfig::new()
            .with_dataset(DatasetKind::Gauss)
            .with_seed("shuffle")
            .generate()
            .unwrap();
        // Unshuffled output would put all positives first.
        let first_half_positive = data.examples[..200]
            .iter()
            .filter(|e| e.label > 0.0)
            .count();
        assert!(first_half_positive < 200);
    }

    #[test]
    fn initial_centroids_use_the_cluster_count() {
        let c = PlaygroundConfig::new().with_clusters(3);
        let mut rng = seeded_rng("centroids");
        let mut picked = c.initial_centroids(20, &mut rng).unwrap();
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|&i| i < 20));
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 3);

        assert!(c.initial_centroids(2, &mut rng).is_err());
        assert_eq!(
            PlaygroundConfig::new()
                .initial_centroids(400, &mut rng)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn regenerate_records_a_seed() {
        let mut c = PlaygroundConfig::new().with_sample_count(10);
        let data = c.regenerate().unwrap();
        assert_eq!(c.seed.as_deref(), Some(data.seed.as_str()));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let c = PlaygroundConfig::from_json(r#"{"dataset": "moon", "noise": 35, "seed": "abc"}"#)
            .unwrap();
        assert_eq!(c.dataset, DatasetKind::Moon);
        assert_eq!(c.noise, 35.0);
        assert_eq!(c.perc_train_data, 70.0);

        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"regDataset\":\"reg-plane\""));
        assert!(json.contains("\"percTrainData\":70.0"));
        assert_eq!(PlaygroundConfig::from_json(&json).unwrap(), c);

        assert!(PlaygroundConfig::from_json(r#"{"noise": 250}"#).is_err());
        assert!(PlaygroundConfig::from_json(r#"{"dataset": "donut"}"#).is_err());
    }
}
