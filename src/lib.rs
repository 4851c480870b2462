//! Seeded synthetic 2D datasets for clustering playgrounds.
//!
//! `playset` generates labeled point clouds with controllable geometry and
//! noise, the shared input to every clustering experiment in a playground:
//!
//! - [`dataset`]: Gaussian blobs, spirals, circles, moons, anisotropic blobs,
//!   XOR quadrants, and two regression surfaces
//! - [`sample`]: uniform and normal samplers over an explicit rng, and seeding
//! - [`shuffle`]: in-place Fisher–Yates
//! - [`schema`]: validation of uploaded datasets
//! - [`cluster`]: handing examples to a clustering backend and back
//!
//! ```rust
//! use playset::dataset::circle;
//! use playset::sample::seeded_rng;
//! use playset::shuffle::shuffle;
//!
//! let mut rng = seeded_rng("12345");
//! let mut data = circle(10, 0.0, &mut rng);
//! shuffle(&mut data, &mut rng);
//! assert!(data.iter().all(|e| e.label == 1.0 || e.label == -1.0));
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod error;
pub mod example;
pub mod geom;
pub mod metrics;
pub mod sample;
pub mod schema;
pub mod shuffle;
pub mod split;

pub use cluster::{assign_clusters, centroids, Clustering};
pub use config::{GeneratedData, PlaygroundConfig};
pub use dataset::{DatasetKind, Problem};
pub use error::{Error, Result};
pub use example::Example;
pub use geom::{distance, Point};
pub use schema::is_valid;
