//! # lloyd
//!
//! K-means clustering (Lloyd's algorithm) over pluggable distance metrics.
//!
//! Two pieces: a [`metric`] module computing scalar distances between
//! equal-dimension points (euclidean, cosine, manhattan, chebyshev), and
//! a [`cluster`] module driving the iterative assign/update loop on top
//! of it. The loop stops when the centroids reproduce themselves exactly
//! or the iteration budget runs out.
//!
//! The crate has no file, network, or CLI surface: callers supply an
//! in-memory dataset and consume a [`ClusteringResult`]. The random
//! initialization is the only source of non-determinism and is pinned
//! with [`Kmeans::with_seed`].
//!
//! ```rust
//! use lloyd::{Kmeans, MetricKind};
//!
//! let data = vec![
//!     vec![1.0, 2.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 3.0],
//!     vec![8.0, 7.0],
//!     vec![9.0, 8.0],
//!     vec![7.0, 9.0],
//! ];
//!
//! let result = Kmeans::new(2)
//!     .with_metric(MetricKind::Euclidean)
//!     .with_seed(1)
//!     .fit(&data)
//!     .unwrap();
//!
//! assert!(result.converged);
//! ```
//!
//! Enable the `parallel` feature to fan the assignment step out over
//! rayon; results are identical to the sequential path.

pub mod cluster;
/// Error types used across `lloyd`.
pub mod error;
pub mod metric;

pub use cluster::{Clustering, ClusteringResult, Kmeans};
pub use error::{Error, Result};
pub use metric::{distance, MetricKind};

#[cfg(test)]
mod clustering_tests;
