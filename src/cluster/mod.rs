//! K-means clustering over a configurable distance metric.
//!
//! The classic partitioning loop: assign each point to the nearest
//! centroid, recompute each centroid as the mean of its points, repeat
//! until the centroids stop moving (exact equality) or the iteration
//! budget runs out.
//!
//! ## What Makes This Variant Distinct
//!
//! - **Pluggable metric**: the assignment step runs under any
//!   [`MetricKind`](crate::metric::MetricKind), not just euclidean.
//!   Note that with non-euclidean metrics the mean update is no longer
//!   the minimizer of within-cluster distance, so convergence is not
//!   guaranteed by the usual WCSS argument; the iteration budget is the
//!   backstop.
//! - **Uniform random initialization**: k distinct points drawn without
//!   replacement. No k-means++ spreading.
//! - **No empty-cluster recovery**: a centroid that attracts zero points
//!   makes its mean undefined; this surfaces as
//!   [`Error::EmptyCluster`](crate::error::Error::EmptyCluster) rather
//!   than being silently re-seeded. Callers may retry with another seed.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::{Clustering, Kmeans, MetricKind};
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
//!     .with_seed(42)
//!     .fit(&data)
//!     .unwrap();
//!
//! assert_eq!(result.centroids.len(), 2);
//! assert_eq!(result.labels.len(), data.len());
//! ```

mod kmeans;
mod traits;

pub use kmeans::{ClusteringResult, Kmeans};
pub use traits::Clustering;
