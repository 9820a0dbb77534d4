//! K-means clustering (Lloyd's algorithm) under a pluggable metric.
//!
//! # The Loop
//!
//! 1. Initialize k centroids by sampling k distinct points uniformly at
//!    random, without replacement
//! 2. **Assign**: each point → nearest centroid under the chosen metric
//!    (exact ties go to the lowest centroid index)
//! 3. **Update**: each centroid → coordinate-wise mean of its points
//! 4. Repeat until the new centroids are exactly equal to the previous
//!    ones, or the iteration budget runs out
//!
//! Exhausting the budget is not an error: the last computed state is
//! returned. Exact equality (not a tolerance) is the convergence test,
//! which works because the means are computed from the same finite set
//! of points each time — once assignments stop changing, the means
//! reproduce themselves bit for bit.
//!
//! # Failure Modes
//!
//! - **Empty cluster**: a centroid that attracts zero points has an
//!   undefined mean. Surfaces as [`Error::EmptyCluster`]; there is no
//!   re-seeding policy. Retrying with a different seed is up to the
//!   caller.
//! - **Local optima**: the usual k-means caveat; a single random
//!   initialization finds a local minimum only.
//! - **Non-euclidean metrics**: the mean update does not minimize
//!   within-cluster distance under cosine/manhattan/chebyshev, so the
//!   monotone-descent convergence argument does not apply; `max_iter`
//!   is the backstop.
//!
//! # Determinism
//!
//! The injected seed is the only source of non-determinism. With the
//! `parallel` feature the assignment step fans out across threads, but
//! labels are written by point index and the grouping is assembled in
//! dataset order afterwards, so output is identical to the sequential
//! path regardless of scheduling.

use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::metric::{distance, MetricKind};
use log::debug;
use ndarray::{Array2, ArrayView1};
use rand::prelude::*;
use rand::seq::index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// K-means clusterer.
///
/// Configured via builder methods, then run with [`Kmeans::fit`]. Each
/// call is independent: no state is retained between invocations apart
/// from consuming the random source.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Distance metric for the assignment step.
    metric: MetricKind,
    /// Maximum iterations.
    max_iter: usize,
    /// Random seed.
    seed: Option<u64>,
}

/// Final state of a clustering run.
///
/// Created fresh per [`Kmeans::fit`] invocation; immutable after return.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringResult {
    /// Final centroids, ordered by centroid index.
    pub centroids: Vec<Vec<f64>>,
    /// Point indices grouped per centroid index, each group in original
    /// dataset order. Always k entries.
    pub clusters: Vec<Vec<usize>>,
    /// Centroid index per point, parallel to the input dataset.
    pub labels: Vec<usize>,
    /// Iterations actually performed.
    pub iterations: usize,
    /// Whether the centroids stabilized before the budget ran out.
    pub converged: bool,
}

impl Kmeans {
    /// Create a new K-means clusterer with euclidean distance and an
    /// iteration budget of 100.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: MetricKind::Euclidean,
            max_iter: 100,
            seed: None,
        }
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster `data` into k groups.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidClusterCount`] when k < 1 or k > N, before any
    ///   sampling happens.
    /// - [`Error::DimensionMismatch`] when the points do not all share
    ///   the dimension of the first point.
    /// - [`Error::EmptyCluster`] when an update step finds a centroid
    ///   with zero assigned points.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<ClusteringResult> {
        let n = data.len();
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        // Pack into a row-major matrix, validating dimensions as we go.
        let d = data[0].len();
        let mut data_arr = Array2::zeros((n, d));
        for (i, point) in data.iter().enumerate() {
            if point.len() != d {
                return Err(Error::DimensionMismatch {
                    expected: d,
                    found: point.len(),
                });
            }
            data_arr.row_mut(i).assign(&ArrayView1::from(&point[..]));
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        // Initial centroids: k distinct points, uniform without replacement.
        let chosen = index::sample(&mut rng, n, self.k).into_vec();
        let mut centroids = Array2::zeros((self.k, d));
        for (c, &i) in chosen.iter().enumerate() {
            centroids.row_mut(c).assign(&data_arr.row(i));
        }
        debug!(
            "k-means: n={} d={} k={} metric={} seeded from points {:?}",
            n, d, self.k, self.metric, chosen
        );

        let mut labels;
        let mut clusters;
        let mut iterations = 0;
        let mut converged = false;

        if self.max_iter == 0 {
            // No update budget at all: report the grouping induced by
            // the sampled centroids so the result is still well formed.
            labels = self.assign(&data_arr, &centroids)?;
            clusters = group_by_centroid(&labels, self.k);
        } else {
            labels = Vec::new();
            clusters = Vec::new();

            for iter in 0..self.max_iter {
                iterations = iter + 1;
                labels = self.assign(&data_arr, &centroids)?;
                clusters = group_by_centroid(&labels, self.k);

                let new_centroids = self.update(&data_arr, &clusters, iter)?;

                if new_centroids == centroids {
                    converged = true;
                    debug!("k-means: converged after {} iterations", iterations);
                    break;
                }
                centroids = new_centroids;
            }

            if !converged {
                debug!(
                    "k-means: budget of {} iterations exhausted without convergence",
                    self.max_iter
                );
            }
        }

        Ok(ClusteringResult {
            centroids: centroids.outer_iter().map(|row| row.to_vec()).collect(),
            clusters,
            labels,
            iterations,
            converged,
        })
    }

    /// Assignment step: nearest centroid index per point.
    ///
    /// Embarrassingly parallel across points; each distance computation
    /// reads the same immutable centroid matrix.
    fn assign(&self, data: &Array2<f64>, centroids: &Array2<f64>) -> Result<Vec<usize>> {
        #[cfg(feature = "parallel")]
        {
            (0..data.nrows())
                .into_par_iter()
                .map(|i| self.nearest_centroid(&data.row(i), centroids))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..data.nrows())
                .map(|i| self.nearest_centroid(&data.row(i), centroids))
                .collect()
        }
    }

    fn nearest_centroid(
        &self,
        point: &ArrayView1<'_, f64>,
        centroids: &Array2<f64>,
    ) -> Result<usize> {
        let mut best_cluster = 0;
        let mut best_dist = f64::INFINITY;

        for c in 0..centroids.nrows() {
            let dist = distance(point, &centroids.row(c), self.metric)?;
            // Strict comparison: exact ties keep the lowest centroid
            // index. Non-finite distances never beat the running best.
            if dist < best_dist {
                best_dist = dist;
                best_cluster = c;
            }
        }

        Ok(best_cluster)
    }

    /// Update step: coordinate-wise mean per centroid index.
    fn update(
        &self,
        data: &Array2<f64>,
        clusters: &[Vec<usize>],
        iteration: usize,
    ) -> Result<Array2<f64>> {
        let d = data.ncols();
        let mut new_centroids = Array2::zeros((self.k, d));

        for (c, members) in clusters.iter().enumerate() {
            // The mean of zero points is undefined. Surfaced, not patched.
            if members.is_empty() {
                return Err(Error::EmptyCluster {
                    cluster: c,
                    iteration,
                });
            }

            for &i in members {
                for j in 0..d {
                    new_centroids[[c, j]] += data[[i, j]];
                }
            }
            for j in 0..d {
                new_centroids[[c, j]] /= members.len() as f64;
            }
        }

        Ok(new_centroids)
    }
}

/// Group point indices by label into a fixed array of k growable
/// sequences, each in original dataset order.
fn group_by_centroid(labels: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &label) in labels.iter().enumerate() {
        clusters[label].push(i);
    }
    clusters
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        self.fit(data).map(|result| result.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
