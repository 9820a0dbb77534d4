use core::fmt;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the metric and clustering primitives.
///
/// All conditions are detected at their cause and returned immediately;
/// the library never fabricates partial results and never retries
/// internally. Whether to re-run with a different seed after
/// [`Error::EmptyCluster`] is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two points being compared have different lengths.
    ///
    /// Fatal to the whole clustering call: it indicates malformed input
    /// data, not a transient condition.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A metric identifier that is not one of the supported kinds.
    UnsupportedMetric(String),

    /// Invalid number of clusters requested (k < 1 or k > N).
    ///
    /// Sampling k distinct initial centroids without replacement requires
    /// at least k points.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// A centroid received zero assigned points during an update step,
    /// making its mean undefined.
    ///
    /// Recoverable but unhandled: there is no re-seeding or merge policy.
    EmptyCluster {
        /// Centroid index that was starved.
        cluster: usize,
        /// Zero-based iteration in which it happened.
        iteration: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::UnsupportedMetric(name) => {
                write!(f, "distance metric '{name}' is not supported")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::EmptyCluster { cluster, iteration } => {
                write!(
                    f,
                    "cluster {cluster} received no points in iteration {iteration}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 2");

        let e = Error::UnsupportedMetric("minkowski".to_string());
        assert_eq!(e.to_string(), "distance metric 'minkowski' is not supported");

        let e = Error::InvalidClusterCount {
            requested: 5,
            n_items: 2,
        };
        assert_eq!(e.to_string(), "cannot create 5 clusters from 2 items");

        let e = Error::EmptyCluster {
            cluster: 1,
            iteration: 0,
        };
        assert_eq!(
            e.to_string(),
            "cluster 1 received no points in iteration 0"
        );
    }
}
