//! Distance metrics between points.
//!
//! # Supported Metrics
//!
//! | Metric | Formula | Range |
//! |--------|---------|-------|
//! | [`Euclidean`](MetricKind::Euclidean) | `sqrt(Σ (aᵢ - bᵢ)²)` | [0, ∞) |
//! | [`Cosine`](MetricKind::Cosine) | `1 - Σ aᵢbᵢ / (‖a‖₂ ‖b‖₂)` | [0, 2] |
//! | [`Manhattan`](MetricKind::Manhattan) | `Σ abs(aᵢ - bᵢ)` | [0, ∞) |
//! | [`Chebyshev`](MetricKind::Chebyshev) | `maxᵢ abs(aᵢ - bᵢ)` | [0, ∞) |
//!
//! All four are symmetric. Euclidean, manhattan and chebyshev are zero
//! exactly on identical points; cosine is zero up to rounding (the norms
//! are computed separately, so `‖a‖₂ · ‖a‖₂` may differ from `Σ aᵢ²` in
//! the last bit).
//!
//! # Cosine on Zero Vectors
//!
//! Cosine distance divides by the product of the two norms and carries
//! **no guard for zero-magnitude vectors**: the division produces a
//! non-finite value (NaN) that propagates to the caller. Callers who feed
//! the zero vector get the arithmetic they asked for.
//!
//! # Concurrency
//!
//! [`distance`] is a pure function over its inputs. It holds no state and
//! may be called from any number of threads on disjoint inputs.

use crate::error::{Error, Result};
use core::fmt;
use ndarray::ArrayView1;
use std::str::FromStr;

/// The closed set of supported distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Straight-line distance, `sqrt(Σ (aᵢ - bᵢ)²)`.
    Euclidean,
    /// One minus the cosine of the angle between the vectors.
    Cosine,
    /// Taxicab distance, `Σ |aᵢ - bᵢ|`.
    Manhattan,
    /// Maximum coordinate difference, `maxᵢ |aᵢ - bᵢ|`.
    Chebyshev,
}

impl MetricKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Euclidean,
        MetricKind::Cosine,
        MetricKind::Manhattan,
        MetricKind::Chebyshev,
    ];

    /// Lowercase identifier, the inverse of [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Cosine => "cosine",
            MetricKind::Manhattan => "manhattan",
            MetricKind::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    /// Parse an external metric identifier.
    ///
    /// Anything other than the four lowercase identifiers fails with
    /// [`Error::UnsupportedMetric`], before any clustering work begins.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "euclidean" => Ok(MetricKind::Euclidean),
            "cosine" => Ok(MetricKind::Cosine),
            "manhattan" => Ok(MetricKind::Manhattan),
            "chebyshev" => Ok(MetricKind::Chebyshev),
            other => Err(Error::UnsupportedMetric(other.to_string())),
        }
    }
}

/// Compute the distance between two equal-dimension points.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the points have different lengths.
/// The inputs are never truncated or padded.
///
/// # Example
///
/// ```rust
/// use lloyd::{distance, MetricKind};
/// use ndarray::array;
///
/// let a = array![1.0, 2.0, 3.0];
/// let b = array![4.0, 5.0, 6.0];
/// let d = distance(&a.view(), &b.view(), MetricKind::Manhattan).unwrap();
/// assert_eq!(d, 9.0);
/// ```
pub fn distance(
    x1: &ArrayView1<'_, f64>,
    x2: &ArrayView1<'_, f64>,
    metric: MetricKind,
) -> Result<f64> {
    if x1.len() != x2.len() {
        return Err(Error::DimensionMismatch {
            expected: x1.len(),
            found: x2.len(),
        });
    }

    let d = match metric {
        MetricKind::Euclidean => x1
            .iter()
            .zip(x2.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt(),
        MetricKind::Cosine => {
            let dot: f64 = x1.iter().zip(x2.iter()).map(|(a, b)| a * b).sum();
            let mag1 = x1.iter().map(|a| a * a).sum::<f64>().sqrt();
            let mag2 = x2.iter().map(|b| b * b).sum::<f64>().sqrt();
            // Zero-magnitude vectors divide by zero; the non-finite
            // result propagates to the caller.
            1.0 - dot / (mag1 * mag2)
        }
        MetricKind::Manhattan => x1.iter().zip(x2.iter()).map(|(a, b)| (a - b).abs()).sum(),
        MetricKind::Chebyshev => x1
            .iter()
            .zip(x2.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max),
    };

    Ok(d)
}
