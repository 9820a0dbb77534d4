//! End-to-end clustering scenarios on small hand-checkable datasets.

use crate::{Error, Kmeans, MetricKind};

/// Two well-separated blobs of three points each.
fn separated_blobs() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0],
        vec![1.0, 1.0],
        vec![2.0, 3.0],
        vec![8.0, 7.0],
        vec![9.0, 8.0],
        vec![7.0, 9.0],
    ]
}

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < tol, "{:?} !~ {:?}", a, b);
    }
}

#[test]
fn separated_blobs_membership_is_stable_across_seeds() {
    let data = separated_blobs();

    for seed in 0..20 {
        let result = Kmeans::new(2).with_seed(seed).fit(&data).unwrap();

        assert!(result.converged, "seed {} did not converge", seed);
        assert!(result.iterations < 100);

        // Points 0-2 together, points 3-5 together; which index owns
        // which blob depends on the seed.
        assert_eq!(result.labels[0], result.labels[1]);
        assert_eq!(result.labels[0], result.labels[2]);
        assert_eq!(result.labels[3], result.labels[4]);
        assert_eq!(result.labels[3], result.labels[5]);
        assert_ne!(result.labels[0], result.labels[3]);

        // Centroids land on the blob means regardless of seed.
        let low = &result.centroids[result.labels[0]];
        let high = &result.centroids[result.labels[3]];
        assert_close(low, &[4.0 / 3.0, 2.0], 1e-9);
        assert_close(high, &[8.0, 8.0], 1e-9);
    }
}

#[test]
fn same_seed_reproduces_everything() {
    let data = separated_blobs();

    for metric in MetricKind::ALL {
        // Whether a given metric/seed pair converges or surfaces an
        // empty cluster, the outcome must be identical across runs.
        let a = Kmeans::new(2).with_metric(metric).with_seed(9).fit(&data);
        let b = Kmeans::new(2).with_metric(metric).with_seed(9).fit(&data);
        assert_eq!(a, b, "{} not reproducible", metric);
    }
}

#[test]
fn grouping_partitions_the_dataset() {
    let data = separated_blobs();
    let result = Kmeans::new(2).with_seed(5).fit(&data).unwrap();

    let mut seen = vec![false; data.len()];
    for members in &result.clusters {
        for &i in members {
            assert!(!seen[i], "point {} grouped twice", i);
            seen[i] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "some point was never grouped");
}

#[test]
fn metric_identifier_round_trip_into_fit() {
    let data = separated_blobs();

    let metric: MetricKind = "manhattan".parse().unwrap();
    let result = Kmeans::new(2).with_metric(metric).with_seed(3).fit(&data);
    assert!(result.is_ok());

    let err = "mahalanobis".parse::<MetricKind>().unwrap_err();
    assert_eq!(err, Error::UnsupportedMetric("mahalanobis".to_string()));
}
