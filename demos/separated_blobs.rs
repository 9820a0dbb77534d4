use lloyd::{Kmeans, MetricKind};

fn main() {
    // Minimal end-to-end: two obvious blobs, clustered under each of the
    // four supported metrics. Run with RUST_LOG=debug to watch the loop.
    env_logger::init();

    let data = vec![
        vec![1.0, 2.0],
        vec![1.0, 1.0],
        vec![2.0, 3.0],
        vec![8.0, 7.0],
        vec![9.0, 8.0],
        vec![7.0, 9.0],
    ];

    for metric in MetricKind::ALL {
        let outcome = Kmeans::new(2)
            .with_metric(metric)
            .with_seed(42)
            .fit(&data);

        match outcome {
            Ok(result) => {
                println!(
                    "{}: converged={} iterations={}",
                    metric, result.converged, result.iterations
                );
                for (c, members) in result.clusters.iter().enumerate() {
                    println!(
                        "  cluster {}: centroid={:?} points={:?}",
                        c, result.centroids[c], members
                    );
                }
            }
            // An empty cluster is surfaced, not patched; a caller that
            // wants a partition anyway retries with another seed.
            Err(e) => println!("{}: failed: {}", metric, e),
        }
        println!();
    }
}
