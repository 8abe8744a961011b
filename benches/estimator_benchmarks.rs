//! Estimator benchmarks using Criterion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pointer_velocity::{TrackedPoint, VelocityEstimator};

/// Synthetic pointer trajectory: a spiral with jitter-free samples.
fn trajectory(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.05;
            (250.0 + t * 20.0 * t.cos(), 300.0 + t * 20.0 * t.sin())
        })
        .collect()
}

fn benchmark_predict_update_cycle(c: &mut Criterion) {
    let mut est = VelocityEstimator::new();
    est.update(250.0, 300.0).expect("finite seed");

    c.bench_function("estimator_predict_update", |b| {
        b.iter(|| {
            est.predict();
            est.update(black_box(251.3), black_box(299.1))
                .expect("finite observation");
        })
    });
}

fn benchmark_tracked_point_trajectory(c: &mut Criterion) {
    let samples = trajectory(1000);

    c.bench_function("tracked_point_1000_samples", |b| {
        b.iter(|| {
            let mut point = TrackedPoint::new(samples[0].0, samples[0].1).expect("finite seed");
            for &(x, y) in &samples[1..] {
                point
                    .update_position(black_box(x), black_box(y))
                    .expect("finite observation");
            }
            black_box(point.distance_traveled)
        })
    });
}

criterion_group!(
    benches,
    benchmark_predict_update_cycle,
    benchmark_tracked_point_trajectory
);
criterion_main!(benches);
