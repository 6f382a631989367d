//! Benchmark tests for curve evaluation and sampling.
//!
//! Run with: cargo bench --bench curve_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fpv_rates_curves::{
    DEFAULT_SAMPLE_COUNT, compute_axis_rate, compute_throttle, sample_axis_curve,
    sample_throttle_curve,
};
use fpv_rates_profile::{Axis, RateProfile};

fn bench_axis_rate_evaluate(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..=1000).map(|i| -1.0 + 2.0 * i as f32 / 1000.0).collect();

    c.bench_function("axis_rate_evaluate", |b| {
        b.iter(|| {
            for &stick in &inputs {
                std::hint::black_box(compute_axis_rate(
                    std::hint::black_box(stick),
                    70.0,
                    670.0,
                    35.0,
                ));
            }
        });
    });
}

fn bench_throttle_evaluate(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();

    c.bench_function("throttle_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(compute_throttle(std::hint::black_box(input), 0.4, 0.3));
            }
        });
    });
}

fn bench_full_resample(c: &mut Criterion) {
    let profile = RateProfile::default();
    let mut group = c.benchmark_group("resample");
    group.throughput(Throughput::Elements(4 * (DEFAULT_SAMPLE_COUNT as u64 + 1)));

    group.bench_function("all_curves_default_count", |b| {
        b.iter(|| {
            for axis in Axis::ALL {
                let samples = sample_axis_curve(profile.axis(axis), DEFAULT_SAMPLE_COUNT);
                std::hint::black_box(samples.ok());
            }
            let throttle = sample_throttle_curve(&profile.throttle, DEFAULT_SAMPLE_COUNT);
            std::hint::black_box(throttle.ok());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_axis_rate_evaluate,
    bench_throttle_evaluate,
    bench_full_resample
);
criterion_main!(benches);
