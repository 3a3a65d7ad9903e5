use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hilbert_tf::HilbertTransform;
use neuro_filter::{filter, FilterParameters, PassType};
use neuro_timefreq::{TimeFrequency, TimeFrequencyParameters};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

const FS: f64 = 1000.0;

/// Generate white noise
fn generate_noise(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.sample(StandardNormal)).collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bandpass");
    let params = FilterParameters::default();

    for &size in &[2_000usize, 10_000, 50_000] {
        let data = generate_noise(size, 42);
        group.bench_with_input(BenchmarkId::new("beta", size), &data, |b, data| {
            b.iter(|| filter(black_box(data), FS, PassType::bandpass(13.0, 30.0), &params))
        });
        group.bench_with_input(BenchmarkId::new("theta", size), &data, |b, data| {
            b.iter(|| filter(black_box(data), FS, PassType::bandpass(4.0, 8.0), &params))
        });
    }

    group.finish();
}

fn bench_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("AnalyticSignal");

    // Prime and non-power-of-two lengths are where padding matters
    for &size in &[4_096usize, 9_973, 10_000] {
        let data = generate_noise(size, 7);
        for padded in [false, true] {
            let transformer = HilbertTransform::new().with_padding(padded);
            let label = if padded { "padded" } else { "exact" };
            group.bench_with_input(BenchmarkId::new(label, size), &data, |b, data| {
                b.iter(|| transformer.analytic_signal(black_box(data)))
            });
        }
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("TimeFrequency");
    let tf = TimeFrequency::new(TimeFrequencyParameters::default());

    for &size in &[2_000usize, 10_000] {
        let data = generate_noise(size, 3);
        group.bench_with_input(BenchmarkId::new("freq_by_time", size), &data, |b, data| {
            b.iter(|| tf.freq_by_time(black_box(data), FS, (13.0, 30.0)))
        });
        group.bench_with_input(BenchmarkId::new("compute", size), &data, |b, data| {
            b.iter(|| tf.compute(black_box(data), FS, (13.0, 30.0)))
        });
    }

    let batch: Vec<Vec<f64>> = (0..16).map(|seed| generate_noise(5_000, seed)).collect();
    group.bench_function("compute_batch_16x5000", |b| {
        b.iter(|| tf.compute_batch(black_box(&batch), FS, (13.0, 30.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_analytic, bench_pipeline);
criterion_main!(benches);
