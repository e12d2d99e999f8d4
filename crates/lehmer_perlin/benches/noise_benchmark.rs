//! Benchmark for noise generation performance.
//!
//! TARGET: 1,000,000 samples well under a second
//!
//! Run with: cargo bench --package lehmer_perlin --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lehmer_perlin::{NoiseSeed, PerlinNoise, PermutationTable, Point3};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = PerlinNoise::new(NoiseSeed::new(42));

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7), black_box(x * 1.3)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = PerlinNoise::new(NoiseSeed::new(42));

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000u32 {
                let x = f64::from(i % 100) * 0.1;
                let y = f64::from((i / 100) % 100) * 0.1;
                let z = f64::from(i / 10_000) * 0.1;
                black_box(noise.sample(x, y, z));
            }
        });
    });

    group.finish();
}

fn benchmark_batch_into(c: &mut Criterion) {
    let noise = PerlinNoise::new(NoiseSeed::new(42));
    let points: Vec<Point3> = (0..4096u32)
        .map(|i| Point3::new(f64::from(i) * 0.13, f64::from(i) * 0.07, f64::from(i) * 0.03))
        .collect();
    let mut out = vec![0.0; points.len()];

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("sample_into_4096", |b| {
        b.iter(|| {
            noise.sample_into(black_box(&points), &mut out);
            black_box(&out);
        });
    });
    group.finish();
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("permutation_table_build", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
            black_box(PermutationTable::build(NoiseSeed::new(black_box(seed))))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_batch_into,
    benchmark_table_build
);
criterion_main!(benches);
