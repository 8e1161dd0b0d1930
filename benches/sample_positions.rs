//! Benchmarks for the CPU-side position sampling loop.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dustring::cluster::{sample_positions, ClusterConfig};

fn bench_sample_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_positions");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let config = ClusterConfig::ring(0.5, 1.0).with_count(count);
            let mut rng = rand::thread_rng();
            b.iter(|| black_box(sample_positions(&config, &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_positions);
criterion_main!(benches);
