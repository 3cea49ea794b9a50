//! Criterion benchmarks for maze generation.
//!
//! Run with:
//!   cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use antidfs::Generator;

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_size");

    for size in [10usize, 50, 100, 200].iter() {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut generator = Generator::new(size, size, seed, 50, 0.8, 0.08).unwrap();
                generator.generate(0, 0).unwrap();
                black_box(generator.braid_count())
            });
        });
    }

    group.finish();
}

/// Braiding cost at a fixed size.
fn bench_braid_probability(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_braid");

    for p in [0.0f64, 0.1, 0.5, 1.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(p), p, |b, &p| {
            b.iter(|| {
                let mut generator = Generator::new(64, 64, 42, 50, 0.8, p).unwrap();
                generator.generate(0, 0).unwrap();
                black_box(generator.braid_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizes, bench_braid_probability);
criterion_main!(benches);
