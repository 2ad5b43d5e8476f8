use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selector::{ceiling, kmin, min, range, Natural};

fn random_vec(size: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(0..(size as u32 / 2).max(1))).collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    for size in [100, 1_000, 10_000, 100_000] {
        let data = random_vec(size);
        let slice = data.as_slice();
        let mid = size as u32 / 4;

        group.bench_with_input(BenchmarkId::new("min", size), &size, |b, _| {
            b.iter(|| min(black_box(slice), Natural))
        });
        group.bench_with_input(BenchmarkId::new("kmin", size), &size, |b, &size| {
            b.iter(|| kmin(black_box(slice), size / 10 + 1, Natural))
        });
        group.bench_with_input(BenchmarkId::new("range", size), &size, |b, _| {
            b.iter(|| range(black_box(slice), &mid, &(mid * 2), Natural))
        });
        group.bench_with_input(BenchmarkId::new("ceiling", size), &size, |b, _| {
            b.iter(|| ceiling(black_box(slice), &mid, Natural))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
