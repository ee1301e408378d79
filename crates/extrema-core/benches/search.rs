use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use extrema_core::Strategy;

fn build_sequence(n: usize) -> Vec<i64> {
    // Deterministic but unsorted.
    (0..n as i64).map(|i| (i * 7_919) % 1_000_003).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_max");
    group
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5));

    for n in [1_000usize, 10_000, 100_000] {
        let data = build_sequence(n);
        group.throughput(Throughput::Elements(n as u64));
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &data, |b, data| {
                b.iter(|| strategy.find(black_box(data)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
